//! Controller behavior against a scripted source with gated resolution.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::tests_outside_test_module,
        reason = "Test allows"
    )
)]

use core::time::Duration;
use std::sync::Arc;

use catalog_client::ScriptedSource;
use catalog_core::{DataSource, Post, PostId, Request, SearchQuery};
use catalog_testing::{FixtureData, comment, post};
use catalog_view::present::empty_message;
use catalog_view::{
    Controller, ListItem as _, ListView, Loader, Phase, PostDetail, PostDetailLoader, PostsLoader,
    Route, Screen,
};
use proptest::prelude::*;
use tokio::runtime::Builder;
use tokio::task::yield_now;
use tokio::time::timeout;

fn post_detail_source(data: &FixtureData) -> Arc<ScriptedSource> {
    let mut source = ScriptedSource::new();
    for record in &data.posts {
        source = source
            .with_post(record)
            .with_comments(record.id, &data.comments_for(record.id));
    }
    Arc::new(source)
}

/// Yields until every request in `requests` has reached the source.
async fn wait_for_calls(source: &ScriptedSource, requests: &[Request]) {
    while requests
        .iter()
        .any(|request| source.call_count(*request) == 0)
    {
        yield_now().await;
    }
}

fn shown_post<L>(controller: &Controller<L>) -> Option<PostId>
where
    L: Loader<Output = PostDetail>,
{
    controller.state().data().map(|detail| detail.post.id)
}

/// Two overlapping triggers resolved in the given order.
async fn overlapping_triggers(first: PostId, second: PostId, stale_first: bool, stale_fails: bool) {
    let mut source = ScriptedSource::new();
    for id in [first, second] {
        source = source
            .with_post(&post(id, 1, &format!("post {id}"), "body"))
            .with_comments(id, &[comment(id * 10, id, "name", "a@b.c", "text")]);
    }
    if stale_fails {
        source = source.with_failure(
            Request::PostComments(first),
            format!("Failed to fetch comments for post {first}: HTTP 500"),
        );
    }
    let source = Arc::new(source);
    for id in [first, second] {
        source.hold(Request::Post(id));
        source.hold(Request::PostComments(id));
    }

    let shared: Arc<dyn DataSource> = Arc::clone(&source) as Arc<dyn DataSource>;
    let mut controller = Controller::mount(PostDetailLoader::new(shared), first);
    controller.trigger(second);
    assert_eq!(controller.state().phase(), Phase::Loading);

    let order = if stale_first {
        [first, second]
    } else {
        [second, first]
    };
    for id in order {
        source.release(Request::Post(id));
        source.release(Request::PostComments(id));
        let completion = controller.next_completion().await.unwrap();
        let applied = controller.apply(completion);

        assert_eq!(applied, id == second, "only the later trigger may commit");
        assert_ne!(shown_post(&controller), Some(first), "stale data shown");
        assert_eq!(controller.state().error(), None, "stale failure shown");
    }

    assert_eq!(controller.state().phase(), Phase::Success);
    assert_eq!(shown_post(&controller), Some(second));
    assert_eq!(controller.key(), Some(&second));
}

proptest! {
    #[test]
    fn prop_later_trigger_wins(
        first in 1u64..500,
        offset in 1u64..500,
        stale_first in any::<bool>(),
        stale_fails in any::<bool>(),
    ) {
        let runtime = Builder::new_current_thread().enable_all().build().unwrap();
        runtime.block_on(overlapping_triggers(first, first + offset, stale_first, stale_fails));
    }
}

#[tokio::test]
async fn test_post_detail_waits_for_both_requests() {
    let data = FixtureData::sample();
    let source = post_detail_source(&data);
    source.hold(Request::Post(1));
    source.hold(Request::PostComments(1));

    let shared: Arc<dyn DataSource> = Arc::clone(&source) as Arc<dyn DataSource>;
    let mut controller = Controller::mount(PostDetailLoader::new(shared), 1);
    wait_for_calls(&source, &[Request::Post(1), Request::PostComments(1)]).await;
    assert_eq!(source.call_count(Request::Post(1)), 1);
    assert_eq!(source.call_count(Request::PostComments(1)), 1);
    assert!(controller.state().is_loading(), "both requests in flight");

    source.release(Request::Post(1));
    let early = timeout(Duration::from_millis(50), controller.next_completion()).await;
    assert!(early.is_err(), "must not resolve before comments arrive");
    assert!(controller.state().is_loading());

    source.release(Request::PostComments(1));
    controller.settle().await;
    assert_eq!(controller.state().phase(), Phase::Success);
    let detail = controller.state().data().unwrap();
    assert_eq!(detail.post.id, 1);
    assert_eq!(detail.comments.len(), data.comments_for(1).len());
    assert_eq!(detail.comments.len(), 5);
}

#[tokio::test]
async fn test_one_failed_fetch_fails_the_screen() {
    let data = FixtureData::sample();
    let source = post_detail_source(&data);
    source.set_failure(
        Request::PostComments(2),
        "Failed to fetch comments for post 2: HTTP 500 Internal Server Error",
    );

    let shared: Arc<dyn DataSource> = Arc::clone(&source) as Arc<dyn DataSource>;
    let mut controller = Controller::mount(PostDetailLoader::new(shared), 1);
    controller.settle().await;
    assert_eq!(shown_post(&controller), Some(1));

    source.hold(Request::Post(2));
    controller.trigger(2);
    controller.settle().await;

    assert_eq!(controller.state().phase(), Phase::Failure);
    assert_eq!(controller.state().data(), None, "prior data must not be shown");
    assert_eq!(
        controller.state().error(),
        Some("Failed to fetch comments for post 2: HTTP 500 Internal Server Error")
    );
    source.release(Request::Post(2));
}

#[tokio::test]
async fn test_retry_after_failure_refetches() {
    let data = FixtureData::sample();
    let source = post_detail_source(&data);
    source.set_failure(Request::Post(3), "Failed to fetch post 3: HTTP 503");

    let shared: Arc<dyn DataSource> = Arc::clone(&source) as Arc<dyn DataSource>;
    let mut controller = Controller::mount(PostDetailLoader::new(shared), 3);
    controller.settle().await;
    assert_eq!(controller.state().phase(), Phase::Failure);

    source.set_reply(Request::Post(3), &data.posts[2]);
    assert!(controller.retry());
    controller.settle().await;

    assert_eq!(controller.state().phase(), Phase::Success);
    assert_eq!(source.call_count(Request::Post(3)), 2);
    assert!(source.call_count(Request::PostComments(3)) >= 1);
    assert!(controller.state().data().unwrap().comments.is_empty());
}

#[tokio::test]
async fn test_empty_post_list_shows_empty_state() {
    let shared: Arc<dyn DataSource> = Arc::new(ScriptedSource::new().with_posts(&[]));
    let mut screen = Screen::open(Route::Posts, &shared);
    assert!(screen.is_loading());
    screen.settle().await;

    let Screen::Posts(posts) = &screen else {
        panic!("expected post list screen");
    };
    assert_eq!(posts.view(), ListView::Empty);
    assert_eq!(empty_message(Post::NOUN), "No posts found");
    assert!(!screen.is_loading());
    assert_eq!(screen.error(), None);
}

#[tokio::test]
async fn test_quia_query_filters_fetched_posts() {
    let posts = vec![
        post(1, 1, "quia et suscipit", "recusandae consequuntur"),
        post(2, 1, "qui est esse", "est rerum tempore"),
    ];
    let shared: Arc<dyn DataSource> = Arc::new(ScriptedSource::new().with_posts(&posts));
    let mut controller = Controller::mount(PostsLoader::new(shared), ());
    controller.settle().await;

    let search = SearchQuery::new("quia");
    let shown = search.apply(controller.state().data().unwrap());
    assert_eq!(shown, vec![&posts[0]]);
}
