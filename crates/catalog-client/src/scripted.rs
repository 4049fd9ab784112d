//! Scripted data source for driving screens without a network.
//!
//! Replies are registered per [`Request`]. A request can be held so that every
//! call for it blocks until the test releases it, which lets tests choose the
//! order in which overlapping loads resolve.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, from_value, to_value};
use tokio::sync::Semaphore;

use catalog_core::{
    Comment, DataSource, Error, IgnoreLock as _, Post, PostId, Request, Result, User, UserId,
};

/// Reply registered for a request.
type Reply = core::result::Result<Value, String>;

/// In-memory [`DataSource`] with canned replies and release gates.
#[derive(Default)]
pub struct ScriptedSource {
    /// Replies keyed by request
    replies: Mutex<HashMap<Request, Reply>>,
    /// Gates for held requests; each call consumes one permit
    gates: Mutex<HashMap<Request, Arc<Semaphore>>>,
    /// Requests in the order they were received
    calls: Mutex<Vec<Request>>,
}

impl ScriptedSource {
    /// Creates a source with no replies; every request fails as not found.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the post list.
    #[must_use]
    pub fn with_posts(self, posts: &[Post]) -> Self {
        self.set_reply(Request::Posts, posts);
        self
    }

    /// Registers a single post, served under its own id.
    #[must_use]
    pub fn with_post(self, post: &Post) -> Self {
        self.set_reply(Request::Post(post.id), post);
        self
    }

    /// Registers the comments of a post.
    #[must_use]
    pub fn with_comments(self, post_id: PostId, comments: &[Comment]) -> Self {
        self.set_reply(Request::PostComments(post_id), comments);
        self
    }

    /// Registers the user list.
    #[must_use]
    pub fn with_users(self, users: &[User]) -> Self {
        self.set_reply(Request::Users, users);
        self
    }

    /// Registers a single user, served under its own id.
    #[must_use]
    pub fn with_user(self, user: &User) -> Self {
        self.set_reply(Request::User(user.id), user);
        self
    }

    /// Registers the posts of a user.
    #[must_use]
    pub fn with_user_posts(self, user_id: UserId, posts: &[Post]) -> Self {
        self.set_reply(Request::UserPosts(user_id), posts);
        self
    }

    /// Makes `request` fail with `message`.
    #[must_use]
    pub fn with_failure(self, request: Request, message: impl Into<String>) -> Self {
        self.set_failure(request, message);
        self
    }

    /// Replaces the reply for `request` with a successful body.
    pub fn set_reply<T: Serialize + ?Sized>(&self, request: Request, body: &T) {
        let reply = to_value(body).map_err(|err| err.to_string());
        self.replies.lock_ignore_poison().insert(request, reply);
    }

    /// Replaces the reply for `request` with a raw JSON body.
    pub fn set_raw_reply(&self, request: Request, body: Value) {
        self.replies.lock_ignore_poison().insert(request, Ok(body));
    }

    /// Replaces the reply for `request` with a failure.
    pub fn set_failure(&self, request: Request, message: impl Into<String>) {
        self.replies
            .lock_ignore_poison()
            .insert(request, Err(message.into()));
    }

    /// Holds every future call for `request` until released.
    pub fn hold(&self, request: Request) {
        self.gates
            .lock_ignore_poison()
            .entry(request)
            .or_insert_with(|| Arc::new(Semaphore::new(0)));
    }

    /// Lets one held call for `request` proceed. A no-op if it is not held.
    pub fn release(&self, request: Request) {
        if let Some(gate) = self.gates.lock_ignore_poison().get(&request) {
            gate.add_permits(1);
        }
    }

    /// Requests received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Request> {
        self.calls.lock_ignore_poison().clone()
    }

    /// Number of times `request` was received.
    #[must_use]
    pub fn call_count(&self, request: Request) -> usize {
        self.calls
            .lock_ignore_poison()
            .iter()
            .filter(|seen| **seen == request)
            .count()
    }

    /// Records the call, waits on its gate if held, then decodes the reply.
    async fn respond<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.calls.lock_ignore_poison().push(request);

        let gate = self.gates.lock_ignore_poison().get(&request).cloned();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .map_err(|err| Error::fetch(format!("Failed to fetch {request}: {err}")))?
                .forget();
        }

        let reply = self.replies.lock_ignore_poison().get(&request).cloned();
        match reply {
            Some(Ok(body)) => from_value(body).map_err(|err| {
                Error::fetch(format!(
                    "Failed to fetch {request}: unexpected response body: {err}"
                ))
            }),
            Some(Err(message)) => Err(Error::Fetch(message)),
            None => Err(Error::fetch(format!(
                "Failed to fetch {request}: HTTP 404 Not Found"
            ))),
        }
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    async fn posts(&self) -> Result<Vec<Post>> {
        self.respond(Request::Posts).await
    }

    async fn post(&self, id: PostId) -> Result<Post> {
        self.respond(Request::Post(id)).await
    }

    async fn post_comments(&self, id: PostId) -> Result<Vec<Comment>> {
        self.respond(Request::PostComments(id)).await
    }

    async fn users(&self) -> Result<Vec<User>> {
        self.respond(Request::Users).await
    }

    async fn user(&self, id: UserId) -> Result<User> {
        self.respond(Request::User(id)).await
    }

    async fn user_posts(&self, id: UserId) -> Result<Vec<Post>> {
        self.respond(Request::UserPosts(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::task::yield_now;

    fn post(id: PostId) -> Post {
        Post {
            id,
            user_id: 1,
            title: format!("title {id}"),
            body: format!("body {id}"),
        }
    }

    #[tokio::test]
    async fn test_registered_reply_is_returned() {
        let source = ScriptedSource::new().with_posts(&[post(1), post(2)]);
        let posts = source.posts().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(source.calls(), vec![Request::Posts]);
    }

    #[tokio::test]
    async fn test_unregistered_request_is_not_found() {
        let source = ScriptedSource::new();
        let error = source.post(99).await.unwrap_err();
        assert_eq!(error.to_string(), "Failed to fetch post 99: HTTP 404 Not Found");
    }

    #[tokio::test]
    async fn test_malformed_body_is_fetch_error() {
        let source = ScriptedSource::new();
        source.set_raw_reply(Request::Users, json!({"not": "a list"}));
        let error = source.users().await.unwrap_err();
        assert!(matches!(error, Error::Fetch(_)));
        assert!(error.to_string().contains("unexpected response body"));
    }

    #[tokio::test]
    async fn test_failure_and_call_count() {
        let source = ScriptedSource::new().with_failure(Request::User(3), "boom");
        assert_eq!(source.user(3).await.unwrap_err().to_string(), "boom");
        assert_eq!(source.user(3).await.unwrap_err().to_string(), "boom");
        assert_eq!(source.call_count(Request::User(3)), 2);
    }

    #[tokio::test]
    async fn test_held_request_waits_for_release() {
        let source = Arc::new(ScriptedSource::new().with_post(&post(1)));
        source.hold(Request::Post(1));

        let pending = tokio::spawn({
            let source = Arc::clone(&source);
            async move { source.post(1).await }
        });

        while source.call_count(Request::Post(1)) == 0 {
            yield_now().await;
        }
        assert!(!pending.is_finished(), "held request must not resolve");

        source.release(Request::Post(1));
        let resolved = pending.await.unwrap().unwrap();
        assert_eq!(resolved.id, 1);
    }
}
