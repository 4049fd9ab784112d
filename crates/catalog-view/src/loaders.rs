//! Loaders for the four data screens.
//!
//! Detail loaders fetch a record and its related collection concurrently and
//! only succeed once both have.

use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::{Comment, DataSource, Post, PostId, Result, User, UserId};

use crate::controller::Loader;

/// A post together with its comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    /// The post
    pub post: Post,
    /// Comments on the post
    pub comments: Vec<Comment>,
}

/// A user together with their posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    /// The user
    pub user: User,
    /// Posts written by the user
    pub posts: Vec<Post>,
}

/// Loads every post.
pub struct PostsLoader {
    source: Arc<dyn DataSource>,
}

impl PostsLoader {
    /// Creates a loader reading from `source`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Loader for PostsLoader {
    type Key = ();
    type Output = Vec<Post>;

    fn name(&self) -> &'static str {
        "posts"
    }

    async fn load(&self, _key: &()) -> Result<Vec<Post>> {
        self.source.posts().await
    }
}

/// Loads every user.
pub struct UsersLoader {
    source: Arc<dyn DataSource>,
}

impl UsersLoader {
    /// Creates a loader reading from `source`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Loader for UsersLoader {
    type Key = ();
    type Output = Vec<User>;

    fn name(&self) -> &'static str {
        "users"
    }

    async fn load(&self, _key: &()) -> Result<Vec<User>> {
        self.source.users().await
    }
}

/// Loads a post and its comments.
pub struct PostDetailLoader {
    source: Arc<dyn DataSource>,
}

impl PostDetailLoader {
    /// Creates a loader reading from `source`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Loader for PostDetailLoader {
    type Key = PostId;
    type Output = PostDetail;

    fn name(&self) -> &'static str {
        "post-detail"
    }

    async fn load(&self, key: &PostId) -> Result<PostDetail> {
        let (post, comments) =
            tokio::try_join!(self.source.post(*key), self.source.post_comments(*key))?;
        Ok(PostDetail { post, comments })
    }
}

/// Loads a user and their posts.
pub struct UserDetailLoader {
    source: Arc<dyn DataSource>,
}

impl UserDetailLoader {
    /// Creates a loader reading from `source`.
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl Loader for UserDetailLoader {
    type Key = UserId;
    type Output = UserDetail;

    fn name(&self) -> &'static str {
        "user-detail"
    }

    async fn load(&self, key: &UserId) -> Result<UserDetail> {
        let (user, posts) =
            tokio::try_join!(self.source.user(*key), self.source.user_posts(*key))?;
        Ok(UserDetail { user, posts })
    }
}
