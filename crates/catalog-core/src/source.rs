use core::fmt;

use async_trait::async_trait;

use crate::{Comment, Post, PostId, Result, User, UserId};

/// The six query shapes the remote source answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Request {
    /// Every post
    Posts,
    /// One post
    Post(PostId),
    /// Comments on one post
    PostComments(PostId),
    /// Every user
    Users,
    /// One user
    User(UserId),
    /// Posts written by one user
    UserPosts(UserId),
}

impl Request {
    /// Path and query relative to the API base URL. Ids are used verbatim.
    pub fn path(self) -> String {
        match self {
            Self::Posts => "/posts".to_owned(),
            Self::Post(id) => format!("/posts/{id}"),
            Self::PostComments(id) => format!("/posts/{id}/comments"),
            Self::Users => "/users".to_owned(),
            Self::User(id) => format!("/users/{id}"),
            Self::UserPosts(id) => format!("/posts?userId={id}"),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posts => write!(formatter, "posts"),
            Self::Post(id) => write!(formatter, "post {id}"),
            Self::PostComments(id) => write!(formatter, "comments for post {id}"),
            Self::Users => write!(formatter, "users"),
            Self::User(id) => write!(formatter, "user {id}"),
            Self::UserPosts(id) => write!(formatter, "posts for user {id}"),
        }
    }
}

/// Read-only access to the remote catalog.
///
/// Each method performs exactly one request and never retries. Every failure
/// is reported as [`crate::Error::Fetch`] with a readable message.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches every post.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a post list.
    async fn posts(&self) -> Result<Vec<Post>>;

    /// Fetches one post by id.
    ///
    /// # Errors
    /// Returns an error if the request fails, including when the post does not exist.
    async fn post(&self, id: PostId) -> Result<Post>;

    /// Fetches the comments of a post.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a comment list.
    async fn post_comments(&self, id: PostId) -> Result<Vec<Comment>>;

    /// Fetches every user.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a user list.
    async fn users(&self) -> Result<Vec<User>>;

    /// Fetches one user by id.
    ///
    /// # Errors
    /// Returns an error if the request fails, including when the user does not exist.
    async fn user(&self, id: UserId) -> Result<User>;

    /// Fetches the posts written by a user.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a post list.
    async fn user_posts(&self, id: UserId) -> Result<Vec<Post>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_paths() {
        assert_eq!(Request::Posts.path(), "/posts");
        assert_eq!(Request::Post(7).path(), "/posts/7");
        assert_eq!(Request::PostComments(1).path(), "/posts/1/comments");
        assert_eq!(Request::Users.path(), "/users");
        assert_eq!(Request::User(0).path(), "/users/0");
        assert_eq!(Request::UserPosts(3).path(), "/posts?userId=3");
    }

    #[test]
    fn test_request_display() {
        assert_eq!(Request::PostComments(2).to_string(), "comments for post 2");
        assert_eq!(Request::UserPosts(4).to_string(), "posts for user 4");
    }
}
