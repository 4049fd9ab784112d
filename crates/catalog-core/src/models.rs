use serde::{Deserialize, Serialize};

/// Identifier of a [`Post`].
pub type PostId = u64;
/// Identifier of a [`User`].
pub type UserId = u64;

/// A post authored by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post id
    pub id: PostId,
    /// Author reference
    pub user_id: UserId,
    /// Headline
    pub title: String,
    /// Full text
    pub body: String,
}

/// A comment left on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment id, unique within the post's comments
    pub id: u64,
    /// Post the comment belongs to
    pub post_id: PostId,
    /// Subject line
    pub name: String,
    /// Commenter email
    pub email: String,
    /// Comment text
    pub body: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name
    pub street: String,
    /// Suite or apartment
    pub suite: String,
    /// City
    pub city: String,
    /// Postal code
    pub zipcode: String,
}

/// Employer of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Company name
    pub name: String,
    /// Slogan
    pub catch_phrase: String,
    /// Business summary
    pub bs: String,
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Handle
    pub username: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Personal website
    pub website: String,
    /// Postal address
    pub address: Address,
    /// Employer
    pub company: Company,
}

impl User {
    /// First letter of each word of the name, used as an avatar label.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}
