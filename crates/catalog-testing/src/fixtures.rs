use catalog_core::{Address, Comment, Company, Post, PostId, User, UserId};

/// Builds a post.
pub fn post(id: PostId, user_id: UserId, title: &str, body: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_owned(),
        body: body.to_owned(),
    }
}

/// Builds a comment.
pub fn comment(id: u64, post_id: PostId, name: &str, email: &str, body: &str) -> Comment {
    Comment {
        id,
        post_id,
        name: name.to_owned(),
        email: email.to_owned(),
        body: body.to_owned(),
    }
}

/// Builds a user with a placeholder address.
pub fn user(id: UserId, name: &str, username: &str, email: &str, company: &str) -> User {
    User {
        id,
        name: name.to_owned(),
        username: username.to_owned(),
        email: email.to_owned(),
        phone: "1-770-736-8031 x56442".to_owned(),
        website: "hildegard.org".to_owned(),
        address: Address {
            street: "Kulas Light".to_owned(),
            suite: "Apt. 556".to_owned(),
            city: "Gwenborough".to_owned(),
            zipcode: "92998-3874".to_owned(),
        },
        company: Company {
            name: company.to_owned(),
            catch_phrase: "Multi-layered client-server neural-net".to_owned(),
            bs: "harness real-time e-markets".to_owned(),
        },
    }
}

/// A small, self-consistent slice of the upstream data set.
#[derive(Debug, Clone, Default)]
pub struct FixtureData {
    /// All posts
    pub posts: Vec<Post>,
    /// All comments, across posts
    pub comments: Vec<Comment>,
    /// All users
    pub users: Vec<User>,
}

impl FixtureData {
    /// Three posts by two users; post 1 has five comments, post 2 one, post 3 none.
    ///
    /// Only post 1 mentions "quia".
    pub fn sample() -> Self {
        let posts = vec![
            post(
                1,
                1,
                "sunt aut facere repellat provident",
                "quia et suscipit\nsuscipit recusandae consequuntur",
            ),
            post(2, 1, "qui est esse", "est rerum tempore vitae\nsequi sint nihil"),
            post(
                3,
                2,
                "ea molestias quasi exercitationem",
                "et iusto sed quo iure\nvoluptatem occaecati omnis",
            ),
        ];

        let comments = vec![
            comment(1, 1, "id labore ex et quam laborum", "Eliseo@gardner.biz", "laudantium enim"),
            comment(2, 1, "quo vero reiciendis velit", "Jayne_Kuhic@sydney.com", "est natus enim"),
            comment(3, 1, "odio adipisci rerum aut animi", "Nikita@garfield.biz", "quia molestiae"),
            comment(4, 1, "alias odio sit", "Lew@alysha.tv", "non et atque"),
            comment(5, 1, "vero eaque aliquid doloribus", "Hayden@althea.biz", "harum non quasi"),
            comment(6, 2, "et fugit eligendi deleniti", "Presley.Mueller@myrl.com", "doloribus at"),
        ];

        let users = vec![
            user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "Deckow-Crist"),
        ];

        Self {
            posts,
            comments,
            users,
        }
    }

    /// Looks up a post.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|candidate| candidate.id == id)
    }

    /// Looks up a user.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|candidate| candidate.id == id)
    }

    /// Comments on a post, in id order.
    pub fn comments_for(&self, post_id: PostId) -> Vec<Comment> {
        self.comments
            .iter()
            .filter(|candidate| candidate.post_id == post_id)
            .cloned()
            .collect()
    }

    /// Posts written by a user.
    pub fn posts_for(&self, user_id: UserId) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|candidate| candidate.user_id == user_id)
            .cloned()
            .collect()
    }
}
