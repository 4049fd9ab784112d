//! Case-insensitive substring search over fetched collections.
//!
//! Filtering never reorders or mutates its input: the result is always the
//! subsequence of matching items in their original order. A blank query keeps
//! everything.

use crate::{Post, User};

/// A record that can be matched against a search query.
pub trait Searchable {
    /// The text fields a query is tested against. A record matches when any one
    /// field contains the query.
    fn search_fields(&self) -> Vec<&str>;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.body]
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.username, &self.email, &self.company.name]
    }
}

/// Returns the items matching `query`, in source order.
///
/// The query is trimmed first; an empty or whitespace-only query returns every
/// item rather than none.
pub fn filter<'items, T: Searchable>(items: &'items [T], query: &str) -> Vec<&'items T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| matches_needle(*item, &needle))
        .collect()
}

/// `needle` must already be trimmed and lowercased.
fn matches_needle<T: Searchable + ?Sized>(item: &T, needle: &str) -> bool {
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Query text typed by the user on a list screen.
///
/// The filtered view is derived on demand, so it always reflects the current
/// query against the current collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Creates a query with initial text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current query text, untrimmed.
    pub fn query(&self) -> &str {
        &self.text
    }

    /// Replaces the query text.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends one typed character.
    pub fn push(&mut self, character: char) {
        self.text.push(character);
    }

    /// Removes the last character, if any.
    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Empties the query.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Whether the query keeps every item.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Applies the query to a collection.
    pub fn apply<'items, T: Searchable>(&self, items: &'items [T]) -> Vec<&'items T> {
        filter(items, &self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, Company};
    use proptest::prelude::*;

    fn post(id: u64, title: &str, body: &str) -> Post {
        Post {
            id,
            user_id: 1,
            title: title.to_owned(),
            body: body.to_owned(),
        }
    }

    fn user(id: u64, name: &str, username: &str, email: &str, company: &str) -> User {
        User {
            id,
            name: name.to_owned(),
            username: username.to_owned(),
            email: email.to_owned(),
            phone: String::new(),
            website: String::new(),
            address: Address::default(),
            company: Company {
                name: company.to_owned(),
                ..Company::default()
            },
        }
    }

    fn ids(items: &[&Post]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_quia_matches_single_post() {
        let posts = vec![
            post(1, "sunt aut facere repellat", "quia et suscipit recusandae"),
            post(2, "qui est esse", "est rerum tempore vitae"),
        ];
        let title_fixture = vec![
            post(1, "Quia et suscipit", "nothing here"),
            post(2, "qui est esse", "est rerum tempore vitae"),
        ];

        assert_eq!(ids(&filter(&posts, "quia")), vec![1]);
        assert_eq!(ids(&filter(&title_fixture, "quia")), vec![1]);
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let posts = vec![post(1, "Hello World", ""), post(2, "goodbye", "")];
        assert_eq!(ids(&filter(&posts, "  WORLD \t")), vec![1]);
    }

    #[test]
    fn test_user_fields_are_searched() {
        let users = vec![
            user(1, "Leanne Graham", "Bret", "Sincere@april.biz", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "Deckow-Crist"),
            user(3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net", "Romaguera-Jacobson"),
        ];

        let by_company: Vec<u64> = filter(&users, "romaguera").iter().map(|found| found.id).collect();
        assert_eq!(by_company, vec![1, 3]);

        let by_username: Vec<u64> = filter(&users, "antonette").iter().map(|found| found.id).collect();
        assert_eq!(by_username, vec![2]);

        let by_email: Vec<u64> = filter(&users, "YESENIA").iter().map(|found| found.id).collect();
        assert_eq!(by_email, vec![3]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let posts = vec![post(1, "alpha", "beta")];
        assert!(filter(&posts, "gamma").is_empty());
    }

    #[test]
    fn test_search_query_editing() {
        let mut query = SearchQuery::default();
        assert!(query.is_blank());

        query.push('q');
        query.push('u');
        assert_eq!(query.query(), "qu");
        query.pop();
        assert_eq!(query.query(), "q");

        query.set_query("   ");
        assert!(query.is_blank());

        query.clear();
        assert_eq!(query.query(), "");
    }

    #[test]
    fn test_search_query_apply_follows_collection() {
        let query = SearchQuery::new("beta");
        let first = vec![post(1, "alpha", "")];
        assert!(query.apply(&first).is_empty());

        let second = vec![post(1, "alpha", ""), post(2, "beta", "")];
        assert_eq!(ids(&query.apply(&second)), vec![2]);
    }

    fn arb_posts() -> impl Strategy<Value = Vec<Post>> {
        prop::collection::vec(("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}"), 0..12).prop_map(|fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(index, (title, body))| post(index as u64 + 1, &title, &body))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_blank_query_returns_everything(posts in arb_posts(), query in "[ \t]{0,4}") {
            let all: Vec<u64> = posts.iter().map(|item| item.id).collect();
            prop_assert_eq!(ids(&filter(&posts, &query)), all);
        }

        #[test]
        fn prop_result_is_ordered_subsequence(posts in arb_posts(), query in "[a-zA-Z ]{0,4}") {
            let found = ids(&filter(&posts, &query));
            let mut source = posts.iter().map(|item| item.id);
            for id in found {
                prop_assert!(source.any(|candidate| candidate == id));
            }
        }

        #[test]
        fn prop_filter_is_idempotent(posts in arb_posts(), query in "[a-zA-Z ]{0,4}") {
            let once = filter(&posts, &query);
            let twice = filter(&once, &query);
            let once_ids: Vec<u64> = once.iter().map(|item| item.id).collect();
            let twice_ids: Vec<u64> = twice.iter().map(|item| item.id).collect();
            prop_assert_eq!(once_ids, twice_ids);
        }
    }
}
