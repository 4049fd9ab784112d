//! What a renderer shows for a given screen state.
//!
//! Exactly one variant applies at a time. A fetch that returned nothing and a
//! filter that matched nothing are different states with different messages.

use catalog_core::{Post, SearchQuery, Searchable, User};

use crate::controller::Resource;
use crate::route::Route;

/// Record kinds shown in list screens.
pub trait ListItem: Searchable + Send + 'static {
    /// Plural noun used in headings and messages.
    const NOUN: &'static str;

    /// Detail route of this record.
    fn route(&self) -> Route;

    /// One-line summary shown as a list row.
    fn label(&self) -> String;
}

impl ListItem for Post {
    const NOUN: &'static str = "posts";

    fn route(&self) -> Route {
        Route::Post(self.id)
    }

    fn label(&self) -> String {
        format!("#{id} {title}", id = self.id, title = self.title)
    }
}

impl ListItem for User {
    const NOUN: &'static str = "users";

    fn route(&self) -> Route {
        Route::User(self.id)
    }

    fn label(&self) -> String {
        format!(
            "{name} (@{username}) {email}, {company}",
            name = self.name,
            username = self.username,
            email = self.email,
            company = self.company.name
        )
    }
}

/// Render state of a list screen.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'view, T> {
    /// Fetch in flight
    Loading,
    /// Fetch failed; the screen offers a retry
    Failed {
        /// Failure message
        message: &'view str,
    },
    /// Fetch succeeded with zero records
    Empty,
    /// Records exist but none match the query
    NoMatches {
        /// Query as typed
        query: &'view str,
    },
    /// Records to show
    Populated {
        /// Matching records in source order
        shown: Vec<&'view T>,
        /// Size of the unfiltered collection
        total: usize,
    },
}

/// Render state of a detail screen.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailView<'view, T> {
    /// Fetches in flight
    Loading,
    /// A fetch failed; the screen offers a retry
    Failed {
        /// Failure message
        message: &'view str,
    },
    /// Record and related collection
    Populated(&'view T),
}

/// Derives the list render state from controller state and the query.
pub fn list_view<'view, T: ListItem>(
    state: &'view Resource<Vec<T>>,
    search: &'view SearchQuery,
) -> ListView<'view, T> {
    if state.is_loading() {
        return ListView::Loading;
    }
    if let Some(message) = state.error() {
        return ListView::Failed { message };
    }
    let Some(items) = state.data() else {
        return ListView::Loading;
    };
    if items.is_empty() {
        return ListView::Empty;
    }

    let shown = search.apply(items);
    if shown.is_empty() {
        ListView::NoMatches {
            query: search.query(),
        }
    } else {
        ListView::Populated {
            shown,
            total: items.len(),
        }
    }
}

/// Derives the detail render state from controller state.
pub fn detail_view<T>(state: &Resource<T>) -> DetailView<'_, T> {
    if state.is_loading() {
        return DetailView::Loading;
    }
    if let Some(message) = state.error() {
        return DetailView::Failed { message };
    }
    state
        .data()
        .map_or(DetailView::Loading, DetailView::Populated)
}

/// "No posts found"
pub fn empty_message(noun: &str) -> String {
    format!("No {noun} found")
}

/// "No posts match \"query\""
pub fn no_matches_message(noun: &str, query: &str) -> String {
    format!("No {noun} match \"{query}\"")
}

/// Hint shown under the no-matches message.
pub const NO_MATCHES_HINT: &str = "Try adjusting your search terms.";

/// "2 of 3 posts"
pub fn counter(shown: usize, total: usize, noun: &str) -> String {
    format!("{shown} of {total} {noun}")
}
