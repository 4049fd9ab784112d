//! Static content of the landing screen.

use crate::route::Route;

/// Landing screen heading.
pub const TITLE: &str = "JSONPlaceholder Explorer";

/// One-line description under the heading.
pub const TAGLINE: &str =
    "Browse posts and users from the JSONPlaceholder API, with comments and author profiles.";

/// An entry point into one of the catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// Where the entry leads
    pub route: Route,
    /// Entry label
    pub title: &'static str,
    /// What the reader finds there
    pub description: &'static str,
}

/// A short feature blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Feature name
    pub title: &'static str,
    /// Feature summary
    pub description: &'static str,
}

/// Entry points, in display order.
pub const DESTINATIONS: [Destination; 2] = [
    Destination {
        route: Route::Posts,
        title: "Posts",
        description: "Explore sample posts with detail views and comments.",
    },
    Destination {
        route: Route::Users,
        title: "Users",
        description: "Browse user profiles with contact details, company and their posts.",
    },
];

/// Feature blurbs, in display order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Real API Data",
        description: "Fetches live data with loading, empty and error states.",
    },
    Feature {
        title: "Instant Search",
        description: "Filters posts and users as you type, without another request.",
    },
    Feature {
        title: "Linked Records",
        description: "Posts link to their comments; users link to the posts they wrote.",
    },
];
