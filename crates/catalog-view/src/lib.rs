//! View-model layer of the catalog viewer.
//!
//! Screens own a [`Controller`] that fetches through a [`Loader`] and exposes a
//! [`Resource`] for rendering. [`present`] maps that state plus the search
//! query onto the one render state a screen should show, and [`Navigator`]
//! moves between [`Route`]s.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

/// Fetch lifecycle and last-write-wins state.
pub mod controller;
/// Landing screen content.
pub mod home;
/// Loaders for list and detail screens.
pub mod loaders;
/// Render-state derivation.
pub mod present;
/// Navigable views.
pub mod route;
/// Screens and navigation history.
pub mod screen;

pub use controller::{Completion, Controller, Loader, Phase, Resource};
pub use loaders::{
    PostDetail, PostDetailLoader, PostsLoader, UserDetail, UserDetailLoader, UsersLoader,
};
pub use present::{DetailView, ListItem, ListView, detail_view, list_view};
pub use route::Route;
pub use screen::{
    DetailScreen, ListScreen, Navigator, PostScreen, PostsScreen, Screen, UserScreen, UsersScreen,
};
