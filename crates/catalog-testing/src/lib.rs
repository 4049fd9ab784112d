//! Test support for the catalog workspace.
//!
//! Provides fixture records shaped like the upstream API and a loopback HTTP
//! server that serves them.

/// Fixture records.
pub mod fixtures;
/// Loopback HTTP server for fixture data.
pub mod server;

pub use fixtures::{FixtureData, comment, post, user};
pub use server::{FixtureServer, closed_port_url};

pub use axum::http::StatusCode;
