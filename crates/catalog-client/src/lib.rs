//! Data source adapters for the catalog.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        reason = "Allow for tests"
    )
)]

/// HTTP client for the JSON REST API.
pub mod rest;
/// Scripted in-memory source with controllable resolution order.
pub mod scripted;

pub use rest::RestClient;
pub use scripted::ScriptedSource;
