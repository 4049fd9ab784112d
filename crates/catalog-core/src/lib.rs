//! Core types and traits for the catalog viewer.
//!
//! This crate provides the record types fetched from the remote source, the
//! shared error type, configuration, the [`DataSource`] seam and the pure
//! search filter used by list screens.
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

/// Configuration loading and defaults.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Client-side search filter.
pub mod filter;
/// Records served by the remote API.
pub mod models;
/// Trait definition for remote data sources.
pub mod source;
/// Synchronization utilities for handling poisoned locks.
pub mod sync;

pub use config::{ApiConfig, Config, LoggingConfig, UiConfig};
pub use error::{Error, Result};
pub use filter::{SearchQuery, Searchable, filter};
pub use models::{Address, Comment, Company, Post, PostId, User, UserId};
pub use source::{DataSource, Request};
pub use sync::IgnoreLock;
