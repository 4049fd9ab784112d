//! Library interface for catalog-cli
//!
//! Exposes the renderers so they can be tested without a terminal.
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

/// Plain-text rendering for one-shot commands
pub mod render;
/// Interactive terminal interface
pub mod tui;

pub use tui::{CrosstermEventSource, InputEventSource, Renderer, Theme, TuiApp};
