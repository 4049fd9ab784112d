//! Terminal user interface.
//!
//! Holds only ephemeral state: the input mode, the highlighted row and the
//! query being typed. Everything fetched lives in the current screen.

/// Application state, key handling and the event loop
pub mod app;
/// Input event source abstraction (public so tests can inject events)
pub mod event_source;
/// Rendering components
pub mod renderer;
/// Theme definitions
pub mod theme;

use std::io;
use std::sync::Arc;

use catalog_core::DataSource;
use catalog_view::{Navigator, Route};
use crossterm::terminal;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub use app::{InputMode, TuiApp};
pub use event_source::{CrosstermEventSource, InputEventSource, ScriptedEvents};
pub use renderer::{RenderCtx, Renderer};
pub use theme::Theme;

/// Runs the interactive interface on the real terminal until the user quits.
///
/// Must be called within a tokio runtime.
///
/// # Errors
/// Returns an error if the terminal cannot be set up, read or drawn to.
pub async fn run(source: Arc<dyn DataSource>, route: Route, theme: Theme) -> io::Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    terminal::enable_raw_mode()?;

    let mut app = TuiApp::new(
        terminal,
        Box::new(CrosstermEventSource::new()),
        Navigator::new(source, route),
        theme,
    );
    let result = app.run_event_loop().await;

    terminal::disable_raw_mode()?;
    app.terminal_mut().clear()?;
    result
}
