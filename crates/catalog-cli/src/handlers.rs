//! Command handlers for CLI operations

use std::fs::{self, File};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Result, bail};
use catalog_cli::{Theme, render, tui};
use catalog_client::RestClient;
use catalog_core::{Config, DataSource};
use catalog_view::{Route, Screen};
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::cli::{Cli, Command};

/// Dispatches the parsed command line.
///
/// # Errors
/// Returns an error if the screen ends in a failed fetch or output fails.
pub async fn run(cli: Cli) -> Result<()> {
    let loaded = load_config(cli.config.as_deref());
    let filter = loaded.as_ref().map_or_else(
        |_| Config::default().logging.filter,
        |config| config.logging.filter.clone(),
    );
    let command = cli.command.unwrap_or(Command::Tui { route: Route::Home });

    if matches!(command, Command::Tui { .. }) {
        init_file_logging(&log_dir(cli.config.as_deref())?, &filter)?;
    } else {
        init_stderr_logging(&filter);
    }

    let config = loaded
        .unwrap_or_else(|error| {
            tracing::warn!("Failed to load config: {error}");
            tracing::warn!("Using default configuration");
            Config::default()
        })
        .with_overrides(cli.base_url);

    let source: Arc<dyn DataSource> = Arc::new(RestClient::from_config(&config.api)?);
    let (route, query) = command.target();

    if matches!(command, Command::Tui { .. }) {
        let theme = config.ui.theme.parse::<Theme>().unwrap_or_else(|error| {
            tracing::warn!("{error}, using {}", Theme::default().name());
            Theme::default()
        });
        tracing::info!("Starting interactive session at {route}");
        tui::run(source, route, theme).await?;
        return Ok(());
    }

    print_once(&source, route, query).await
}

/// Settles the screen behind `route` and prints it.
async fn print_once(
    source: &Arc<dyn DataSource>,
    route: Route,
    query: Option<&str>,
) -> Result<()> {
    let mut screen = Screen::open(route, source);
    if let Some(text) = query
        && let Some(search) = screen.search_mut()
    {
        search.set_query(text);
    }
    screen.settle().await;

    if let Some(message) = screen.error() {
        bail!("{message}");
    }

    let mut out = io::stdout().lock();
    render::write_screen(&mut out, &screen)?;
    out.flush()?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> catalog_core::Result<Config> {
    match path {
        Some(path) => Config::load_or_create_at(path),
        None => Config::load_or_create(),
    }
}

/// Directory holding the config file, where the TUI writes `debug.log`.
fn log_dir(config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(parent) = config_path.and_then(Path::parent)
        && !parent.as_os_str().is_empty()
    {
        return Ok(parent.to_path_buf());
    }
    let default_path = Config::config_path()?;
    Ok(default_path
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// One-shot commands log to stderr so stdout carries only the screen.
fn init_stderr_logging(filter: &str) {
    Registry::default()
        .with(env_filter(filter))
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .init();
}

/// The TUI logs to a file so the terminal is left alone. The log is truncated
/// at the start of each session.
fn init_file_logging(dir: &Path, filter: &str) -> Result<()> {
    fs::create_dir_all(dir)?;
    let log_file = File::create(dir.join("debug.log"))?;

    Registry::default()
        .with(env_filter(filter))
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();
    Ok(())
}
