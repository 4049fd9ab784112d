use std::path::PathBuf;

use catalog_core::{PostId, UserId};
use catalog_view::Route;
use clap::{Parser, Subcommand};

/// Command-line arguments for the catalog viewer
#[derive(Debug, Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse posts, comments and users from a JSONPlaceholder-style REST API"
)]
pub struct Cli {
    /// Base URL of the API; overrides the config file and $CATALOG_BASE_URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file [default: $CATALOG_CONFIG or ~/.catalog/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// What to show; the interactive interface when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Screens that can be opened from the command line
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the landing screen
    Home,
    /// List posts
    Posts {
        /// Only show posts whose title or body contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a post with its comments
    Post {
        /// Post id
        id: PostId,
    },
    /// List users
    Users {
        /// Only show users whose name, username, email or company contains this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a user with their posts
    User {
        /// User id
        id: UserId,
    },
    /// Print the screen behind a route path such as /posts/1
    Open {
        /// Route path
        route: Route,
        /// Search text for list routes
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Start the interactive interface
    Tui {
        /// Route to start on
        #[arg(default_value = "/")]
        route: Route,
    },
}

impl Command {
    /// Route the command opens, and the query for list routes.
    pub fn target(&self) -> (Route, Option<&str>) {
        match self {
            Self::Home => (Route::Home, None),
            Self::Posts { query } => (Route::Posts, query.as_deref()),
            Self::Post { id } => (Route::Post(*id), None),
            Self::Users { query } => (Route::Users, query.as_deref()),
            Self::User { id } => (Route::User(*id), None),
            Self::Open { route, query } => (*route, query.as_deref()),
            Self::Tui { route } => (*route, None),
        }
    }
}
