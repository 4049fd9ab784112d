use core::result::Result as CoreResult;
use std::io::Error as IoError;

use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for catalog operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur in the catalog.
///
/// Only [`Error::Fetch`] ever reaches a screen. Transport failures, non-success
/// statuses and malformed bodies all collapse into it; the message is the only
/// thing that tells them apart.
#[derive(Debug, Error)]
pub enum Error {
    /// A request to the remote source failed.
    #[error("{0}")]
    Fetch(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A route path could not be parsed.
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),
}

impl Error {
    /// Determines whether this error may succeed if retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Builds a fetch failure from anything displayable.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let fetch = Error::fetch("Failed to fetch posts: HTTP 500");
        assert_eq!(fetch.to_string(), "Failed to fetch posts: HTTP 500");

        let config = Error::Config("bad base url".to_owned());
        assert_eq!(config.to_string(), "Configuration error: bad base url");

        let route = Error::InvalidRoute("/posts/abc".to_owned());
        assert_eq!(route.to_string(), "Invalid route: /posts/abc");
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(Error::fetch("timeout").is_retryable());
        assert!(!Error::Config("bad".to_owned()).is_retryable());
        assert!(!Error::InvalidRoute("/nope".to_owned()).is_retryable());
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Table>("not = = toml").unwrap_err();
        let error: Error = toml_error.into();
        assert!(matches!(error, Error::Toml(_)));
    }
}
