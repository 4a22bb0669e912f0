//! Error types for leetstats
//!
//! This module provides the error handling for the library:
//! - Domain-specific error types (Fetch, Write, Config)
//! - Per-username fetch failures carry the username so log lines stay useful
//! - A crate-level `Result` alias used throughout

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for leetstats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for leetstats
///
/// Per-username fetch failures are absorbed inside a batch run and only ever
/// logged; the variants here surface when the batch as a whole cannot
/// proceed (bad configuration, client construction, or the output artifact).
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "max_concurrent_fetches")
        key: Option<String>,
    },

    /// Fetch-related error
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Output artifact could not be produced
    #[error("write error: {0}")]
    Write(#[from] WriteError),

    /// Network error outside the per-username fetch path (client construction)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-username fetch failures
///
/// A `FetchError` never aborts a batch: the orchestrator logs it and leaves
/// that username's slot empty.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Endpoint answered with a non-200 status
    #[error("HTTP status {status} for user {username}")]
    HttpStatus {
        /// The username whose request was rejected
        username: String,
        /// The HTTP status code returned by the endpoint
        status: u16,
    },

    /// Transport-level failure: connect, timeout, or body decode
    #[error("transport error for user {username}: {reason}")]
    Transport {
        /// The username whose request failed
        username: String,
        /// Description of the underlying transport failure
        reason: String,
    },
}

impl FetchError {
    /// Wrap a reqwest error as a transport failure for the given username
    pub(crate) fn transport(username: &str, source: &reqwest::Error) -> Self {
        Self::Transport {
            username: username.to_string(),
            reason: source.to_string(),
        }
    }
}

/// Output artifact errors
///
/// Unlike fetch failures these are fatal: a batch whose only observable
/// output cannot be written has failed.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Destination could not be opened for writing
    #[error("cannot open {path} for writing: {source}")]
    Open {
        /// The destination path that could not be opened
        path: PathBuf,
        /// The underlying open failure (permission denied, invalid path, ...)
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O failure while flushing the destination
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display_includes_user_and_code() {
        let err = FetchError::HttpStatus {
            username: "alice".into(),
            status: 429,
        };
        let msg = err.to_string();
        assert!(msg.contains("alice"));
        assert!(msg.contains("429"));
    }

    #[test]
    fn transport_display_includes_reason() {
        let err = FetchError::Transport {
            username: "bob".into(),
            reason: "connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bob"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn fetch_error_converts_to_crate_error() {
        let err: Error = FetchError::HttpStatus {
            username: "carol".into(),
            status: 503,
        }
        .into();
        assert!(matches!(err, Error::Fetch(FetchError::HttpStatus { .. })));
    }

    #[test]
    fn write_open_error_carries_path() {
        let err = WriteError::Open {
            path: PathBuf::from("/no/such/dir/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/no/such/dir/out.csv"));
    }

    #[test]
    fn config_error_display() {
        let err = Error::Config {
            message: "max_concurrent_fetches must be at least 1".into(),
            key: Some("max_concurrent_fetches".into()),
        };
        assert!(err.to_string().starts_with("configuration error:"));
    }
}
