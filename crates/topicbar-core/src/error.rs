//! Error types for topicbar.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Remote call errors - one per failed topic operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// Server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Connection or protocol failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request did not complete in time.
    #[error("Request timeout after {duration:?}")]
    Timeout { duration: Duration },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("Failed to read {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// Parse error.
    #[error("Parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Server URL does not parse.
    #[error("Invalid server URL '{0}'")]
    InvalidUrl(String),
}
