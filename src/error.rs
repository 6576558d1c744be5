//! Error types for ado
//!
//! Expected config problems (missing file, bad YAML, schema violations) are never
//! errors here: they are issues inside a `ValidationResult`. `AdoError` is the channel
//! for everything the caller cannot fix by editing the config file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ado operations
pub type AdoResult<T> = Result<T, AdoError>;

/// Main error type for ado operations
#[derive(Error, Debug)]
pub enum AdoError {
    /// Reading the config failed for a reason other than not-found or permission-denied
    #[error("read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unrecognized log level name
    #[error("invalid log level {level:?}: must be debug, info, warn, or error")]
    InvalidLogLevel { level: String },

    /// The tracing subscriber could not be built
    #[error("failed to initialize logging: {message}")]
    LogInit { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
