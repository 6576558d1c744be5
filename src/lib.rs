//! ado - composable automation and diagnostics CLI
//!
//! The library holds the config engine: locating `config.yaml` across the search
//! path and validating it into a structured report of errors and warnings, each
//! attributed to a source line where possible.

pub mod config;
pub mod error;
pub mod home;
pub mod logging;
pub mod meta;

// Re-exports for convenience
pub use config::{
    resolve_config_path, validate, PathResolver, ResolvedConfig, Severity, ValidationIssue,
    ValidationResult,
};
pub use error::{AdoError, AdoResult};
pub use logging::{LogConfig, LogFormat, LogLevel, LogOutput};
