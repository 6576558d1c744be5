//! Structured logging setup.
//!
//! Library code logs through `tracing` macros; the binary installs a subscriber once
//! at startup from a [`LogConfig`].

use std::str::FromStr;

use is_terminal::IsTerminal;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AdoError, AdoResult};

/// Environment variable holding the default log level.
pub const LOG_LEVEL_ENV: &str = "ADO_LOG_LEVEL";

/// Minimum level of emitted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = AdoError;

    /// Level names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(AdoError::InvalidLogLevel {
                level: other.to_string(),
            }),
        }
    }
}

/// Event encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Text on a terminal, JSON otherwise
    #[default]
    Auto,
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(LogFormat::Auto),
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// Stream the events are written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogOutput {
    #[default]
    Stderr,
    Stdout,
}

impl LogOutput {
    fn is_terminal(&self) -> bool {
        match self {
            LogOutput::Stderr => std::io::stderr().is_terminal(),
            LogOutput::Stdout => std::io::stdout().is_terminal(),
        }
    }
}

impl FromStr for LogOutput {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stderr" => Ok(LogOutput::Stderr),
            "stdout" => Ok(LogOutput::Stdout),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
}

impl LogConfig {
    /// Build from raw strings, replacing anything unrecognized with its default.
    pub fn from_raw(level: &str, format: &str, output: &str) -> Self {
        Self {
            level: level.parse().unwrap_or_default(),
            format: format.parse().unwrap_or_default(),
            output: output.parse().unwrap_or_default(),
        }
    }

    /// Whether events are encoded as JSON once `Auto` is resolved.
    pub fn uses_json(&self) -> bool {
        resolve_json(self.format, self.output.is_terminal())
    }
}

fn resolve_json(format: LogFormat, is_terminal: bool) -> bool {
    match format {
        LogFormat::Json => true,
        LogFormat::Text => false,
        LogFormat::Auto => !is_terminal,
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` directives are honored in addition to the configured level. A second
/// call leaves the first subscriber in place.
pub fn init(config: &LogConfig) -> AdoResult<()> {
    let directive = format!("ado={}", config.level.as_str())
        .parse::<Directive>()
        .map_err(|e| AdoError::LogInit {
            message: e.to_string(),
        })?;
    let filter = EnvFilter::from_default_env().add_directive(directive);

    let writer = match config.output {
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
    };

    let (json_layer, text_layer) = if config.uses_json() {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_current_span(false)
            .with_span_list(false);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(config.output.is_terminal());
        (None, Some(layer))
    };

    // Already-installed is fine: tests and embedders may have set one up.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init();

    Ok(())
}
