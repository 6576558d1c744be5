//! CLI argument parsing.
//!
//! Global flags (`--config`, `--log-level`, `--color`) are inherited by every
//! subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::ui::output::OutputFormat;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// ado is a composable automation and diagnostics CLI
#[derive(Parser, Debug)]
#[command(name = "ado")]
#[command(author, version, about)]
#[command(
    long_about = "ado is a single binary for automation and diagnostics, with discoverable subcommands and consistent UX."
)]
pub struct Cli {
    /// Path to config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (debug, info, warn, error) [default: info]
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage ado configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Echo input text with optional formatting
    Echo {
        /// Message words, joined with a single space
        #[arg(required = true, value_name = "MESSAGE")]
        message: Vec<String>,

        /// Convert message to uppercase
        #[arg(long, conflicts_with = "lower")]
        upper: bool,

        /// Convert message to lowercase
        #[arg(long)]
        lower: bool,

        /// Number of times to repeat the message
        #[arg(long, default_value_t = 1)]
        repeat: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Introspect the ado binary and its environment
    Meta {
        #[command(subcommand)]
        command: MetaCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate a configuration file against the expected schema
    Validate {
        /// Path to config file to validate
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(short, long)]
        strict: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[derive(Subcommand, Debug)]
pub enum MetaCommands {
    /// Show ado build metadata
    Info {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show configuration and environment information
    Env {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List compiled-in feature flags
    Features {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}
