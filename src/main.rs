//! ado CLI - composable automation and diagnostics
//!
//! Usage: ado <COMMAND>
//!
//! Commands:
//!   config  Manage ado configuration
//!   echo    Echo input text with optional formatting
//!   meta    Introspect the ado binary and its environment

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use ado::logging::{self, LogConfig, LOG_LEVEL_ENV};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands, ConfigCommands, MetaCommands};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_config = log_config(cli.log_level.as_deref())?;
    logging::init(&log_config)?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Config {
            command:
                ConfigCommands::Validate {
                    file,
                    strict,
                    output,
                },
        } => commands::config::cmd_validate(
            file.as_deref(),
            cli.config.as_deref(),
            strict,
            output,
            cli.color,
        ),
        Commands::Echo {
            message,
            upper,
            lower,
            repeat,
            output,
        } => commands::echo::cmd_echo(&message, upper, lower, repeat, output),
        Commands::Meta { command } => match command {
            MetaCommands::Info { output } => commands::meta::cmd_info(output),
            MetaCommands::Env { output } => {
                commands::meta::cmd_env(cli.config.as_deref(), output)
            }
            MetaCommands::Features { output } => commands::meta::cmd_features(output),
        },
    }
}

/// An explicit `--log-level` must be valid; `ADO_LOG_LEVEL` falls back to `info`.
fn log_config(flag: Option<&str>) -> Result<LogConfig> {
    match flag {
        Some(level) => Ok(LogConfig {
            level: level.parse()?,
            ..LogConfig::default()
        }),
        None => {
            let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_default();
            Ok(LogConfig::from_raw(&level, "auto", "stderr"))
        }
    }
}
