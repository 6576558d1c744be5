use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use ado::config::{resolve_config_path, validate};
use ado::home::ado_home_dir;
use ado::meta::CONFIG_ENV;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::output::{emit, OutputFormat};
use crate::ui::views::validate::render_validation;

pub fn cmd_validate(
    file: Option<&Path>,
    config_flag: Option<&Path>,
    strict: bool,
    output: OutputFormat,
    color: Option<ColorWhen>,
) -> Result<ExitCode> {
    let env_config = std::env::var(CONFIG_ENV).ok();
    let home = ado_home_dir();
    let path = select_config_path(file, config_flag, env_config.as_deref(), home.as_deref())?;

    let mut result = validate(&path).context("validation failed")?;
    if strict {
        result = result.promote_warnings();
    }

    let ui = UiContext::new(color);
    emit(output, &result, || {
        render_validation(&result, ui.color, ui.unicode)
    })?;

    if result.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// `--file` > `--config` > `ADO_CONFIG` > search path. Empty values count as unset.
fn select_config_path(
    file: Option<&Path>,
    config_flag: Option<&Path>,
    env_config: Option<&str>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    let explicit = [file, config_flag, env_config.map(Path::new)]
        .into_iter()
        .flatten()
        .find(|p| !p.as_os_str().is_empty());
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let resolved = resolve_config_path(None, home);
    match resolved.path {
        Some(path) => Ok(path),
        None => bail!(
            "no config file found. Searched: {}",
            resolved.sources_display()
        ),
    }
}
