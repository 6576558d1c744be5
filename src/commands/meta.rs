use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use ado::meta::{BuildInfo, EnvInfo, FeatureList};

use crate::ui::output::{emit, OutputFormat};
use crate::ui::views::meta::{render_build_info, render_env_info, render_features};

pub fn cmd_info(output: OutputFormat) -> Result<ExitCode> {
    let info = BuildInfo::current();
    emit(output, &info, || render_build_info(&info))?;
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_env(config_flag: Option<&Path>, output: OutputFormat) -> Result<ExitCode> {
    let info = EnvInfo::collect(config_flag.filter(|p| !p.as_os_str().is_empty()));
    emit(output, &info, || render_env_info(&info))?;
    Ok(ExitCode::SUCCESS)
}

pub fn cmd_features(output: OutputFormat) -> Result<ExitCode> {
    let list = FeatureList::current();
    emit(output, &list, || render_features(&list.features))?;
    Ok(ExitCode::SUCCESS)
}
