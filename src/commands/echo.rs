use std::process::ExitCode;

use anyhow::{bail, Result};

use crate::ui::output::{emit, OutputFormat};

pub fn cmd_echo(
    message: &[String],
    upper: bool,
    lower: bool,
    repeat: u32,
    output: OutputFormat,
) -> Result<ExitCode> {
    let values = echo_values(message, upper, lower, repeat)?;
    emit(output, &values, || values.join("\n"))?;
    Ok(ExitCode::SUCCESS)
}

fn echo_values(message: &[String], upper: bool, lower: bool, repeat: u32) -> Result<Vec<String>> {
    if upper && lower {
        bail!("cannot use --upper and --lower together");
    }
    if repeat < 1 {
        bail!("--repeat must be >= 1 (got {})", repeat);
    }

    let mut text = message.join(" ");
    if upper {
        text = text.to_uppercase();
    } else if lower {
        text = text.to_lowercase();
    }

    Ok(vec![text; repeat as usize])
}
