//! Output format dispatch shared by every subcommand.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Output format selected with `-o/--output`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Write `payload` in `format`.
///
/// Text output comes from `render_text` and is skipped entirely when empty. Every
/// non-empty output ends with a newline.
pub fn print_output<W, T, F>(
    out: &mut W,
    format: OutputFormat,
    payload: &T,
    render_text: F,
) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    let mut rendered = match format {
        OutputFormat::Text => render_text(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(payload).context("serialize json")?
        }
        OutputFormat::Yaml => serde_yaml_ng::to_string(payload).context("serialize yaml")?,
    };

    if rendered.is_empty() {
        return Ok(());
    }
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// [`print_output`] to stdout.
pub fn emit<T, F>(format: OutputFormat, payload: &T, render_text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    let mut out = std::io::stdout().lock();
    print_output(&mut out, format, payload, render_text)
}
