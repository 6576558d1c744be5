use ado::config::{ValidationIssue, ValidationResult};

use crate::ui::primitives::icon::Icon;

pub fn render_validation(
    result: &ValidationResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = if result.is_valid() {
        format!(
            "{} Config valid: {}",
            Icon::Success.colored(supports_color, supports_unicode),
            result.path()
        )
    } else {
        format!(
            "{} Config invalid: {}",
            Icon::Error.colored(supports_color, supports_unicode),
            result.path()
        )
    };

    for issue in result.errors() {
        out.push('\n');
        out.push_str(&render_issue("Error", issue));
    }
    for issue in result.warnings() {
        out.push('\n');
        out.push_str(&render_issue("Warning", issue));
    }

    out
}

fn render_issue(label: &str, issue: &ValidationIssue) -> String {
    let mut line = match issue.line {
        Some(n) => format!("  {}: {} at line {}", label, issue.message, n),
        None => format!("  {}: {}", label, issue.message),
    };
    if let Some(suggestion) = &issue.suggestion {
        line.push_str(&format!("\n    Did you mean {:?}?", suggestion));
    }
    line
}
