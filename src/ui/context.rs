use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Rendering switches resolved once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(cli_color: Option<ColorWhen>, caps: TerminalCapabilities) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            color,
            unicode: caps.supports_unicode,
        }
    }
}
