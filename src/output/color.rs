//! ANSI color handling for human-readable output.

use std::io::IsTerminal;

/// Red, used for the highest priority.
pub const RED: &str = "\x1b[31m";
/// Yellow, used for the second priority.
pub const YELLOW: &str = "\x1b[33m";
/// Blue, used for the third priority.
pub const BLUE: &str = "\x1b[34m";
/// Cyan, used for label names.
pub const CYAN: &str = "\x1b[36m";
/// Gray, used for IDs, dates, and secondary text.
pub const GRAY: &str = "\x1b[90m";
/// Strikethrough, used for completed tasks.
pub const STRIKE: &str = "\x1b[9m";

const RESET: &str = "\x1b[0m";

/// When to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when stdout is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

/// Wraps text in ANSI codes according to the selected mode.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    enabled: bool,
}

impl Color {
    /// Creates a color configuration from the given mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        Self { enabled }
    }

    /// Wraps `text` in the given ANSI code when color is enabled.
    #[must_use]
    pub fn wrap(&self, code: &str, text: &str) -> String {
        if self.enabled && !code.is_empty() {
            format!("{code}{text}{RESET}")
        } else {
            text.to_owned()
        }
    }
}
