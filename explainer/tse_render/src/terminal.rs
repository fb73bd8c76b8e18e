//! Terminal Emitter
//!
//! Human-readable explanation output with optional ANSI color support.

use std::fmt::Write;

use tse_diagnostic::Explanation;

use crate::ExplanationEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` decides; `Always` and `Never` ignore it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter {
    colors: bool,
}

impl TerminalEmitter {
    /// Create a terminal emitter with explicit color mode.
    ///
    /// `is_tty` is the caller's TTY detection for the destination stream,
    /// consulted only under [`ColorMode::Auto`].
    pub fn with_color_mode(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            colors: mode.should_use_colors(is_tty),
        }
    }

    fn colored(&self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{color}{text}{}", colors::RESET)
        } else {
            text.to_string()
        }
    }
}

impl ExplanationEmitter for TerminalEmitter {
    fn render(&self, explanation: &Explanation) -> String {
        let mut out = String::with_capacity(256);

        // Header: error: title
        let _ = writeln!(
            out,
            "{}: {}",
            self.colored("error", colors::ERROR),
            self.colored(&explanation.title, colors::BOLD)
        );
        let _ = writeln!(out, "  {}", explanation.description);

        for solution in &explanation.solutions {
            let _ = writeln!(
                out,
                "  = {}: {}",
                self.colored("help", colors::HELP),
                solution.title
            );
            for line in solution.code.lines() {
                let _ = writeln!(out, "        {line}");
            }
        }

        out
    }
}
