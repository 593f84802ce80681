//! Emphasis applied to flag tokens and titles in the report.
//!
//! The core matcher stays deterministic by carrying the styling decision as a
//! value instead of consulting terminal state: `Bold` wraps text in a fixed
//! ANSI escape pair, `Plain` leaves it untouched.

const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Plain,
}

impl Emphasis {
    /// Picks the emphasis for a run, honoring `--no-color`.
    pub fn for_output(no_color: bool) -> Self {
        if no_color { Self::Plain } else { Self::Bold }
    }

    /// Wraps `text` in the emphasis marker. Only the text itself is wrapped;
    /// callers keep surrounding whitespace outside the escape pair.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Bold => format!("{ANSI_BOLD}{text}{ANSI_RESET}"),
            Self::Plain => text.to_string(),
        }
    }
}
