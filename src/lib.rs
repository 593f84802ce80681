//! Extracts and highlights the documentation for specific command-line flags
//! out of a Unix manual page.
//!
//! The rendered manpage is split into blank-line-delimited sections; a section
//! is considered to document a flag when the flag appears as a prefix of one
//! of the comma-separated declarations on its first line, or at the start of
//! its second line (a wrapped declaration). Matching sections are emitted with
//! the flag token itself bolded.

pub mod cli;
pub mod flags;
pub mod logging;
pub mod man;
pub mod matcher;
pub mod output;
pub mod style;
