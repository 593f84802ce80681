use std::path::PathBuf;
use std::process::Command;

use log::debug;
use thiserror::Error;
use which::which;

/// Errors from the manual-page lookup.
#[derive(Debug, Error)]
pub enum ManError {
    #[error("man executable not found on PATH")]
    NotFound,

    #[error("no manual page for `{command}`")]
    PageNotFound { command: String },

    #[error("failed to execute man: {0}")]
    CommandFailed(String),
}

/// Runs man(1) and captures its rendered plain-text output.
pub struct ManRunner {
    man_path: PathBuf,
}

impl ManRunner {
    /// Creates a new runner, verifying man is installed.
    pub fn new() -> Result<Self, ManError> {
        let man_path = which("man").map_err(|_| ManError::NotFound)?;

        debug!("Found man at: {:?}", man_path);

        Ok(Self { man_path })
    }

    /// Renders the manual page for `command` to plain text.
    ///
    /// Any non-zero exit from man is reported as `PageNotFound`; man's own
    /// diagnostic is kept out of the user-facing output and logged instead.
    pub fn load_page(&self, command: &str) -> Result<String, ManError> {
        debug!("Looking up manual page for {command}");

        let output = Command::new(&self.man_path)
            .arg(command)
            .output()
            .map_err(|e| ManError::CommandFailed(format!("Failed to execute man: {e}")))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("man exited with {}: {}", output.status, stderr.trim_end());
            Err(ManError::PageNotFound {
                command: command.to_string(),
            })
        }
    }
}
