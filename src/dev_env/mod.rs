pub mod docker;

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Result of a best-effort external command.
///
/// Failures here are reported, never propagated: the caller decides whether
/// to keep going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandOutcome {
    Succeeded,
    Failed { message: String },
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Succeeded)
    }

    pub fn failed(message: impl Into<String>) -> Self {
        CommandOutcome::Failed {
            message: message.into(),
        }
    }
}

/// Trait for the container runtime and host tools the pipeline shells out to
pub trait DevEnvironment {
    /// Get the name of this development environment
    fn name(&self) -> &'static str;

    /// Check if the runtime executable is on PATH
    fn is_available(&self) -> bool;

    /// Version line reported by the runtime CLI. Errors if it cannot run.
    fn version(&self) -> Result<String>;

    /// Run a shell line to completion, handing each stdout line to `on_line`
    /// as it arrives.
    fn run_shell(&self, command: &str, on_line: &mut dyn FnMut(&str)) -> CommandOutcome;

    /// Launch an editor on `path` without waiting. Failures are ignored.
    fn open_editor(&self, editor: &str, path: &Path);
}
