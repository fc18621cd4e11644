//! Console output for the generate pipeline.
//!
//! Progress goes to stdout, problems to stderr. Set `DJANGO_BOOTSTRAP_LOG`
//! to also see the exact shell lines handed to Docker.

use colored::*;
use std::path::Path;

use crate::scaffold::WriteOutcome;

pub const LOG_ENV_VAR: &str = "DJANGO_BOOTSTRAP_LOG";

pub fn debug_enabled() -> bool {
    std::env::var_os(LOG_ENV_VAR).is_some()
}

/// Debug line, only when `DJANGO_BOOTSTRAP_LOG` is set.
pub fn debug(scope: &str, msg: &str) {
    if debug_enabled() {
        eprintln!("[DEBUG {}] {}", scope, msg);
    }
}

/// Progress printer. Quiet mode (`--json`) keeps stdout clean for the report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn step(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg);
        }
    }

    pub fn artifact(&self, path: &Path, outcome: WriteOutcome) {
        if self.quiet {
            return;
        }
        match outcome {
            WriteOutcome::Created => {
                println!("  {} Created {}", "✓".green().bold(), path.display())
            }
            WriteOutcome::Skipped => println!(
                "  {} {}",
                "•".dimmed(),
                format!("Kept existing {}", path.display()).dimmed()
            ),
        }
    }

    /// Relay one line of container output.
    pub fn relay(&self, line: &str) {
        if self.quiet {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", "⚠️ ".yellow(), msg);
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", "✗".red().bold(), msg);
    }
}
