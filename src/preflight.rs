//! Preflight checks - ensure the container runtime is usable before
//! anything is written to disk.

use anyhow::{bail, Result};

use crate::dev_env::DevEnvironment;

/// Verify the runtime CLI answers its version command. Returns the version line.
pub fn ensure_runtime(env: &dyn DevEnvironment) -> Result<String> {
    match env.version() {
        Ok(version) => Ok(version),
        Err(e) if !env.is_available() => {
            bail!("Require {0}! ({0} not found on PATH: {1:#})", env.name(), e)
        }
        Err(e) => bail!("Require {}! ({:#})", env.name(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dev_env::CommandOutcome;
    use std::path::Path;

    struct FixedRuntime(Option<&'static str>);

    impl DevEnvironment for FixedRuntime {
        fn name(&self) -> &'static str {
            "docker"
        }
        fn is_available(&self) -> bool {
            self.0.is_some()
        }
        fn version(&self) -> Result<String> {
            match self.0 {
                Some(v) => Ok(v.to_string()),
                None => bail!("No such file or directory"),
            }
        }
        fn run_shell(&self, _command: &str, _on_line: &mut dyn FnMut(&str)) -> CommandOutcome {
            CommandOutcome::Succeeded
        }
        fn open_editor(&self, _editor: &str, _path: &Path) {}
    }

    #[test]
    fn test_available_runtime_passes() {
        let version = ensure_runtime(&FixedRuntime(Some("Docker version 24.0.7"))).unwrap();
        assert_eq!(version, "Docker version 24.0.7");
    }

    #[test]
    fn test_missing_runtime_is_fatal() {
        let err = ensure_runtime(&FixedRuntime(None)).unwrap_err();
        assert!(err.to_string().contains("Require docker!"));
        assert!(err.to_string().contains("docker not found on PATH"));
    }
}
