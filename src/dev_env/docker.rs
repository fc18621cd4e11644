use super::{CommandOutcome, DevEnvironment};
use anyhow::{bail, Context, Result};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::process::{Command, Stdio};

use crate::log;
use crate::paths::CONTAINER_WORKDIR;

pub struct DockerEnvironment;

impl DevEnvironment for DockerEnvironment {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn is_available(&self) -> bool {
        which::which("docker").is_ok()
    }

    fn version(&self) -> Result<String> {
        let output = Command::new("docker")
            .arg("-v")
            .output()
            .context("Failed to run docker -v")?;

        if !output.status.success() {
            bail!("docker -v exited with {}", output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn run_shell(&self, command: &str, on_line: &mut dyn FnMut(&str)) -> CommandOutcome {
        log::debug("dev_env::docker", &format!("sh -c {}", command));

        let mut child = match Command::new("sh")
            .args(["-c", command])
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => return CommandOutcome::failed(format!("Failed to run shell command: {e}")),
        };

        // Drain stdout to EOF; non-UTF-8 bytes are replaced, never fatal
        if let Some(stdout) = child.stdout.take() {
            let mut reader = BufReader::new(stdout);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let line = String::from_utf8_lossy(&buf);
                        on_line(line.trim_end_matches(['\n', '\r']));
                    }
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => {
                        log::debug("dev_env::docker", &format!("stdout read error: {e}"));
                        break;
                    }
                }
            }
        }

        match child.wait() {
            Ok(status) if status.success() => CommandOutcome::Succeeded,
            Ok(status) => CommandOutcome::failed(format!("Shell command failed ({status}): {command}")),
            Err(e) => CommandOutcome::failed(format!("Failed to wait for shell command: {e}")),
        }
    }

    fn open_editor(&self, editor: &str, path: &Path) {
        let mut parts = editor.split_whitespace();
        let Some(program) = parts.next() else {
            return;
        };

        let _ = Command::new(program)
            .args(parts)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
    }
}

/// `docker build -t "<tag>" "<context>"`
pub fn build_command(tag: &str, context: &Path) -> String {
    format!("docker build -t \"{}\" \"{}\"", tag, context.display())
}

/// `docker run --rm -v "<src>:/code" <image> bash -c "<script>"`
pub fn run_command(source_dir: &Path, image: &str, script: &str) -> String {
    format!(
        "docker run --rm -v \"{}:{}\" {} bash -c \"{}\"",
        source_dir.display(),
        CONTAINER_WORKDIR,
        image,
        script
    )
}
