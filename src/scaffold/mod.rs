//! Create-if-missing filesystem steps: directories, requirements file and
//! the Dockerfile. Nothing here ever overwrites an existing artifact.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::paths::ProjectLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Created,
    Skipped,
}

/// What the directory initializer found versus created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub project_dir: WriteOutcome,
    pub source_dir: WriteOutcome,
    pub requirements: WriteOutcome,
}

pub fn init_directories(layout: &ProjectLayout) -> Result<InitReport> {
    let project_dir = ensure_dir(layout.root())?;
    let source_dir = ensure_dir(&layout.source_dir())?;
    let requirements = write_once(&layout.requirements_file(), "")?;

    Ok(InitReport {
        project_dir,
        source_dir,
        requirements,
    })
}

/// Dockerfile body for the given Python version. No trailing newline.
pub fn render_dockerfile(python_version: &str) -> String {
    [
        format!("FROM python:{}", python_version).as_str(),
        "WORKDIR /code",
        "ADD ./src /code",
        "RUN pip install --upgrade pip",
        "RUN pip install -r requirements.txt",
    ]
    .join("\n")
}

/// Write the Dockerfile unless one exists. An existing file is kept even if
/// it was generated for a different Python version.
pub fn write_dockerfile(layout: &ProjectLayout, python_version: &str) -> Result<WriteOutcome> {
    write_once(&layout.dockerfile(), &render_dockerfile(python_version))
}

pub(crate) fn ensure_dir(path: &Path) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Skipped);
    }
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    Ok(WriteOutcome::Created)
}

pub(crate) fn write_once(path: &Path, contents: &str) -> Result<WriteOutcome> {
    if path.exists() {
        return Ok(WriteOutcome::Skipped);
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(WriteOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dockerfile_template() {
        assert_eq!(
            render_dockerfile("3.11"),
            "FROM python:3.11\nWORKDIR /code\nADD ./src /code\nRUN pip install --upgrade pip\nRUN pip install -r requirements.txt"
        );
    }

    #[test]
    fn test_init_creates_nested_project() {
        let tmp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(tmp.path().join("a").join("b"));

        let report = init_directories(&layout).unwrap();

        assert_eq!(report.project_dir, WriteOutcome::Created);
        assert_eq!(report.source_dir, WriteOutcome::Created);
        assert_eq!(report.requirements, WriteOutcome::Created);
        assert!(layout.source_dir().is_dir());
        assert_eq!(fs::read_to_string(layout.requirements_file()).unwrap(), "");
    }

    #[test]
    fn test_init_keeps_existing_requirements() {
        let tmp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(tmp.path());
        fs::create_dir_all(layout.source_dir()).unwrap();
        fs::write(layout.requirements_file(), "Django==4.2\n").unwrap();

        let report = init_directories(&layout).unwrap();

        assert_eq!(report.project_dir, WriteOutcome::Skipped);
        assert_eq!(report.source_dir, WriteOutcome::Skipped);
        assert_eq!(report.requirements, WriteOutcome::Skipped);
        assert_eq!(
            fs::read_to_string(layout.requirements_file()).unwrap(),
            "Django==4.2\n"
        );
    }

    #[test]
    fn test_dockerfile_is_write_once() {
        let tmp = TempDir::new().unwrap();
        let layout = ProjectLayout::new(tmp.path());

        assert_eq!(write_dockerfile(&layout, "3.8").unwrap(), WriteOutcome::Created);
        assert_eq!(write_dockerfile(&layout, "3.12").unwrap(), WriteOutcome::Skipped);

        let content = fs::read_to_string(layout.dockerfile()).unwrap();
        assert!(content.starts_with("FROM python:3.8\n"));
    }
}
