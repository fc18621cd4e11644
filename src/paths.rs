//! Single source of truth for the generated project's filesystem layout.
//!
//! This module defines WHERE artifacts live. It has no I/O, no validation,
//! no business logic. One file shows the entire layout.
//!
//! ```text
//! <project>/
//! ├── Dockerfile               # Write-once build instructions
//! ├── docker-compose.yaml      # Write-once service descriptor
//! └── src/                     # Bind-mounted at /code in the container
//!     ├── requirements.txt     # Rewritten by `pip freeze`
//!     └── manage.py            # Present once the Django project exists
//! ```

use std::path::{Component, Path, PathBuf};

// =============================================================================
// File names
// =============================================================================

pub const SOURCE_DIR: &str = "src";
pub const REQUIREMENTS_FILE: &str = "requirements.txt";
pub const MANAGE_PY: &str = "manage.py";
pub const DOCKERFILE: &str = "Dockerfile";
pub const COMPOSE_FILE: &str = "docker-compose.yaml";

/// Mount point of the source directory inside the container.
pub const CONTAINER_WORKDIR: &str = "/code";

// =============================================================================
// Project layout
// =============================================================================

/// Every path the pipeline touches, derived from the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root: `<project>/`
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Source tree: `<project>/src/`
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR)
    }

    /// Requirements file: `<project>/src/requirements.txt`
    pub fn requirements_file(&self) -> PathBuf {
        self.source_dir().join(REQUIREMENTS_FILE)
    }

    /// Django entry point: `<project>/src/manage.py`
    pub fn manage_py(&self) -> PathBuf {
        self.source_dir().join(MANAGE_PY)
    }

    /// `<project>/Dockerfile`
    pub fn dockerfile(&self) -> PathBuf {
        self.root.join(DOCKERFILE)
    }

    /// `<project>/docker-compose.yaml`
    pub fn compose_file(&self) -> PathBuf {
        self.root.join(COMPOSE_FILE)
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve a user-supplied project path against the working directory.
///
/// Absolute paths are kept as given. Relative paths are joined onto `cwd`.
/// `.` segments are dropped either way; `..` is kept verbatim.
pub fn resolve_project_path(cwd: &Path, arg: Option<&Path>) -> PathBuf {
    let joined = match arg {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => cwd.to_path_buf(),
    };

    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
