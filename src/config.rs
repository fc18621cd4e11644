use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use crate::paths::{self, ProjectLayout};

pub const DEFAULT_PYTHON_VERSION: &str = "3.7";
pub const DEFAULT_EDITOR: &str = "code";

/// Environment variable overriding the editor launched after bootstrap.
pub const EDITOR_ENV_VAR: &str = "DJANGO_BOOTSTRAP_EDITOR";

/// Parameters for one `generate` run. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Image tag and Django project name
    pub project_name: String,
    /// Absolute project root
    pub project_path: PathBuf,
    pub python_version: String,
    /// Pin for `pip install django==<version>`
    pub django_version: Option<String>,
    /// Editor launched on the project after bootstrap; `None` disables it
    pub editor: Option<String>,
}

impl RunConfig {
    /// Build a config from raw CLI values, resolving the path against `cwd`.
    pub fn from_args(
        project_name: &str,
        project_path: Option<&Path>,
        cwd: &Path,
        python_version: Option<String>,
        django_version: Option<String>,
        editor: Option<String>,
    ) -> Result<Self> {
        let project_name = project_name.trim();
        if project_name.is_empty() {
            bail!("Project name must not be empty");
        }

        Ok(Self {
            project_name: project_name.to_string(),
            project_path: paths::resolve_project_path(cwd, project_path),
            python_version: python_version
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PYTHON_VERSION.to_string()),
            django_version: django_version.filter(|v| !v.trim().is_empty()),
            editor,
        })
    }

    pub fn layout(&self) -> ProjectLayout {
        ProjectLayout::new(&self.project_path)
    }
}

/// Editor to launch: explicit flag, then `DJANGO_BOOTSTRAP_EDITOR`, then `code`.
pub fn resolve_editor(flag: Option<String>, disabled: bool) -> Option<String> {
    if disabled {
        return None;
    }
    flag.or_else(|| std::env::var(EDITOR_ENV_VAR).ok())
        .filter(|e| !e.trim().is_empty())
        .or_else(|| Some(DEFAULT_EDITOR.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/home/dev/work")
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::from_args("blog", None, &cwd(), None, None, None).unwrap();

        assert_eq!(config.project_name, "blog");
        assert_eq!(config.project_path, cwd());
        assert_eq!(config.python_version, "3.7");
        assert!(config.django_version.is_none());
    }

    #[test]
    fn test_no_subdirectory_named_after_project() {
        let config = RunConfig::from_args("blog", None, &cwd(), None, None, None).unwrap();
        assert!(!config.project_path.ends_with("blog"));
    }

    #[test]
    fn test_relative_path_and_versions() {
        let config = RunConfig::from_args(
            "blog",
            Some(Path::new("./sites")),
            &cwd(),
            Some("3.11".to_string()),
            Some("4.2.7".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(config.project_path, PathBuf::from("/home/dev/work/sites"));
        assert_eq!(config.python_version, "3.11");
        assert_eq!(config.django_version.as_deref(), Some("4.2.7"));
        assert_eq!(
            config.layout().dockerfile(),
            PathBuf::from("/home/dev/work/sites/Dockerfile")
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(RunConfig::from_args("", None, &cwd(), None, None, None).is_err());
        assert!(RunConfig::from_args("   ", None, &cwd(), None, None, None).is_err());
    }

    #[test]
    fn test_blank_versions_fall_back() {
        let config = RunConfig::from_args(
            "blog",
            None,
            &cwd(),
            Some(String::new()),
            Some(" ".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.python_version, "3.7");
        assert!(config.django_version.is_none());
    }

    #[test]
    fn test_editor_resolution() {
        assert_eq!(resolve_editor(Some("vim".to_string()), true), None);
        assert_eq!(
            resolve_editor(Some("vim".to_string()), false).as_deref(),
            Some("vim")
        );
    }
}
