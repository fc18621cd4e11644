//! Container bootstrapper: build the image, then install Django and/or
//! create the project skeleton inside a throwaway container.
//!
//! Decision table:
//!
//! | requirements mention `Django` | `src/manage.py` exists | container script            |
//! |-------------------------------|------------------------|-----------------------------|
//! | no                            | no                     | install && startproject     |
//! | no                            | yes                    | install                     |
//! | yes                           | no                     | startproject                |
//! | yes                           | yes                    | none (build only)           |
//!
//! Whenever a script runs it ends with `pip freeze > requirements.txt`, which
//! lands in the bind-mounted host `src/`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

use crate::config::RunConfig;
use crate::dev_env::{docker, CommandOutcome, DevEnvironment};
use crate::log::{self, Console};

/// Case-sensitive marker looked for in requirements.txt.
const DJANGO_MARKER: &str = "Django";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapPlan {
    pub needs_django_install: bool,
    pub needs_project_init: bool,
    /// Always present
    pub build_command: String,
    /// Script run inside the container, if any
    pub container_script: Option<String>,
}

impl BootstrapPlan {
    /// Full shell line: the build, followed by the container run when needed.
    pub fn shell_line(&self, config: &RunConfig) -> String {
        match &self.container_script {
            Some(script) => format!(
                "{} && {}",
                self.build_command,
                docker::run_command(&config.layout().source_dir(), &config.project_name, script)
            ),
            None => self.build_command.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub plan: BootstrapPlan,
    pub outcome: CommandOutcome,
    pub editor_launched: bool,
}

/// Inspect the source tree and decide what the container has to do.
pub fn plan(config: &RunConfig) -> Result<BootstrapPlan> {
    let layout = config.layout();
    let requirements_path = layout.requirements_file();
    let requirements = fs::read_to_string(&requirements_path)
        .with_context(|| format!("Failed to read {}", requirements_path.display()))?;

    let needs_django_install = !requirements.contains(DJANGO_MARKER);
    let needs_project_init = !layout.manage_py().exists();

    Ok(BootstrapPlan {
        needs_django_install,
        needs_project_init,
        build_command: docker::build_command(&config.project_name, layout.root()),
        container_script: container_script(
            &config.project_name,
            config.django_version.as_deref(),
            needs_django_install,
            needs_project_init,
        ),
    })
}

/// Compose the in-container script, or `None` when nothing needs doing.
pub fn container_script(
    project_name: &str,
    django_version: Option<&str>,
    needs_django_install: bool,
    needs_project_init: bool,
) -> Option<String> {
    let mut steps = Vec::new();

    if needs_django_install {
        steps.push(match django_version {
            Some(version) => format!("pip install django=={}", version),
            None => "pip install django".to_string(),
        });
    }

    if needs_project_init {
        steps.push(format!("django-admin startproject {} .", project_name));
    }

    if steps.is_empty() {
        return None;
    }

    steps.push("pip freeze > requirements.txt".to_string());
    Some(steps.join(" && "))
}

/// Build the image and run the bootstrap script.
///
/// Only reading requirements.txt can fail here. The Docker commands report
/// through `BootstrapReport::outcome` and never abort the pipeline.
pub fn run(
    config: &RunConfig,
    env: &dyn DevEnvironment,
    console: &Console,
) -> Result<BootstrapReport> {
    let plan = plan(config)?;
    let shell_line = plan.shell_line(config);
    log::debug("bootstrap", &shell_line);

    match &plan.container_script {
        Some(_) => console.step(&format!(
            "🐳 Building image {} and bootstrapping Django...",
            config.project_name
        )),
        None => console.step(&format!(
            "🐳 Building image {} (Django already set up)...",
            config.project_name
        )),
    }

    let outcome = env.run_shell(&shell_line, &mut |line| console.relay(line));
    if let CommandOutcome::Failed { message } = &outcome {
        console.error(message);
    }

    let mut editor_launched = false;
    if plan.container_script.is_some() {
        if let Some(editor) = &config.editor {
            env.open_editor(editor, &config.project_path);
            editor_launched = true;
        }
    }

    Ok(BootstrapReport {
        plan,
        outcome,
        editor_launched,
    })
}
