//! The generate pipeline: five steps, strictly in order.
//!
//! Preflight and filesystem failures abort with `?`. The container bootstrap
//! is best-effort and only recorded in the report.

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::bootstrap::{self, BootstrapReport};
use crate::compose;
use crate::config::RunConfig;
use crate::dev_env::DevEnvironment;
use crate::log::Console;
use crate::preflight;
use crate::scaffold::{self, InitReport, WriteOutcome};

#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub project_name: String,
    pub project_path: PathBuf,
    pub runtime_version: String,
    pub directories: InitReport,
    pub dockerfile: WriteOutcome,
    pub bootstrap: BootstrapReport,
    pub compose: WriteOutcome,
}

impl PipelineReport {
    pub fn bootstrap_succeeded(&self) -> bool {
        self.bootstrap.outcome.is_success()
    }
}

pub fn run(config: &RunConfig, env: &dyn DevEnvironment, console: &Console) -> Result<PipelineReport> {
    let layout = config.layout();

    // 1. Preflight
    let runtime_version = preflight::ensure_runtime(env)?;
    console.step(&format!("🔍 Found {}", runtime_version));

    // 2. Directories
    console.step(&format!("📁 Preparing {}", layout.root().display()));
    let directories = scaffold::init_directories(&layout)?;
    console.artifact(&layout.requirements_file(), directories.requirements);

    // 3. Dockerfile
    let dockerfile = scaffold::write_dockerfile(&layout, &config.python_version)?;
    console.artifact(&layout.dockerfile(), dockerfile);

    // 4. Image + Django
    let bootstrap = bootstrap::run(config, env, console)?;
    if !bootstrap.outcome.is_success() {
        console.warn("Bootstrap failed; continuing with the compose file");
    }

    // 5. Compose
    let compose = compose::write_compose(&layout)?;
    console.artifact(&layout.compose_file(), compose);

    Ok(PipelineReport {
        project_name: config.project_name.clone(),
        project_path: config.project_path.clone(),
        runtime_version,
        directories,
        dockerfile,
        bootstrap,
        compose,
    })
}
