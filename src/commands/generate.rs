use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use std::path::PathBuf;

use django_bootstrap::config::{self, RunConfig};
use django_bootstrap::dev_env::docker::DockerEnvironment;
use django_bootstrap::log::Console;
use django_bootstrap::pipeline::{self, PipelineReport};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Project name, used as the image tag and Django project name
    pub project_name: Option<String>,

    /// Project directory (default: current directory)
    pub project_path: Option<PathBuf>,

    /// Python version for the base image
    #[arg(short = 'p', long, alias = "pythonVersion", default_value = config::DEFAULT_PYTHON_VERSION)]
    pub python_version: String,

    /// Django version to pin (default: latest)
    #[arg(short = 'd', long, alias = "djangoVersion")]
    pub django_version: Option<String>,

    /// Editor to open the project with after bootstrap (default: code)
    #[arg(long)]
    pub editor: Option<String>,

    /// Do not open an editor after bootstrap
    #[arg(long, conflicts_with = "editor")]
    pub no_editor: bool,

    /// Output the run report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: GenerateArgs, project_name: &str) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = RunConfig::from_args(
        project_name,
        args.project_path.as_deref(),
        &cwd,
        Some(args.python_version),
        args.django_version,
        config::resolve_editor(args.editor, args.no_editor),
    )?;

    let console = Console::new(args.json);
    console.step(&format!(
        "🎨 Generating Django project {} (Python {})",
        config.project_name.bold(),
        config.python_version
    ));

    let report = pipeline::run(&config, &DockerEnvironment, &console)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_summary(&report);
    }

    Ok(())
}

fn display_summary(report: &PipelineReport) {
    if report.bootstrap_succeeded() {
        println!("\n{}", "✅ Project ready".green().bold());
    } else {
        println!("\n{}", "⚠️  Project files written, but the container bootstrap failed".yellow().bold());
    }
    println!("\n🚀 Launch: cd {} && docker compose up", report.project_path.display());
}
