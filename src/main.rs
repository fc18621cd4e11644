use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Scaffold a containerized Django project", long_about = None)]
#[command(after_help = "Examples:
  django-bootstrap generate proj
  django-bootstrap generate proj .
  django-bootstrap generate proj --python-version 3.11
  django-bootstrap generate proj ./sites --django-version 3.0.2")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create Dockerfile, image, Django project and docker-compose.yaml
    Generate {
        #[command(flatten)]
        args: commands::generate::GenerateArgs,
    },

    /// Show version information
    Version {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,

        /// Show detected Docker version
        #[arg(short, long)]
        components: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => match args.project_name.clone() {
            Some(name) => commands::generate::execute(args, &name)?,
            None => {
                // No project name: show usage and exit cleanly
                let mut cmd = Cli::command();
                if let Some(generate) = cmd.find_subcommand_mut("generate") {
                    generate.print_help()?;
                }
            }
        },
        Commands::Version { json, components } => {
            commands::version::execute(json, components)?;
        }
    }

    Ok(())
}
