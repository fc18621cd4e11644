use anyhow::Result;
use serde_json::json;

use django_bootstrap::dev_env::docker::DockerEnvironment;
use django_bootstrap::dev_env::DevEnvironment;

const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn execute(json: bool, components: bool) -> Result<()> {
    if json {
        output_json(components)?;
    } else {
        output_human(components);
    }
    Ok(())
}

fn output_json(components: bool) -> Result<()> {
    let mut version_info = json!({
        "django-bootstrap": CORE_VERSION,
    });

    if components {
        version_info["docker"] = json!(docker_version());
    }

    println!("{}", serde_json::to_string_pretty(&version_info)?);
    Ok(())
}

fn output_human(components: bool) {
    println!("django-bootstrap {CORE_VERSION}");

    if components {
        println!("\nComponents:");
        match docker_version() {
            Some(version) => println!("  docker: {version} (external)"),
            None => println!("  docker: not found"),
        }
    }
}

fn docker_version() -> Option<String> {
    let docker = DockerEnvironment;
    if !docker.is_available() {
        return None;
    }
    docker.version().ok()
}
