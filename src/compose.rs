//! docker-compose descriptor for the development server.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::paths::{ProjectLayout, CONTAINER_WORKDIR, SOURCE_DIR};
use crate::scaffold::{self, WriteOutcome};

pub const COMPOSE_VERSION: &str = "3";
pub const SERVICE_NAME: &str = "django";
pub const DEV_SERVER_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeFile {
    pub version: String,
    pub services: BTreeMap<String, Service>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub build: String,
    pub command: String,
    pub volumes: Vec<String>,
    pub ports: Vec<String>,
}

impl ComposeFile {
    /// Single `django` service: built from the project root, source mounted
    /// at `/code`, dev server on port 8000. Independent of the project name.
    pub fn django_dev() -> Self {
        let service = Service {
            build: ".".to_string(),
            command: format!(
                "bash -c \"python manage.py runserver 127.0.0.1:{}\"",
                DEV_SERVER_PORT
            ),
            volumes: vec![format!("./{}:{}", SOURCE_DIR, CONTAINER_WORKDIR)],
            ports: vec![format!("{0}:{0}", DEV_SERVER_PORT)],
        };

        Self {
            version: COMPOSE_VERSION.to_string(),
            services: BTreeMap::from([(SERVICE_NAME.to_string(), service)]),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Write `docker-compose.yaml` unless it already exists.
pub fn write_compose(layout: &ProjectLayout) -> Result<WriteOutcome> {
    scaffold::write_once(&layout.compose_file(), &ComposeFile::django_dev().to_yaml()?)
}
