//! Manifest-file task provider
//!
//! Reads an ordered task manifest (`taskpick.json` by default) from the
//! project root. This is the bundled stand-in for a real build-tool
//! discovery library: a project without a manifest simply has no tasks,
//! and no build-tool files are ever parsed here.

use crate::error::{Error, Result};
use crate::interfaces::TaskProvider;
use crate::types::{ProjectRoot, Task};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ManifestTask {
    id: String,
    #[serde(default)]
    label: Option<String>,
    command: String,
    #[serde(default)]
    dir: Option<PathBuf>,
}

pub struct ManifestProvider {
    manifest_name: String,
}

impl ManifestProvider {
    pub fn new(manifest_name: impl Into<String>) -> Self {
        Self {
            manifest_name: manifest_name.into(),
        }
    }
}

impl TaskProvider for ManifestProvider {
    fn discover(&self, root: &ProjectRoot) -> Result<Vec<Task>> {
        let path = root.as_path().join(&self.manifest_name);
        if !path.is_file() {
            debug!("no {} in {}, no tasks", self.manifest_name, root);
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&path)?;
        let manifest: Vec<ManifestTask> = serde_json::from_str(&contents)
            .map_err(|e| Error::Discovery(format!("{}: {}", path.display(), e)))?;

        // Manifest order is the discovery order; never sort it.
        Ok(manifest
            .into_iter()
            .map(|entry| Task {
                label: entry.label.unwrap_or_else(|| entry.id.clone()),
                id: entry.id,
                command: entry.command,
                dir: entry.dir,
            })
            .collect())
    }
}
