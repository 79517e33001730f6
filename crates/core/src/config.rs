//! Configuration
//!
//! Loaded from the nearest `.taskpick.json` found by walking up from the
//! working directory, with defaults when no file exists.

use crate::error::{Error, Result};
use crate::types::DispatchMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".taskpick.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for generated sink names
    pub sink_prefix: String,
    /// Dispatch mode used when the caller does not specify one
    pub default_mode: DispatchMode,
    /// Manifest file name read by the bundled manifest provider
    pub manifest_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sink_prefix: "taskpick:".to_string(),
            default_mode: DispatchMode::RootNoArgs,
            manifest_name: "taskpick.json".to_string(),
        }
    }
}

impl Config {
    /// Walk up from `start` looking for a config file; nearest wins
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the nearest config file, or fall back to defaults
    pub fn load(start: &Path) -> Result<Self> {
        match Self::find_config_file(start) {
            Some(path) => {
                debug!("loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
