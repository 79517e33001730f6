//! Marker-file project locator
//!
//! Walks up from the anchor path looking for well-known root markers;
//! the nearest directory containing one wins.

use crate::error::Result;
use crate::interfaces::ProjectLocator;
use crate::types::ProjectRoot;
use std::path::Path;

/// Directory entries that mark a project root
pub const DEFAULT_MARKERS: &[&str] = &[
    ".git",
    "Cargo.toml",
    "Makefile",
    "package.json",
    "build.gradle",
    "project.clj",
];

type ProjectPicker = dyn Fn() -> Result<Option<ProjectRoot>> + Send + Sync;

pub struct MarkerLocator {
    markers: Vec<String>,
    picker: Option<Box<ProjectPicker>>,
}

impl MarkerLocator {
    pub fn new() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            picker: None,
        }
    }

    pub fn with_markers(mut self, markers: &[&str]) -> Self {
        self.markers = markers.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Install the interactive "switch project" flow.
    ///
    /// Without one, `select_project` answers as if the user declined.
    pub fn with_picker(
        mut self,
        picker: impl Fn() -> Result<Option<ProjectRoot>> + Send + Sync + 'static,
    ) -> Self {
        self.picker = Some(Box::new(picker));
        self
    }
}

impl Default for MarkerLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectLocator for MarkerLocator {
    fn locate(&self, anchor: &Path) -> Option<ProjectRoot> {
        let mut current = if anchor.is_file() {
            anchor.parent()?.to_path_buf()
        } else {
            anchor.to_path_buf()
        };

        loop {
            if self.markers.iter().any(|m| current.join(m).exists()) {
                return Some(ProjectRoot::new(current));
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn select_project(&self) -> Result<Option<ProjectRoot>> {
        match &self.picker {
            Some(picker) => picker(),
            None => Ok(None),
        }
    }
}
