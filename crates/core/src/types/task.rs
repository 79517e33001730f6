use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A runnable target discovered in a project (a make target, an npm
/// script, a gradle task, ...).
///
/// Tasks are immutable once discovered; a catalog refresh replaces the
/// whole set rather than mutating entries in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within one project's catalog
    pub id: String,
    /// Human-readable label shown in the selector
    pub label: String,
    /// Command template executed when the task is dispatched
    pub command: String,
    /// Working directory declared by the task, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Task {
    pub fn new(id: impl Into<String>, command: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            command: command.into(),
            dir: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}
