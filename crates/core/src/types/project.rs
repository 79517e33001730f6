use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A project, identified by its root path.
///
/// Exactly one logical project exists per root; resolution for the same
/// working context is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Short display name, the final path component
    pub fn name(&self) -> String {
        self.0
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl From<&Path> for ProjectRoot {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}

/// The caller's working context: where the user currently is, and the
/// file backing that position if there is one.
#[derive(Debug, Clone)]
pub struct WorkContext {
    /// Current working directory
    pub cwd: PathBuf,
    /// File backing the active context, when one exists
    pub file: Option<PathBuf>,
}

impl WorkContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// The most specific path available for project resolution
    pub fn anchor(&self) -> &Path {
        self.file.as_deref().unwrap_or(&self.cwd)
    }
}
