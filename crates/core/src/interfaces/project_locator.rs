//! Project identification interface

use crate::error::Result;
use crate::types::ProjectRoot;
use std::path::Path;

/// Trait for mapping a working context onto a project root
pub trait ProjectLocator: Send + Sync {
    /// Find the project root containing `anchor`, if any. Side-effect free.
    fn locate(&self, anchor: &Path) -> Option<ProjectRoot>;

    /// Interactive fallback: ask the user to pick a project.
    ///
    /// Returns `Ok(None)` when the user declines.
    fn select_project(&self) -> Result<Option<ProjectRoot>>;
}
