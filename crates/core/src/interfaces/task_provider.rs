//! Task discovery interface
//!
//! The actual knowledge of build tools (make, gradle, npm, ...) lives in
//! the discovery library behind this trait; taskpick only caches and
//! presents what it reports.

use crate::error::Result;
use crate::types::{ProjectRoot, Task};

/// Trait for enumerating the runnable tasks of a project
pub trait TaskProvider: Send + Sync {
    /// Discover all tasks for the project.
    ///
    /// The returned order is meaningful (providers group tasks by the
    /// build tool they came from) and is preserved all the way to the
    /// selector.
    fn discover(&self, root: &ProjectRoot) -> Result<Vec<Task>>;
}
