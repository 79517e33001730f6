//! Project resolution
//!
//! Maps a working context onto a project root through the injected
//! locator, with one interactive fallback when nothing matches.

use crate::error::{Error, Result};
use crate::interfaces::ProjectLocator;
use crate::types::{ProjectRoot, WorkContext};
use std::sync::Arc;
use tracing::debug;

pub struct ProjectResolver {
    locator: Arc<dyn ProjectLocator>,
}

impl ProjectResolver {
    pub fn new(locator: Arc<dyn ProjectLocator>) -> Self {
        Self { locator }
    }

    /// Resolve the context to a project root.
    ///
    /// When the locator finds nothing, its interactive selection flow
    /// runs once; a declined selection is `Error::NoProject`, a terminal
    /// user-visible condition for the current command.
    pub fn resolve(&self, ctx: &WorkContext) -> Result<ProjectRoot> {
        if let Some(root) = self.locator.locate(ctx.anchor()) {
            debug!("resolved {} from {}", root, ctx.anchor().display());
            return Ok(root);
        }

        debug!("no project for {}, asking the user", ctx.anchor().display());
        match self.locator.select_project()? {
            Some(root) => Ok(root),
            None => Err(Error::NoProject),
        }
    }
}
