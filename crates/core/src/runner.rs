//! Application root coordinating resolution, the catalog, dispatch, and
//! execution.
//!
//! Owns every piece of cross-command state (catalog, last-run register,
//! sink registry) explicitly; nothing in the crate is a global.

use crate::catalog::TaskCatalog;
use crate::config::Config;
use crate::dispatch;
use crate::error::Result;
use crate::execution::ExecutionRunner;
use crate::interfaces::{JobSpawner, ProjectLocator, Selector, TaskProvider};
use crate::resolver::ProjectResolver;
use crate::sink::{SinkHandle, SinkRegistry};
use crate::types::{DispatchMode, ProjectRoot, WorkContext};
use std::sync::Arc;
use tracing::debug;

pub struct TaskPick {
    config: Config,
    resolver: ProjectResolver,
    catalog: TaskCatalog,
    runner: ExecutionRunner,
    registry: Arc<SinkRegistry>,
    selector: Arc<dyn Selector>,
}

impl TaskPick {
    pub fn with_config(
        config: Config,
        provider: Arc<dyn TaskProvider>,
        locator: Arc<dyn ProjectLocator>,
        spawner: Arc<dyn JobSpawner>,
        selector: Arc<dyn Selector>,
    ) -> Self {
        let registry = Arc::new(SinkRegistry::new());
        let runner = ExecutionRunner::new(spawner, registry.clone(), config.sink_prefix.clone());
        Self {
            resolver: ProjectResolver::new(locator),
            catalog: TaskCatalog::new(provider),
            runner,
            registry,
            selector,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Offer the project's tasks and dispatch the chosen one.
    ///
    /// Selection is served from the last-known catalog; only a cold cache
    /// waits on discovery. Returns `Ok(None)` when the picker is
    /// dismissed, when there is nothing to pick, or for the silent
    /// current-dir no-op.
    pub fn select_task(
        &self,
        ctx: &WorkContext,
        mode: DispatchMode,
    ) -> Result<Option<SinkHandle>> {
        let root = self.resolver.resolve(ctx)?;
        self.select_from_catalog(ctx, &root, mode)
    }

    /// Rediscover the project's tasks, then select and dispatch
    pub fn refresh_and_select(
        &self,
        ctx: &WorkContext,
        mode: DispatchMode,
    ) -> Result<Option<SinkHandle>> {
        let root = self.resolver.resolve(ctx)?;
        self.catalog.refresh(&root)?;
        self.select_from_catalog(ctx, &root, mode)
    }

    /// Replay the project's most recent dispatch verbatim
    pub fn rerun_last(&self, ctx: &WorkContext) -> Result<SinkHandle> {
        let root = self.resolver.resolve(ctx)?;
        self.runner.rerun(&root)
    }

    /// Live sinks in creation order; empty is a valid result
    pub fn sinks(&self) -> Vec<SinkHandle> {
        self.registry.list()
    }

    pub fn focus_sink(&self, name: &str) -> Result<SinkHandle> {
        self.registry.find(name)
    }

    pub fn kill_sink(&self, name: &str) -> Result<()> {
        self.runner.kill(name)
    }

    /// Kill every live sink, fail-fast; returns how many died
    pub fn kill_all_sinks(&self) -> Result<usize> {
        self.runner.kill_all()
    }

    /// Drop all state held for a project (catalog entry, last run)
    pub fn forget_project(&self, root: &ProjectRoot) {
        self.catalog.forget(root);
        self.runner.forget_project(root);
    }

    fn select_from_catalog(
        &self,
        ctx: &WorkContext,
        root: &ProjectRoot,
        mode: DispatchMode,
    ) -> Result<Option<SinkHandle>> {
        let tasks = self.catalog.get(root)?;
        let labels: Vec<String> = tasks.iter().map(|task| task.label.clone()).collect();

        let Some(index) = self.selector.choose("Run a task", &labels)? else {
            debug!("selection dismissed for {}", root);
            return Ok(None);
        };
        let Some(task) = tasks.get(index) else {
            debug!("selector answered with out-of-range index {}", index);
            return Ok(None);
        };

        let Some(request) = dispatch::resolve(ctx, root, task, mode, self.selector.as_ref())?
        else {
            return Ok(None);
        };
        self.runner.run(root, request).map(Some)
    }
}
