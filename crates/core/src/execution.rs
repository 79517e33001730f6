//! Execution runner
//!
//! Spawns resolved requests as tracked background jobs, owns the sinks
//! they stream into, and records each successful dispatch in the
//! last-run register.

use crate::error::{Error, Result};
use crate::interfaces::JobSpawner;
use crate::last_run::LastRunRegister;
use crate::sink::{OutputBuffer, Sink, SinkHandle, SinkRegistry};
use crate::types::{ExecutionRequest, LastRunEntry, ProjectRoot};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

pub struct ExecutionRunner {
    spawner: Arc<dyn JobSpawner>,
    registry: Arc<SinkRegistry>,
    last_runs: LastRunRegister,
    /// Strong references; the registry only holds weak ones
    sinks: Mutex<Vec<SinkHandle>>,
    sink_prefix: String,
}

impl ExecutionRunner {
    pub fn new(
        spawner: Arc<dyn JobSpawner>,
        registry: Arc<SinkRegistry>,
        sink_prefix: impl Into<String>,
    ) -> Self {
        Self {
            spawner,
            registry,
            last_runs: LastRunRegister::new(),
            sinks: Mutex::new(Vec::new()),
            sink_prefix: sink_prefix.into(),
        }
    }

    /// Run the request as a background job and return its sink.
    ///
    /// Sink names are scoped to (project, task). Dispatching a task whose
    /// sink is still running reuses that sink instead of spawning a
    /// second job; the last-run entry is still overwritten. The last-run
    /// entry is written only after a sink exists, so a spawn failure
    /// leaves the register untouched.
    pub fn run(&self, project: &ProjectRoot, request: ExecutionRequest) -> Result<SinkHandle> {
        let name = self.sink_name(project, &request.task_id);
        let command_line = request.command_line();

        if let Some(existing) = self.registry.get(&name) {
            if existing.is_running() {
                debug!("'{}' is still running, reusing sink {}", request.task_id, name);
                self.last_runs.record(
                    project,
                    LastRunEntry {
                        request,
                        command_line,
                    },
                );
                return Ok(existing);
            }
            // Same name, finished job: the sink gets replaced.
            self.release(&name);
        }

        info!("running '{}' in {}", command_line, request.directory.display());
        let output = Arc::new(OutputBuffer::new());
        let job = self.spawner.spawn(&request, output.clone())?;

        let sink = Arc::new(Sink::new(
            name,
            project.clone(),
            request.task_id.clone(),
            output,
            job,
        ));
        self.sinks.lock().unwrap().push(sink.clone());
        self.registry.register(&sink);
        self.last_runs.record(
            project,
            LastRunEntry {
                request,
                command_line,
            },
        );
        Ok(sink)
    }

    /// Replay the project's last dispatch verbatim: same directory, same
    /// args, no re-prompting.
    pub fn rerun(&self, project: &ProjectRoot) -> Result<SinkHandle> {
        let entry = self
            .last_runs
            .get(project)
            .ok_or_else(|| Error::NoPriorRun(project.name()))?;
        debug!("rerunning '{}' for {}", entry.command_line, project);
        self.run(project, entry.request)
    }

    pub fn last_run(&self, project: &ProjectRoot) -> Option<LastRunEntry> {
        self.last_runs.get(project)
    }

    /// Terminate one sink's job and drop the sink
    pub fn kill(&self, name: &str) -> Result<()> {
        let sink = self.registry.find(name)?;
        sink.kill()?;
        self.release(name);
        Ok(())
    }

    /// Terminate every live sink, in creation order, fail-fast.
    ///
    /// Zero sinks is a no-op. On a kill failure the failing sink and all
    /// later ones are left untouched and the error is reported; sinks
    /// already killed stay killed.
    pub fn kill_all(&self) -> Result<usize> {
        let mut killed = 0;
        for sink in self.registry.list() {
            sink.kill()?;
            self.release(sink.name());
            killed += 1;
        }
        Ok(killed)
    }

    pub fn forget_project(&self, project: &ProjectRoot) {
        self.last_runs.forget(project);
    }

    fn release(&self, name: &str) {
        self.sinks.lock().unwrap().retain(|sink| sink.name() != name);
    }

    fn sink_name(&self, project: &ProjectRoot, task_id: &str) -> String {
        // Full root path, not the dirname: distinct projects can share a
        // final path component.
        format!("{}{}::{}", self.sink_prefix, project, task_id)
    }
}
