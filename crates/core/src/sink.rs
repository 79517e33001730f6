//! Output sinks and the sink registry
//!
//! Every spawned task streams its output into a named sink. Sinks are
//! owned by the execution runner that created them; the registry keeps
//! weak references only, for enumeration and lookup.

use crate::error::{Error, Result};
use crate::interfaces::JobHandle;
use crate::types::ProjectRoot;
use std::sync::{Arc, Mutex, Weak};

/// Line-buffered output collected from a running job.
///
/// Shared between the spawner's pump thread and readers.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    lines: Mutex<Vec<String>>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named, addressable output sink bound to one background job
pub struct Sink {
    name: String,
    project: ProjectRoot,
    task_id: String,
    output: Arc<OutputBuffer>,
    job: Box<dyn JobHandle>,
}

/// Shared reference to a live sink
pub type SinkHandle = Arc<Sink>;

impl Sink {
    pub fn new(
        name: String,
        project: ProjectRoot,
        task_id: String,
        output: Arc<OutputBuffer>,
        job: Box<dyn JobHandle>,
    ) -> Self {
        Self {
            name,
            project,
            task_id,
            output,
            job,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn project(&self) -> &ProjectRoot {
        &self.project
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    pub fn is_running(&self) -> bool {
        self.job.is_running()
    }

    pub fn kill(&self) -> Result<()> {
        self.job.kill()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("name", &self.name)
            .field("project", &self.project)
            .field("task_id", &self.task_id)
            .finish()
    }
}

/// Tracks all live sinks, in creation order, without owning them.
///
/// Entries whose sink has been dropped by its owner are pruned on
/// enumeration.
#[derive(Debug, Default)]
pub struct SinkRegistry {
    entries: Mutex<Vec<Weak<Sink>>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, sink: &SinkHandle) {
        self.entries.lock().unwrap().push(Arc::downgrade(sink));
    }

    /// All live sinks in creation order. An empty result is not an error.
    pub fn list(&self) -> Vec<SinkHandle> {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|weak| weak.strong_count() > 0);
        entries.iter().filter_map(Weak::upgrade).collect()
    }

    pub fn get(&self, name: &str) -> Option<SinkHandle> {
        self.list().into_iter().find(|sink| sink.name() == name)
    }

    /// Lookup that surfaces a missing sink as an error
    pub fn find(&self, name: &str) -> Result<SinkHandle> {
        self.get(name)
            .ok_or_else(|| Error::SinkNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
