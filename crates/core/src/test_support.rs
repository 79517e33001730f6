//! Shared fakes for unit tests

use crate::error::{Error, Result};
use crate::interfaces::{JobHandle, JobSpawner, ProjectLocator, Selector, TaskProvider};
use crate::sink::OutputBuffer;
use crate::types::{ExecutionRequest, ProjectRoot, Task};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct FakeJobState {
    running: AtomicBool,
    fail_kill: AtomicBool,
}

impl FakeJobState {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            running: AtomicBool::new(true),
            fail_kill: AtomicBool::new(false),
        })
    }
}

pub struct FakeJob(Arc<FakeJobState>);

impl FakeJob {
    pub fn running() -> Self {
        Self(FakeJobState::new())
    }
}

impl JobHandle for FakeJob {
    fn is_running(&self) -> bool {
        self.0.running.load(Ordering::SeqCst)
    }

    fn kill(&self) -> Result<()> {
        if self.0.fail_kill.load(Ordering::SeqCst) {
            return Err(Error::Other("kill refused".to_string()));
        }
        self.0.running.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// Spawner that records requests and hands out controllable jobs
#[derive(Default)]
pub struct FakeSpawner {
    spawned: Mutex<Vec<(ExecutionRequest, Arc<FakeJobState>)>>,
    next_error: Mutex<Option<String>>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawned(&self) -> Vec<ExecutionRequest> {
        self.spawned
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub fn fail_next_spawn(&self, message: &str) {
        *self.next_error.lock().unwrap() = Some(message.to_string());
    }

    /// Mark every spawned job as finished
    pub fn finish_all(&self) {
        for (_, state) in self.spawned.lock().unwrap().iter() {
            state.running.store(false, Ordering::SeqCst);
        }
    }

    /// Make killing the job of the named task fail
    pub fn fail_kill_of(&self, task_id: &str) {
        for (request, state) in self.spawned.lock().unwrap().iter() {
            if request.task_id == task_id {
                state.fail_kill.store(true, Ordering::SeqCst);
            }
        }
    }
}

impl JobSpawner for FakeSpawner {
    fn spawn(
        &self,
        request: &ExecutionRequest,
        output: Arc<OutputBuffer>,
    ) -> Result<Box<dyn JobHandle>> {
        if let Some(message) = self.next_error.lock().unwrap().take() {
            return Err(Error::Spawn(message));
        }
        output.push(format!("$ {}", request.command_line()));
        let state = FakeJobState::new();
        self.spawned
            .lock()
            .unwrap()
            .push((request.clone(), state.clone()));
        Ok(Box::new(FakeJob(state)))
    }
}

/// Provider returning a fixed task list
pub struct StaticProvider {
    tasks: Vec<Task>,
}

impl StaticProvider {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl TaskProvider for StaticProvider {
    fn discover(&self, _root: &ProjectRoot) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }
}

/// Locator with canned answers for both resolution and the interactive flow
#[derive(Default)]
pub struct StaticLocator {
    pub root: Option<ProjectRoot>,
    pub picked: Option<ProjectRoot>,
}

impl StaticLocator {
    pub fn rooted(root: impl Into<std::path::PathBuf>) -> Self {
        Self {
            root: Some(ProjectRoot::new(root)),
            picked: None,
        }
    }
}

impl ProjectLocator for StaticLocator {
    fn locate(&self, _anchor: &Path) -> Option<ProjectRoot> {
        self.root.clone()
    }

    fn select_project(&self) -> Result<Option<ProjectRoot>> {
        Ok(self.picked.clone())
    }
}

/// Selector replaying a scripted choice and scripted prompt input
#[derive(Default)]
pub struct ScriptedSelector {
    choice: Mutex<Option<usize>>,
    args: Mutex<Option<String>>,
    offered: Mutex<Vec<Vec<String>>>,
}

impl ScriptedSelector {
    pub fn with_choice(self, index: usize) -> Self {
        *self.choice.lock().unwrap() = Some(index);
        self
    }

    pub fn with_args(self, args: &str) -> Self {
        *self.args.lock().unwrap() = Some(args.to_string());
        self
    }

    /// Candidate lists this selector has been shown
    pub fn offered(&self) -> Vec<Vec<String>> {
        self.offered.lock().unwrap().clone()
    }
}

impl Selector for ScriptedSelector {
    fn choose(&self, _title: &str, labels: &[String]) -> Result<Option<usize>> {
        self.offered.lock().unwrap().push(labels.to_vec());
        if labels.is_empty() {
            return Ok(None);
        }
        Ok(*self.choice.lock().unwrap())
    }

    fn prompt_args(&self, _label: &str) -> Result<Option<String>> {
        Ok(self.args.lock().unwrap().clone())
    }
}
