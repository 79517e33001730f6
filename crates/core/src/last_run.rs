//! Last-run register
//!
//! One mutable slot per project root holding the most recent dispatch.
//! Every successful dispatch overwrites the slot; nothing ever appends.
//! Concurrent dispatches to the same project race last-writer-wins, which
//! only affects future reruns.

use crate::types::{LastRunEntry, ProjectRoot};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct LastRunRegister {
    slots: Mutex<HashMap<ProjectRoot, LastRunEntry>>,
}

impl LastRunRegister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, root: &ProjectRoot, entry: LastRunEntry) {
        self.slots.lock().unwrap().insert(root.clone(), entry);
    }

    pub fn get(&self, root: &ProjectRoot) -> Option<LastRunEntry> {
        self.slots.lock().unwrap().get(root).cloned()
    }

    pub fn forget(&self, root: &ProjectRoot) {
        self.slots.lock().unwrap().remove(root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExecutionRequest;
    use std::path::PathBuf;

    fn entry(task_id: &str) -> LastRunEntry {
        let request = ExecutionRequest {
            task_id: task_id.to_string(),
            command: format!("make {task_id}"),
            directory: PathBuf::from("/repo"),
            args: vec![],
        };
        let command_line = request.command_line();
        LastRunEntry {
            request,
            command_line,
        }
    }

    #[test]
    fn empty_register_has_no_entry() {
        let register = LastRunRegister::new();
        assert!(register.get(&ProjectRoot::new("/repo")).is_none());
    }

    #[test]
    fn record_overwrites_the_single_slot() {
        let register = LastRunRegister::new();
        let root = ProjectRoot::new("/repo");

        register.record(&root, entry("build"));
        register.record(&root, entry("test"));
        assert_eq!(register.get(&root).unwrap().request.task_id, "test");
    }

    #[test]
    fn slots_are_keyed_by_project() {
        let register = LastRunRegister::new();
        let a = ProjectRoot::new("/a");
        let b = ProjectRoot::new("/b");

        register.record(&a, entry("build"));
        register.record(&b, entry("test"));
        assert_eq!(register.get(&a).unwrap().request.task_id, "build");
        assert_eq!(register.get(&b).unwrap().request.task_id, "test");
    }

    #[test]
    fn forget_clears_the_slot() {
        let register = LastRunRegister::new();
        let root = ProjectRoot::new("/repo");

        register.record(&root, entry("build"));
        register.forget(&root);
        assert!(register.get(&root).is_none());
    }
}
