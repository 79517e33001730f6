use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a selected task should be dispatched: where it runs and whether
/// extra arguments are collected first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchMode {
    /// Run at the project root with no extra arguments
    RootNoArgs,
    /// Run at the project root, prompting for extra arguments
    RootPromptArgs,
    /// Run in the directory of the context's backing file, no arguments
    CurrentDirNoArgs,
    /// Run in the directory of the context's backing file, prompting
    CurrentDirPromptArgs,
}

impl DispatchMode {
    pub fn at_root(&self) -> bool {
        matches!(self, Self::RootNoArgs | Self::RootPromptArgs)
    }

    pub fn prompts_for_args(&self) -> bool {
        matches!(self, Self::RootPromptArgs | Self::CurrentDirPromptArgs)
    }
}

/// A fully resolved request to run one task once.
///
/// Built by the dispatcher, consumed by the execution runner; the only
/// place one outlives the dispatch is the last-run register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub task_id: String,
    /// Command template taken from the task at dispatch time
    pub command: String,
    /// Directory the command runs in
    pub directory: PathBuf,
    /// Extra arguments appended to the command
    pub args: Vec<String>,
}

impl ExecutionRequest {
    /// Render the command line for display and logging, quoting arguments
    /// that contain spaces. Execution hands args to the process verbatim
    /// and never re-parses this string.
    pub fn command_line(&self) -> String {
        let mut cmd = self.command.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }
}

/// The most recent dispatch for one project, kept for replay.
///
/// A single slot: every successful dispatch overwrites it, nothing
/// appends to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastRunEntry {
    pub request: ExecutionRequest,
    pub command_line: String,
}
