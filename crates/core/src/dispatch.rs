//! Selection dispatch
//!
//! Turns a chosen task plus a dispatch mode into a fully resolved
//! [`ExecutionRequest`]. No validation of the command template happens
//! here; a malformed command is the execution runner's problem.

use crate::error::Result;
use crate::interfaces::Selector;
use crate::shell;
use crate::types::{DispatchMode, ExecutionRequest, ProjectRoot, Task, WorkContext};
use std::path::PathBuf;
use tracing::debug;

/// Resolve the final request for one dispatch.
///
/// Returns `Ok(None)` for the one silent no-op case: a current-directory
/// mode invoked from a context with no backing file. That is policy, not
/// an error.
pub fn resolve(
    ctx: &WorkContext,
    root: &ProjectRoot,
    task: &Task,
    mode: DispatchMode,
    selector: &dyn Selector,
) -> Result<Option<ExecutionRequest>> {
    let directory = match resolve_directory(ctx, root, task, mode) {
        Some(dir) => dir,
        None => {
            debug!("current-dir dispatch of '{}' with no backing file, skipping", task.id);
            return Ok(None);
        }
    };

    let args = if mode.prompts_for_args() {
        match selector.prompt_args(&task.label)? {
            Some(input) => shell::split(&input),
            // A dismissed prompt means no extra args, not an abort.
            None => Vec::new(),
        }
    } else {
        Vec::new()
    };

    Ok(Some(ExecutionRequest {
        task_id: task.id.clone(),
        command: task.command.clone(),
        directory,
        args,
    }))
}

fn resolve_directory(
    ctx: &WorkContext,
    root: &ProjectRoot,
    task: &Task,
    mode: DispatchMode,
) -> Option<PathBuf> {
    if mode.at_root() {
        let dir = match &task.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => root.as_path().join(dir),
            None => root.as_path().to_path_buf(),
        };
        return Some(dir);
    }

    ctx.file
        .as_deref()
        .and_then(|file| file.parent())
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(|parent| parent.to_path_buf())
}
