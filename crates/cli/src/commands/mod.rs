//! CLI command implementations

mod rerun;
mod select;
mod sinks;

pub use rerun::rerun_command;
pub use select::select_command;
pub use sinks::{sinks_command, SinksAction};

use crate::selector::TerminalSelector;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use taskpick_core::services::{ManifestProvider, MarkerLocator, ProcessSpawner};
use taskpick_core::{Config, DispatchMode, SinkHandle, TaskPick, WorkContext};

/// Wire up the application root with the bundled services
pub(crate) fn build_app() -> Result<TaskPick> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = Config::load(&cwd)?;
    let provider = Arc::new(ManifestProvider::new(config.manifest_name.clone()));
    let locator = Arc::new(MarkerLocator::new());
    let spawner = Arc::new(ProcessSpawner::new());
    let selector = Arc::new(TerminalSelector::new());
    Ok(TaskPick::with_config(
        config, provider, locator, spawner, selector,
    ))
}

pub(crate) fn work_context(file: Option<&str>) -> Result<WorkContext> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let mut ctx = WorkContext::new(cwd.clone());
    if let Some(file) = file {
        let path = std::path::Path::new(file);
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        };
        ctx = ctx.with_file(absolute);
    }
    Ok(ctx)
}

pub(crate) fn dispatch_mode(default: DispatchMode, here: bool, prompt_args: bool) -> DispatchMode {
    match (here, prompt_args) {
        (false, false) => default,
        (false, true) => DispatchMode::RootPromptArgs,
        (true, false) => DispatchMode::CurrentDirNoArgs,
        (true, true) => DispatchMode::CurrentDirPromptArgs,
    }
}

/// Stream the sink's output to stdout until its job finishes
pub(crate) fn attach(sink: &SinkHandle) {
    let mut printed = 0;
    loop {
        let running = sink.is_running();
        let lines = sink.output().lines();
        for line in &lines[printed..] {
            println!("{line}");
        }
        printed = lines.len();
        if !running {
            break;
        }
        thread::sleep(Duration::from_millis(50));
    }

    // The pump threads can trail the job by a beat; drain once more.
    thread::sleep(Duration::from_millis(100));
    for line in &sink.output().lines()[printed..] {
        println!("{line}");
    }
}
