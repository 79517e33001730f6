//! Process-backed job spawner
//!
//! Runs task commands as child processes with piped output. A pump
//! thread per stream feeds the sink's line buffer, so spawning returns
//! immediately and output arrives out-of-band.

use crate::error::{Error, Result};
use crate::interfaces::{JobHandle, JobSpawner};
use crate::shell;
use crate::sink::OutputBuffer;
use crate::types::ExecutionRequest;
use std::io::{BufRead, BufReader, Read};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{debug, warn};

pub struct ProcessSpawner;

impl ProcessSpawner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessSpawner {
    fn default() -> Self {
        Self::new()
    }
}

struct ProcessJob {
    child: Mutex<Child>,
}

impl JobHandle for ProcessJob {
    fn is_running(&self) -> bool {
        // try_wait reaps the child if it has exited
        match self.child.lock().unwrap().try_wait() {
            Ok(None) => true,
            Ok(Some(_)) => false,
            Err(e) => {
                warn!("try_wait failed: {}", e);
                false
            }
        }
    }

    fn kill(&self) -> Result<()> {
        let mut child = self.child.lock().unwrap();
        match child.try_wait() {
            // Already exited, nothing to kill.
            Ok(Some(_)) => Ok(()),
            _ => {
                child.kill()?;
                child.wait()?;
                Ok(())
            }
        }
    }
}

fn pump(stream: impl Read + Send + 'static, output: Arc<OutputBuffer>) {
    thread::spawn(move || {
        let reader = BufReader::new(stream);
        for line in reader.lines() {
            match line {
                Ok(line) => output.push(line),
                Err(_) => break,
            }
        }
    });
}

impl JobSpawner for ProcessSpawner {
    fn spawn(
        &self,
        request: &ExecutionRequest,
        output: Arc<OutputBuffer>,
    ) -> Result<Box<dyn JobHandle>> {
        // Only the template is tokenized; extra args are passed through
        // verbatim, so quote characters inside them survive.
        let mut args = shell::split(&request.command);
        if args.is_empty() {
            return Err(Error::Spawn(format!("empty command for '{}'", request.task_id)));
        }
        let program = args.remove(0);
        args.extend(request.args.iter().cloned());

        let command_line = request.command_line();
        debug!(
            "spawning '{}' in {}",
            command_line,
            request.directory.display()
        );
        let mut child = Command::new(&program)
            .args(&args)
            .current_dir(&request.directory)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Spawn(format!("'{}': {}", command_line, e)))?;

        if let Some(stdout) = child.stdout.take() {
            pump(stdout, output.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            pump(stderr, output);
        }

        Ok(Box::new(ProcessJob {
            child: Mutex::new(child),
        }))
    }
}
