//! Job execution interface

use crate::error::Result;
use crate::sink::OutputBuffer;
use crate::types::ExecutionRequest;
use std::sync::Arc;

/// Handle to a background job started by a [`JobSpawner`]
pub trait JobHandle: Send + Sync {
    /// Whether the job is still running
    fn is_running(&self) -> bool;

    /// Terminate the job. Not a graceful stop signal; kill is the only
    /// cancellation primitive.
    fn kill(&self) -> Result<()>;
}

/// Trait for spawning task commands as tracked background jobs
pub trait JobSpawner: Send + Sync {
    /// Spawn the request's command in its directory, streaming output
    /// into `output`. Returns immediately with a handle; the job runs
    /// out-of-band.
    fn spawn(
        &self,
        request: &ExecutionRequest,
        output: Arc<OutputBuffer>,
    ) -> Result<Box<dyn JobHandle>>;
}
