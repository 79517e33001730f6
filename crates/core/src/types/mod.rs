//! Core value types shared across the crate

mod project;
mod request;
mod task;

pub use project::{ProjectRoot, WorkContext};
pub use request::{DispatchMode, ExecutionRequest, LastRunEntry};
pub use task::Task;
