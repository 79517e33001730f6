//! taskpick - pick a project task and run it
//!
//! This crate provides the glue between an interactive task picker and a
//! task discovery library:
//! - Resolve the project for a working context
//! - Cache discovered tasks per project, in discovery order
//! - Turn a selection plus a dispatch mode into a concrete run request
//! - Spawn the run as a tracked background job with an addressable
//!   output sink, and replay the most recent run per project
pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod execution;
pub mod interfaces;
pub mod last_run;
pub mod resolver;
pub mod runner;
pub mod services;
pub mod shell;
pub mod sink;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use catalog::TaskCatalog;
pub use config::Config;
pub use interfaces::{JobHandle, JobSpawner, ProjectLocator, Selector, TaskProvider};
pub use runner::TaskPick;
pub use sink::{OutputBuffer, Sink, SinkHandle, SinkRegistry};
