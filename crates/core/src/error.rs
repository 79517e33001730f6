use std::io;

/// Errors that can occur during taskpick operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No project found for the current context")]
    NoProject,

    #[error("Nothing has been run yet in project '{0}'")]
    NoPriorRun(String),

    #[error("Task discovery failed: {0}")]
    Discovery(String),

    #[error("Failed to spawn task: {0}")]
    Spawn(String),

    #[error("No sink named '{0}'")]
    SinkNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for taskpick operations
pub type Result<T> = std::result::Result<T, Error>;
