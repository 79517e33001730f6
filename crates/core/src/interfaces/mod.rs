//! Trait interfaces for the external collaborators
//!
//! Everything taskpick does not own — task discovery, process execution,
//! project identification, the interactive picker — enters through one of
//! these traits. Concrete implementations are injected at construction
//! time; defaults live in `crate::services`.

pub mod job_spawner;
pub mod project_locator;
pub mod selector;
pub mod task_provider;

pub use job_spawner::{JobHandle, JobSpawner};
pub use project_locator::ProjectLocator;
pub use selector::Selector;
pub use task_provider::TaskProvider;
