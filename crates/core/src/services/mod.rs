//! Default implementations of the collaborator interfaces
//!
//! These are the batteries included with the crate: a marker-based
//! project locator, a manifest-file task provider, and a process-backed
//! job spawner. Real integrations (an editor's project machinery, a full
//! build-tool discovery library) replace them through the traits in
//! `crate::interfaces`.

pub mod manifest_provider;
pub mod marker_locator;
pub mod process_spawner;

pub use manifest_provider::ManifestProvider;
pub use marker_locator::MarkerLocator;
pub use process_spawner::ProcessSpawner;
