//! Interactive selection interface
//!
//! The fuzzy-finder (or any other picker UI) sits behind this trait. The
//! contract is minimal: show labeled candidates, report the chosen index.

use crate::error::Result;

/// Trait for interactive choice among labeled candidates
pub trait Selector: Send + Sync {
    /// Present `labels` in order and return the index the user chose.
    ///
    /// An empty candidate list is a valid input and is answered with
    /// `Ok(None)`, as is the user dismissing the picker.
    fn choose(&self, title: &str, labels: &[String]) -> Result<Option<usize>>;

    /// Collect extra command arguments for the labeled task.
    ///
    /// `Ok(None)` means the prompt was dismissed.
    fn prompt_args(&self, label: &str) -> Result<Option<String>>;
}
