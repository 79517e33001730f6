//! Per-project task catalog
//!
//! Caches the task list reported by the discovery provider, one entry per
//! project root. Reads are served from the cache; only a cold cache or an
//! explicit refresh goes back to the provider.

use crate::error::Result;
use crate::interfaces::TaskProvider;
use crate::types::{ProjectRoot, Task};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

#[derive(Default)]
struct ProjectEntry {
    tasks: Option<Vec<Task>>,
    /// Bumped by every refresh. A discovery result is written back only
    /// if the generation it started under is still current, so a newer
    /// refresh supersedes an outstanding one instead of queuing behind it.
    generation: u64,
}

pub struct TaskCatalog {
    provider: Arc<dyn TaskProvider>,
    state: Mutex<HashMap<ProjectRoot, ProjectEntry>>,
}

impl TaskCatalog {
    pub fn new(provider: Arc<dyn TaskProvider>) -> Self {
        Self {
            provider,
            state: Mutex::new(HashMap::new()),
        }
    }

    /// The project's tasks, in discovery order.
    ///
    /// Served from the cache when populated; a cold cache triggers a
    /// blocking discovery round-trip.
    pub fn get(&self, root: &ProjectRoot) -> Result<Vec<Task>> {
        let generation = {
            let mut state = self.state.lock().unwrap();
            let entry = state.entry(root.clone()).or_default();
            if let Some(tasks) = &entry.tasks {
                debug!("serving {} cached tasks for {}", tasks.len(), root);
                return Ok(tasks.clone());
            }
            entry.generation
        };

        debug!("cold catalog for {}, discovering", root);
        self.discover_into(root, generation)
    }

    /// Tasks currently cached for the project, without triggering discovery
    pub fn cached(&self, root: &ProjectRoot) -> Option<Vec<Task>> {
        let state = self.state.lock().unwrap();
        state.get(root).and_then(|entry| entry.tasks.clone())
    }

    /// Invalidate and rediscover the project's tasks.
    ///
    /// Safe to call while an earlier discovery for the same project is
    /// still outstanding; the stale result is discarded when it lands.
    /// On a discovery failure the previously cached set is kept.
    pub fn refresh(&self, root: &ProjectRoot) -> Result<()> {
        let generation = {
            let mut state = self.state.lock().unwrap();
            let entry = state.entry(root.clone()).or_default();
            entry.generation += 1;
            entry.generation
        };

        debug!("refreshing catalog for {} (generation {})", root, generation);
        self.discover_into(root, generation)?;
        Ok(())
    }

    /// Drop the project's cache entry entirely (project closed)
    pub fn forget(&self, root: &ProjectRoot) {
        self.state.lock().unwrap().remove(root);
    }

    fn discover_into(&self, root: &ProjectRoot, generation: u64) -> Result<Vec<Task>> {
        // Discovery runs outside the lock; it may take a while.
        let tasks = self.provider.discover(root)?;

        let mut state = self.state.lock().unwrap();
        let entry = state.entry(root.clone()).or_default();
        if entry.generation == generation {
            entry.tasks = Some(tasks.clone());
        } else {
            debug!(
                "discarding superseded discovery for {} (generation {} < {})",
                root, generation, entry.generation
            );
        }
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    struct CountingProvider {
        tasks: Vec<Task>,
        calls: AtomicUsize,
    }

    impl CountingProvider {
        fn new(tasks: Vec<Task>) -> Self {
            Self {
                tasks,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TaskProvider for CountingProvider {
        fn discover(&self, _root: &ProjectRoot) -> Result<Vec<Task>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.tasks.clone())
        }
    }

    fn tasks(ids: &[&str]) -> Vec<Task> {
        ids.iter().map(|id| Task::new(*id, format!("make {id}"))).collect()
    }

    #[test]
    fn cold_get_discovers_and_caches() {
        let provider = Arc::new(CountingProvider::new(tasks(&["build", "test"])));
        let catalog = TaskCatalog::new(provider.clone());
        let root = ProjectRoot::new("/repo");

        let first = catalog.get(&root).unwrap();
        let second = catalog.get(&root).unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn discovery_order_is_preserved() {
        // Not sorted: providers group tasks by originating build tool.
        let provider = Arc::new(CountingProvider::new(tasks(&["zeta", "alpha", "mid"])));
        let catalog = TaskCatalog::new(provider);
        let root = ProjectRoot::new("/repo");

        let ids: Vec<_> = catalog.get(&root).unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn refresh_replaces_the_cached_set() {
        struct Switching {
            calls: AtomicUsize,
        }
        impl TaskProvider for Switching {
            fn discover(&self, _root: &ProjectRoot) -> Result<Vec<Task>> {
                let n = self.calls.fetch_add(1, Ordering::SeqCst);
                if n == 0 {
                    Ok(tasks(&["old"]))
                } else {
                    Ok(tasks(&["new"]))
                }
            }
        }

        let catalog = TaskCatalog::new(Arc::new(Switching {
            calls: AtomicUsize::new(0),
        }));
        let root = ProjectRoot::new("/repo");

        assert_eq!(catalog.get(&root).unwrap()[0].id, "old");
        catalog.refresh(&root).unwrap();
        assert_eq!(catalog.get(&root).unwrap()[0].id, "new");
    }

    #[test]
    fn failed_refresh_keeps_the_stale_set() {
        struct FailAfterFirst {
            calls: AtomicUsize,
        }
        impl TaskProvider for FailAfterFirst {
            fn discover(&self, _root: &ProjectRoot) -> Result<Vec<Task>> {
                if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(tasks(&["build"]))
                } else {
                    Err(Error::Discovery("provider exploded".to_string()))
                }
            }
        }

        let catalog = TaskCatalog::new(Arc::new(FailAfterFirst {
            calls: AtomicUsize::new(0),
        }));
        let root = ProjectRoot::new("/repo");

        catalog.get(&root).unwrap();
        assert!(catalog.refresh(&root).is_err());
        // Stale-but-valid beats empty.
        assert_eq!(catalog.get(&root).unwrap()[0].id, "build");
    }

    #[test]
    fn newer_refresh_supersedes_an_outstanding_one() {
        struct Gated {
            calls: AtomicUsize,
            entered: mpsc::Sender<()>,
            release: Mutex<Option<mpsc::Receiver<()>>>,
        }
        impl TaskProvider for Gated {
            fn discover(&self, _root: &ProjectRoot) -> Result<Vec<Task>> {
                if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    // First discovery parks until the test releases it.
                    let release = self.release.lock().unwrap().take().unwrap();
                    self.entered.send(()).unwrap();
                    release.recv().unwrap();
                    Ok(tasks(&["stale"]))
                } else {
                    Ok(tasks(&["fresh"]))
                }
            }
        }

        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let catalog = Arc::new(TaskCatalog::new(Arc::new(Gated {
            calls: AtomicUsize::new(0),
            entered: entered_tx,
            release: Mutex::new(Some(release_rx)),
        })));
        let root = ProjectRoot::new("/repo");

        let first = {
            let catalog = catalog.clone();
            let root = root.clone();
            std::thread::spawn(move || catalog.refresh(&root))
        };

        // Wait until the first discovery is in flight, then supersede it.
        entered_rx.recv().unwrap();
        catalog.refresh(&root).unwrap();
        assert_eq!(catalog.cached(&root).unwrap()[0].id, "fresh");

        release_tx.send(()).unwrap();
        first.join().unwrap().unwrap();

        // The stale result landed after the newer one and was discarded.
        assert_eq!(catalog.cached(&root).unwrap()[0].id, "fresh");
    }

    #[test]
    fn forget_drops_the_entry() {
        let provider = Arc::new(CountingProvider::new(tasks(&["build"])));
        let catalog = TaskCatalog::new(provider.clone());
        let root = ProjectRoot::new("/repo");

        catalog.get(&root).unwrap();
        catalog.forget(&root);
        assert!(catalog.cached(&root).is_none());

        catalog.get(&root).unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
