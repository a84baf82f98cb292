//! Durable storage port for the dedup cache.

use std::sync::Mutex;

use crate::domain::DedupCache;
use crate::error::Result;

/// Key-value persistence for alerted signatures.
///
/// `load` is read once at startup and never fails: a missing or unreadable
/// store yields an empty cache. `save` writes the whole map.
pub trait DedupStore: Send + Sync {
    fn load(&self) -> DedupCache;

    fn save(&self, cache: &DedupCache) -> Result<()>;
}

/// In-process store, used by tests and one-off runs.
#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<Option<DedupCache>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing cache.
    #[must_use]
    pub fn with_cache(cache: DedupCache) -> Self {
        Self {
            saved: Mutex::new(Some(cache)),
        }
    }

    /// Cache from the last `save`, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<DedupCache> {
        match self.saved.lock() {
            Ok(saved) => saved.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DedupStore for MemoryStore {
    fn load(&self) -> DedupCache {
        self.snapshot().unwrap_or_default()
    }

    fn save(&self, cache: &DedupCache) -> Result<()> {
        match self.saved.lock() {
            Ok(mut saved) => *saved = Some(cache.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(cache.clone()),
        }
        Ok(())
    }
}
