use surescan::domain::DedupCache;
use surescan::error::{Error, Result};
use surescan::port::DedupStore;

/// Store whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingStore;

impl DedupStore for FailingStore {
    fn load(&self) -> DedupCache {
        DedupCache::new()
    }

    fn save(&self, _cache: &DedupCache) -> Result<()> {
        Err(Error::Store("disk full".into()))
    }
}
