//! JSON file store: `{ "<signature>": <unix seconds>, ... }`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{DedupCache, OpportunitySignature, Timestamp};
use crate::error::{Error, Result};
use crate::port::DedupStore;

/// Persists the dedup cache as a flat JSON object.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous cache intact.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl DedupStore for JsonFileStore {
    fn load(&self) -> DedupCache {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No dedup cache, starting empty");
                return DedupCache::new();
            }
        };

        match serde_json::from_str::<HashMap<OpportunitySignature, Timestamp>>(&content) {
            Ok(entries) => DedupCache::from(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt dedup cache, starting empty");
                DedupCache::new()
            }
        }
    }

    fn save(&self, cache: &DedupCache) -> Result<()> {
        let entries: HashMap<&OpportunitySignature, &Timestamp> = cache.iter().collect();
        let json = serde_json::to_string(&entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, json)?;
        fs::rename(&temp, &self.path)
            .map_err(|e| Error::Store(format!("{}: {e}", self.path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("sent_cache.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sent_cache.json");
        fs::write(&path, "{not json").unwrap();
        assert!(JsonFileStore::new(&path).load().is_empty());
    }

    #[test]
    fn save_then_load_preserves_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("cache.json"));

        let mut cache = DedupCache::new();
        cache.record(OpportunitySignature::from("a|(K, X, 150)|(M, Y, -120)|roi=0.0545"), 1_700_000_000.5);
        cache.record(OpportunitySignature::from("b"), 1_700_000_100.0);
        store.save(&cache).unwrap();

        assert_eq!(store.load(), cache);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn reads_plain_signature_to_float_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, r#"{"E|(K, X, 150)|(M, Y, -120)|roi=0.0545": 1700000000.25}"#).unwrap();

        let cache = JsonFileStore::new(&path).load();

        assert_eq!(
            cache.alerted_at(&OpportunitySignature::from("E|(K, X, 150)|(M, Y, -120)|roi=0.0545")),
            Some(1_700_000_000.25)
        );
    }
}
