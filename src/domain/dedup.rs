//! Time-windowed cache of alerted opportunity signatures.

use std::collections::HashMap;
use std::time::Duration;

use super::money::Timestamp;
use super::signature::OpportunitySignature;

/// Signature -> time of the last alert.
///
/// Owned by the scan cycle. Expiry is lazy: entries linger until
/// [`DedupCache::purge_expired`] runs at the start of a cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DedupCache {
    entries: HashMap<OpportunitySignature, Timestamp>,
}

impl DedupCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the signature was alerted within the current window.
    #[must_use]
    pub fn is_duplicate(&self, signature: &OpportunitySignature) -> bool {
        self.entries.contains_key(signature)
    }

    /// Drop entries with `now - timestamp >= cooldown`. Returns how many
    /// were removed.
    pub fn purge_expired(&mut self, now: Timestamp, cooldown: Duration) -> usize {
        let window = cooldown.as_secs_f64();
        let before = self.entries.len();
        self.entries.retain(|_, alerted_at| now - *alerted_at < window);
        before - self.entries.len()
    }

    /// Insert or refresh a signature's alert time.
    pub fn record(&mut self, signature: OpportunitySignature, now: Timestamp) {
        self.entries.insert(signature, now);
    }

    /// Last alert time for a signature.
    #[must_use]
    pub fn alerted_at(&self, signature: &OpportunitySignature) -> Option<Timestamp> {
        self.entries.get(signature).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OpportunitySignature, &Timestamp)> {
        self.entries.iter()
    }
}

impl From<HashMap<OpportunitySignature, Timestamp>> for DedupCache {
    fn from(entries: HashMap<OpportunitySignature, Timestamp>) -> Self {
        Self { entries }
    }
}

impl From<DedupCache> for HashMap<OpportunitySignature, Timestamp> {
    fn from(cache: DedupCache) -> Self {
        cache.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_secs(120 * 60);
    const T0: Timestamp = 1_700_000_000.0;

    fn sig(raw: &str) -> OpportunitySignature {
        OpportunitySignature::from(raw)
    }

    #[test]
    fn suppressed_inside_window_and_alertable_after() {
        let mut cache = DedupCache::new();
        cache.record(sig("s"), T0);

        for t in [T0, T0 + 1.0, T0 + WINDOW.as_secs_f64() - 0.001] {
            let mut c = cache.clone();
            assert_eq!(c.purge_expired(t, WINDOW), 0);
            assert!(c.is_duplicate(&sig("s")), "t = {t}");
        }

        for t in [T0 + WINDOW.as_secs_f64(), T0 + WINDOW.as_secs_f64() + 5.0] {
            let mut c = cache.clone();
            assert_eq!(c.purge_expired(t, WINDOW), 1);
            assert!(!c.is_duplicate(&sig("s")), "t = {t}");
        }
    }

    #[test]
    fn purge_only_removes_expired_entries() {
        let mut cache = DedupCache::new();
        cache.record(sig("old"), T0);
        cache.record(sig("new"), T0 + 3600.0);

        let removed = cache.purge_expired(T0 + WINDOW.as_secs_f64(), WINDOW);

        assert_eq!(removed, 1);
        assert!(!cache.is_duplicate(&sig("old")));
        assert!(cache.is_duplicate(&sig("new")));
    }

    #[test]
    fn record_overwrites_timestamp() {
        let mut cache = DedupCache::new();
        cache.record(sig("s"), T0);
        cache.record(sig("s"), T0 + 10.0);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.alerted_at(&sig("s")), Some(T0 + 10.0));
    }

    #[test]
    fn unknown_signature_is_not_duplicate() {
        assert!(!DedupCache::new().is_duplicate(&sig("s")));
    }
}
