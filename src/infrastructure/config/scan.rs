//! Scanner settings: bankroll, thresholds, books, cadence.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;

/// The `[scan]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// Amount split across both legs of an opportunity.
    #[serde(default = "default_bankroll")]
    pub bankroll: Decimal,
    /// Minimum edge, as a fraction (0.01 = 1%).
    #[serde(default = "default_min_roi")]
    pub min_roi: Decimal,
    /// Cap on the stake of either leg.
    #[serde(default = "default_max_stake_per_side")]
    pub max_stake_per_side: Decimal,
    /// Books whose prices are considered.
    #[serde(default)]
    pub books: Vec<String>,
    /// Minutes an alerted opportunity stays suppressed.
    #[serde(default = "default_dedupe_minutes")]
    pub dedupe_minutes: u64,
    /// Target seconds between cycle starts.
    #[serde(default = "default_scan_interval_seconds")]
    pub scan_interval_seconds: u64,
    /// Wait after the odds source reports rate limiting.
    #[serde(default = "default_rate_limit_backoff_seconds")]
    pub rate_limit_backoff_seconds: u64,
    /// Where alerted signatures are persisted.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
}

fn default_bankroll() -> Decimal {
    Decimal::from(1000)
}

fn default_min_roi() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

fn default_max_stake_per_side() -> Decimal {
    Decimal::from(5)
}

const fn default_dedupe_minutes() -> u64 {
    120
}

const fn default_scan_interval_seconds() -> u64 {
    60
}

const fn default_rate_limit_backoff_seconds() -> u64 {
    60
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("sent_cache.json")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            bankroll: default_bankroll(),
            min_roi: default_min_roi(),
            max_stake_per_side: default_max_stake_per_side(),
            books: Vec::new(),
            dedupe_minutes: default_dedupe_minutes(),
            scan_interval_seconds: default_scan_interval_seconds(),
            rate_limit_backoff_seconds: default_rate_limit_backoff_seconds(),
            cache_path: default_cache_path(),
        }
    }
}
