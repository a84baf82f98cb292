//! Polling loop lifecycle.
//!
//! One cycle at a time. Between cycle completions the loop waits for the
//! configured interval minus the cycle's own duration, floored at zero. A
//! rate-limited fetch stretches that wait to the backoff. Cycle errors are
//! logged and the loop carries on; only a fatal odds-source error (for
//! instance rejected credentials) stops it.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::{error, info, warn};

use crate::application::{CycleReport, ScanCycle, ScanSettings};
use crate::domain::now;
use crate::error::{Error, ErrorKind, Result};
use crate::infrastructure::bootstrap::{build_notifier_registry, build_odds_source, build_store};
use crate::infrastructure::config::settings::Config;
use crate::port::{DedupStore, Notifier, OddsSource};

/// Wait before the next cycle.
#[must_use]
pub fn next_wait(
    interval: Duration,
    elapsed: Duration,
    outcome: &std::result::Result<CycleReport, Error>,
    backoff: Duration,
) -> Duration {
    let base = interval.saturating_sub(elapsed);
    match outcome {
        Err(e) if e.kind() == ErrorKind::RateLimited => {
            base.max(e.retry_after().unwrap_or(backoff))
        }
        _ => base,
    }
}

/// Run a single cycle and exit.
///
/// # Errors
///
/// Returns configuration errors and the cycle's own error, if any.
pub async fn run_once(config: &Config) -> Result<CycleReport> {
    let source = build_odds_source(config);
    let notifier = build_notifier_registry(config)?;
    let store = build_store(config);
    let settings = config.scan_settings();

    let mut cache = store.load();
    ScanCycle::new(source.as_ref(), &notifier, &store, &settings)
        .run(&mut cache, now())
        .await
}

/// Loop timing taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    /// Target time between cycle starts.
    pub interval: Duration,
    /// Minimum wait after a rate-limited fetch.
    pub backoff: Duration,
}

impl Cadence {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            interval: config.scan_interval(),
            backoff: config.rate_limit_backoff(),
        }
    }
}

/// Run the polling loop until `shutdown` flips to true.
///
/// # Errors
///
/// Returns configuration errors found while wiring adapters, or a fatal
/// odds-source error.
pub async fn run_with_shutdown(config: &Config, shutdown: watch::Receiver<bool>) -> Result<()> {
    let source = build_odds_source(config);
    let notifier = build_notifier_registry(config)?;
    let store = build_store(config);
    let settings = config.scan_settings();

    info!(notifiers = notifier.len(), "Notifiers ready");
    run_loop(
        source.as_ref(),
        &notifier,
        &store,
        &settings,
        Cadence::from_config(config),
        shutdown,
    )
    .await
}

/// Drive cycles against already-built collaborators.
///
/// The cache is loaded from `store` once, before the first cycle, and saved
/// again on shutdown.
///
/// # Errors
///
/// Returns the first fatal odds-source error.
pub async fn run_loop(
    source: &dyn OddsSource,
    notifier: &dyn Notifier,
    store: &dyn DedupStore,
    settings: &ScanSettings,
    cadence: Cadence,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    let mut cache = store.load();
    info!(
        source = source.name(),
        interval_secs = cadence.interval.as_secs(),
        dedupe_minutes = settings.cooldown.as_secs() / 60,
        cached = cache.len(),
        "Scanner live"
    );

    let cycle = ScanCycle::new(source, notifier, store, settings);
    loop {
        let started = Instant::now();
        let outcome = cycle.run(&mut cache, now()).await;

        let wait = next_wait(cadence.interval, started.elapsed(), &outcome, cadence.backoff);

        if let Err(e) = outcome {
            match e.kind() {
                ErrorKind::RateLimited => {
                    warn!(error = %e, wait_secs = wait.as_secs(), "Odds source rate limited, backing off");
                }
                ErrorKind::Transient => {
                    error!(error = %e, "Scan cycle failed");
                }
                ErrorKind::Fatal => {
                    error!(error = %e, "Fatal odds source error, stopping");
                    return Err(e);
                }
            }
        }

        tokio::select! {
            result = shutdown.changed() => {
                match result {
                    Ok(()) if *shutdown.borrow() => {
                        info!("Shutdown signal received");
                        break;
                    }
                    Ok(()) => {}
                    Err(_) => {
                        info!("Shutdown channel closed");
                        break;
                    }
                }
            }
            () = tokio::time::sleep(wait) => {}
        }
    }

    if let Err(e) = store.save(&cache) {
        error!(error = %e, "Failed to persist dedup cache on shutdown");
    }

    Ok(())
}
