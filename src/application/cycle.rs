//! One polling cycle, end to end.
//!
//! fetch -> group by event -> best picks -> two-way check -> sizing ->
//! signature + dedup -> notify -> record -> persist.
//!
//! The dedup cache is passed in by the caller and mutated in place; nothing
//! here holds process-wide state.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::{debug, error, info, warn};

use super::alert::format_alert;
use crate::domain::{
    allocate, evaluate, group_by_event, select_best, Amount, DedupCache, DetectorConfig,
    OddsQuote, Opportunity, OpportunitySignature, Timestamp,
};
use crate::error::Result;
use crate::port::{DedupStore, Notification, Notifier, OddsSource};

/// Static per-cycle settings, taken from configuration at startup.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    /// Total amount split across both legs before capping.
    pub bankroll: Amount,
    /// Largest stake allowed on a single leg.
    pub max_stake_per_side: Amount,
    /// Books whose quotes are considered.
    pub allowed_sources: HashSet<String>,
    pub detector: DetectorConfig,
    /// How long an alerted signature stays suppressed.
    pub cooldown: Duration,
    /// Who receives alerts.
    pub recipient: String,
}

/// An alert produced by a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAlert {
    pub message: String,
    pub signature: OpportunitySignature,
}

/// Counters and output of one cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    pub quotes: usize,
    pub events: usize,
    pub opportunities: usize,
    pub suppressed: usize,
    pub purged: usize,
    pub failed_notifications: usize,
    pub persisted: bool,
    pub alerts: Vec<EmittedAlert>,
}

/// Detect sized opportunities in a batch of quotes.
///
/// Events whose filtered best picks are not exactly two outcomes are
/// skipped: only two-way markets are handled.
#[must_use]
pub fn detect(quotes: Vec<OddsQuote>, settings: &ScanSettings) -> Vec<Opportunity> {
    let mut found = Vec::new();

    for group in group_by_event(quotes) {
        let picks = select_best(&group.quotes, &settings.allowed_sources);
        let Some((a, b)) = picks.as_pair() else {
            debug!(event = %group.key, outcomes = picks.len(), "Skipping non two-way event");
            continue;
        };

        let Some(arbitrage) = evaluate(a, b, &settings.detector) else {
            continue;
        };

        let stakes = allocate(
            settings.bankroll,
            arbitrage.leg_a.decimal,
            arbitrage.leg_b.decimal,
            settings.max_stake_per_side,
        );
        found.push(Opportunity::new(arbitrage, stakes));
    }

    found
}

/// Drives one cycle against its collaborators.
pub struct ScanCycle<'a> {
    source: &'a dyn OddsSource,
    notifier: &'a dyn Notifier,
    store: &'a dyn DedupStore,
    settings: &'a ScanSettings,
}

impl<'a> ScanCycle<'a> {
    pub fn new(
        source: &'a dyn OddsSource,
        notifier: &'a dyn Notifier,
        store: &'a dyn DedupStore,
        settings: &'a ScanSettings,
    ) -> Self {
        Self {
            source,
            notifier,
            store,
            settings,
        }
    }

    /// Run one full pass at time `now`.
    ///
    /// A fetch failure abandons the cycle before the cache is touched. A
    /// failed notification is logged and counted; its signature is still
    /// recorded so the same alert is not retried every cycle. The cache is
    /// persisted once at the end, whether or not anything new fired.
    ///
    /// # Errors
    ///
    /// Returns the odds source's error when the fetch fails.
    pub async fn run(&self, cache: &mut DedupCache, now: Timestamp) -> Result<CycleReport> {
        let started = Instant::now();
        let quotes = self.source.fetch().await?;

        let mut report = CycleReport {
            quotes: quotes.len(),
            events: count_events(&quotes),
            ..CycleReport::default()
        };

        // Purge first so a cooldown that just elapsed can re-alert now.
        report.purged = cache.purge_expired(now, self.settings.cooldown);

        let opportunities = detect(quotes, self.settings);
        report.opportunities = opportunities.len();

        for opportunity in opportunities {
            let signature = opportunity.signature().clone();
            if cache.is_duplicate(&signature) {
                debug!(signature = %signature, "Suppressing duplicate opportunity");
                report.suppressed += 1;
                continue;
            }

            let message = format_alert(&opportunity);
            info!(
                event = opportunity.event(),
                roi = %opportunity.roi(),
                profit = %opportunity.stakes().profit,
                capped = opportunity.stakes().is_capped(),
                "Arbitrage opportunity"
            );

            let notification = Notification::new(&self.settings.recipient, &message);
            if let Err(e) = self.notifier.send(&notification).await {
                warn!(error = %e, event = opportunity.event(), "Failed to deliver alert");
                report.failed_notifications += 1;
            }

            cache.record(signature.clone(), now);
            report.alerts.push(EmittedAlert { message, signature });
        }

        match self.store.save(cache) {
            Ok(()) => report.persisted = true,
            Err(e) => error!(error = %e, "Failed to persist dedup cache"),
        }

        let elapsed_ms = started.elapsed().as_millis() as u64;
        if report.alerts.is_empty() {
            info!(
                quotes = report.quotes,
                events = report.events,
                suppressed = report.suppressed,
                elapsed_ms,
                "Scan tick, no new opportunities"
            );
        } else {
            info!(
                quotes = report.quotes,
                events = report.events,
                alerts = report.alerts.len(),
                suppressed = report.suppressed,
                purged = report.purged,
                elapsed_ms,
                "Scan tick"
            );
        }

        Ok(report)
    }
}

fn count_events(quotes: &[OddsQuote]) -> usize {
    quotes
        .iter()
        .map(|q| (q.sport.as_str(), q.event.as_str()))
        .collect::<HashSet<_>>()
        .len()
}
