//! Best available price per outcome.

use std::collections::{HashMap, HashSet};

use super::quote::OddsQuote;

/// The most favourable quote per outcome for one event.
///
/// Outcomes are kept in the order they were first seen after source
/// filtering, so `picks()[0]` is always the earliest outcome.
#[derive(Debug, Clone, Default)]
pub struct BestPicks {
    picks: Vec<OddsQuote>,
    index: HashMap<String, usize>,
}

impl BestPicks {
    /// Quote chosen for an outcome label.
    #[must_use]
    pub fn get(&self, outcome: &str) -> Option<&OddsQuote> {
        self.index.get(outcome).map(|&i| &self.picks[i])
    }

    /// All picks in first-seen outcome order.
    #[must_use]
    pub fn picks(&self) -> &[OddsQuote] {
        &self.picks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// The two picks of a two-way market, or `None` for any other shape.
    #[must_use]
    pub fn as_pair(&self) -> Option<(&OddsQuote, &OddsQuote)> {
        match self.picks.as_slice() {
            [a, b] => Some((a, b)),
            _ => None,
        }
    }

    fn offer(&mut self, quote: &OddsQuote) {
        match self.index.get(&quote.outcome) {
            Some(&i) => {
                if quote.price.beats(self.picks[i].price) {
                    self.picks[i] = quote.clone();
                }
            }
            None => {
                self.index.insert(quote.outcome.clone(), self.picks.len());
                self.picks.push(quote.clone());
            }
        }
    }
}

/// Pick the best quote per outcome among `allowed_sources`.
///
/// Quotes from other sources are ignored. On equal prices the quote that
/// arrived first is kept. An event with no allowed quotes yields an empty
/// result.
#[must_use]
pub fn select_best(quotes: &[OddsQuote], allowed_sources: &HashSet<String>) -> BestPicks {
    let mut best = BestPicks::default();
    for quote in quotes.iter().filter(|q| allowed_sources.contains(&q.source)) {
        best.offer(quote);
    }
    best
}
