//! Odds quotes and per-event grouping.

use std::collections::HashMap;
use std::fmt;

use super::moneyline::Moneyline;

/// One bookmaker's price for one outcome of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddsQuote {
    pub sport: String,
    pub event: String,
    pub source: String,
    pub outcome: String,
    pub price: Moneyline,
}

impl OddsQuote {
    pub fn new(
        sport: impl Into<String>,
        event: impl Into<String>,
        source: impl Into<String>,
        outcome: impl Into<String>,
        price: Moneyline,
    ) -> Self {
        Self {
            sport: sport.into(),
            event: event.into(),
            source: source.into(),
            outcome: outcome.into(),
            price,
        }
    }

    /// The (sport, event) key this quote belongs to.
    #[must_use]
    pub fn event_key(&self) -> EventKey {
        EventKey {
            sport: self.sport.clone(),
            event: self.event.clone(),
        }
    }
}

/// Identity of an event across quotes: (sport, event).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EventKey {
    pub sport: String,
    pub event: String,
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.sport, self.event)
    }
}

/// All quotes sharing one [`EventKey`], in arrival order.
#[derive(Debug, Clone)]
pub struct EventGroup {
    pub key: EventKey,
    pub quotes: Vec<OddsQuote>,
}

/// Group quotes by (sport, event).
///
/// Groups come out in order of each event's first quote, and quotes keep
/// their arrival order inside a group.
#[must_use]
pub fn group_by_event(quotes: Vec<OddsQuote>) -> Vec<EventGroup> {
    let mut index: HashMap<EventKey, usize> = HashMap::new();
    let mut groups: Vec<EventGroup> = Vec::new();

    for quote in quotes {
        let key = quote.event_key();
        match index.get(&key) {
            Some(&i) => groups[i].quotes.push(quote),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(EventGroup {
                    key,
                    quotes: vec![quote],
                });
            }
        }
    }

    groups
}
