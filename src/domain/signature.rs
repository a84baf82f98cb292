//! Stable identity of an opportunity across polling cycles.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::quote::OddsQuote;

/// Decimal places of ROI that take part in identity.
pub const ROI_PRECISION: u32 = 4;

/// Key that is equal for the same opportunity seen again and different
/// when its books, prices or rounded edge change.
///
/// Stakes are deliberately left out: they follow from prices, bankroll
/// and cap, and a config change alone should not re-alert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpportunitySignature(String);

impl OpportunitySignature {
    /// Build the canonical signature. Argument order of the picks does not
    /// matter.
    #[must_use]
    pub fn new(event: &str, pick_a: &OddsQuote, pick_b: &OddsQuote, roi: Decimal) -> Self {
        let mut sides = [SignatureSide::from(pick_a), SignatureSide::from(pick_b)];
        sides.sort();
        let roi_key = roi
            .round_dp_with_strategy(ROI_PRECISION, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        Self(format!("{event}|{}|{}|roi={roi_key}", sides[0], sides[1]))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OpportunitySignature {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for OpportunitySignature {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for OpportunitySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// (source, outcome, price), ordered lexicographically.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SignatureSide<'a> {
    source: &'a str,
    outcome: &'a str,
    price: i64,
}

impl<'a> From<&'a OddsQuote> for SignatureSide<'a> {
    fn from(quote: &'a OddsQuote) -> Self {
        Self {
            source: &quote.source,
            outcome: &quote.outcome,
            price: quote.price.value(),
        }
    }
}

impl fmt::Display for SignatureSide<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.outcome, self.price)
    }
}
