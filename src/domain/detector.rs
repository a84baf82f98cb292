//! Two-way arbitrage detection.

use rust_decimal::Decimal;

use super::money::DecimalOdds;
use super::quote::OddsQuote;

/// Configuration for the arbitrage detector.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Minimum return on investment (fraction of bankroll) worth reporting.
    pub min_roi: Decimal,
}

fn default_min_roi() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_roi: default_min_roi(),
        }
    }
}

/// One side of a two-way arbitrage.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub quote: OddsQuote,
    pub decimal: DecimalOdds,
}

impl Leg {
    #[must_use]
    pub fn new(quote: OddsQuote) -> Self {
        let decimal = quote.price.to_decimal();
        Self { quote, decimal }
    }

    /// Implied probability of this leg (1 / decimal).
    #[must_use]
    pub fn implied_probability(&self) -> Decimal {
        Decimal::ONE / self.decimal
    }
}

/// A guaranteed-profit combination of two opposing best prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Arbitrage {
    pub leg_a: Leg,
    pub leg_b: Leg,
    /// Sum of both implied probabilities; below 1 for any arbitrage.
    pub implied_total: Decimal,
    /// `1 - implied_total`, as a fraction.
    pub roi: Decimal,
}

impl Arbitrage {
    /// Event label shared by both legs.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.leg_a.quote.event
    }
}

/// Whether two decimal prices leave a risk-free margin.
#[must_use]
pub fn is_two_way_arb(d_a: DecimalOdds, d_b: DecimalOdds) -> bool {
    Decimal::ONE / d_a + Decimal::ONE / d_b < Decimal::ONE
}

/// Return on investment of backing both sides: `1 - (1/d_a + 1/d_b)`.
#[must_use]
pub fn roi(d_a: DecimalOdds, d_b: DecimalOdds) -> Decimal {
    Decimal::ONE - (Decimal::ONE / d_a + Decimal::ONE / d_b)
}

/// Test two best picks on distinct outcomes of one event for arbitrage.
///
/// Returns `None` when the combined implied probability is not under 100%,
/// or when the edge is below `config.min_roi`.
#[must_use]
pub fn evaluate(pick_a: &OddsQuote, pick_b: &OddsQuote, config: &DetectorConfig) -> Option<Arbitrage> {
    debug_assert_ne!(pick_a.outcome, pick_b.outcome);

    let leg_a = Leg::new(pick_a.clone());
    let leg_b = Leg::new(pick_b.clone());

    if !is_two_way_arb(leg_a.decimal, leg_b.decimal) {
        return None;
    }

    let implied_total = leg_a.implied_probability() + leg_b.implied_probability();
    let roi = Decimal::ONE - implied_total;

    if roi < config.min_roi {
        return None;
    }

    Some(Arbitrage {
        leg_a,
        leg_b,
        implied_total,
        roi,
    })
}
