//! Human-readable alert text.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Leg, Opportunity};

/// Render an opportunity as the alert body sent to the notifier.
#[must_use]
pub fn format_alert(opportunity: &Opportunity) -> String {
    let stakes = opportunity.stakes();
    let edge_pct = cents(opportunity.roi() * Decimal::ONE_HUNDRED);

    [
        format!("Arbitrage found: {}", opportunity.event()),
        bet_line(1, opportunity.leg_a(), stakes.stake_a),
        bet_line(2, opportunity.leg_b(), stakes.stake_b),
        format!("Guaranteed profit: ${:.2}", cents(stakes.profit)),
        format!("Edge: {edge_pct:.2}%"),
    ]
    .join("\n")
}

fn bet_line(n: u8, leg: &Leg, stake: Decimal) -> String {
    format!(
        "Bet {n}: {} at {} odds {} stake ${:.2}",
        leg.quote.outcome,
        leg.quote.source,
        leg.quote.price,
        cents(stake)
    )
}

fn cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
