//! Equal-profit stake sizing with a per-side cap.

use rust_decimal::Decimal;

use super::money::{Amount, DecimalOdds};

/// Stake split for a two-way arbitrage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakePlan {
    /// Stake on the first leg.
    pub stake_a: Amount,
    /// Stake on the second leg.
    pub stake_b: Amount,
    /// Profit locked in whichever leg wins.
    pub profit: Amount,
    /// Factor applied to respect the per-side cap (1 when uncapped).
    pub scale: Decimal,
}

impl StakePlan {
    /// Total amount staked across both legs.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.stake_a + self.stake_b
    }

    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.scale < Decimal::ONE
    }

    /// Scale every figure down so neither stake exceeds `cap`.
    ///
    /// Stakes and profit share one factor, so the equal-payout property of
    /// the plan survives.
    #[must_use]
    pub fn scale_to_cap(self, cap: Amount) -> Self {
        let largest = self.stake_a.max(self.stake_b);
        if largest <= cap {
            return self;
        }
        let factor = cap / largest;
        Self {
            stake_a: self.stake_a * factor,
            stake_b: self.stake_b * factor,
            profit: self.profit * factor,
            scale: self.scale * factor,
        }
    }
}

/// Split `bankroll` so that either outcome returns the same profit.
///
/// `stake_a * d_a == stake_b * d_b` and `stake_a + stake_b == bankroll`.
/// Inputs must be positive; config validation guarantees that upstream.
#[must_use]
pub fn equal_profit_stakes(bankroll: Amount, d_a: DecimalOdds, d_b: DecimalOdds) -> StakePlan {
    let stake_a = bankroll * d_b / (d_a + d_b);
    let stake_b = bankroll - stake_a;
    let profit = stake_a * d_a - bankroll;
    StakePlan {
        stake_a,
        stake_b,
        profit,
        scale: Decimal::ONE,
    }
}

/// Equal-profit split of `bankroll`, capped at `cap_per_side`.
#[must_use]
pub fn allocate(
    bankroll: Amount,
    d_a: DecimalOdds,
    d_b: DecimalOdds,
    cap_per_side: Amount,
) -> StakePlan {
    equal_profit_stakes(bankroll, d_a, d_b).scale_to_cap(cap_per_side)
}
