//! Monetary and time representations.

use rust_decimal::Decimal;

/// Stake, bankroll and profit amounts.
pub type Amount = Decimal;

/// Decimal payout multiplier (total return per unit staked).
pub type DecimalOdds = Decimal;

/// Seconds since the Unix epoch, as persisted in the dedup cache.
pub type Timestamp = f64;

/// Current wall-clock time as a [`Timestamp`].
#[must_use]
pub fn now() -> Timestamp {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_after_2020() {
        assert!(now() > 1_577_836_800.0);
    }
}
