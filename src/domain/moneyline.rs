//! Moneyline (American) prices and their decimal equivalents.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::DecimalOdds;

/// A validated moneyline price.
///
/// Positive values are the payout per 100 staked on an underdog, negative
/// values the stake needed to win 100 on a favourite. Anything in
/// `(-100, 100)` is not a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Moneyline(i64);

impl Moneyline {
    /// Validate a raw moneyline price.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMoneyline`] for 0 and for magnitudes
    /// below 100.
    pub fn try_new(price: i64) -> Result<Self, DomainError> {
        if price.unsigned_abs() < 100 {
            return Err(DomainError::InvalidMoneyline { price });
        }
        Ok(Self(price))
    }

    /// The raw signed price.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Convert to a decimal payout multiplier. Always greater than 1.
    #[must_use]
    pub fn to_decimal(self) -> DecimalOdds {
        let hundred = Decimal::ONE_HUNDRED;
        if self.0 > 0 {
            Decimal::ONE + Decimal::from(self.0) / hundred
        } else {
            Decimal::ONE + hundred / Decimal::from(self.0.unsigned_abs())
        }
    }

    /// Whether this price is more favourable to the bettor than `other`.
    ///
    /// Two underdogs: the larger payout wins. Two favourites: the smaller
    /// absolute value wins. Mixed: the positive price wins. All three cases
    /// coincide with a plain signed comparison, which is what this does.
    /// Equal prices are not "better", so callers keep the first seen.
    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        self.0 > other.0
    }
}

impl TryFrom<i64> for Moneyline {
    type Error = DomainError;

    fn try_from(price: i64) -> Result<Self, Self::Error> {
        Self::try_new(price)
    }
}

impl From<Moneyline> for i64 {
    fn from(price: Moneyline) -> Self {
        price.0
    }
}

impl fmt::Display for Moneyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
