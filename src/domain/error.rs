//! Domain validation errors.
//!
//! Returned by `try_new` constructors when an input violates a domain rule.
//!
//! ```
//! use surescan::domain::error::DomainError;
//! use surescan::domain::Moneyline;
//!
//! assert!(matches!(
//!     Moneyline::try_new(50),
//!     Err(DomainError::InvalidMoneyline { price: 50 })
//! ));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Moneyline prices are zero-free and at least 100 in magnitude.
    #[error("invalid moneyline price {price}: must be <= -100 or >= 100")]
    InvalidMoneyline {
        /// The rejected price.
        price: i64,
    },

    /// Sizing inputs must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending input.
        field: &'static str,
        /// The rejected value.
        value: rust_decimal::Decimal,
    },
}
