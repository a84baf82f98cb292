//! Book-agnostic domain logic: prices, selection, detection, sizing.

pub mod error;

mod dedup;
mod detector;
mod money;
mod moneyline;
mod opportunity;
mod quote;
mod selector;
mod signature;
mod stake;

pub use dedup::DedupCache;
pub use detector::{evaluate, is_two_way_arb, roi, Arbitrage, DetectorConfig, Leg};
pub use money::{now, Amount, DecimalOdds, Timestamp};
pub use moneyline::Moneyline;
pub use opportunity::Opportunity;
pub use quote::{group_by_event, EventGroup, EventKey, OddsQuote};
pub use selector::{select_best, BestPicks};
pub use signature::{OpportunitySignature, ROI_PRECISION};
pub use stake::{allocate, equal_profit_stakes, StakePlan};
