//! Surescan - two-way sportsbook arbitrage detection and alerting.
//!
//! Polls moneyline quotes from an odds source, keeps the best price per
//! outcome among allowed books, flags events whose two best prices
//! guarantee a profit, sizes equal-profit stakes under a per-side cap and
//! alerts once per opportunity within a cooldown window.
//!
//! # Modules
//!
//! - [`domain`] - Quotes, odds conversion, best-price selection, arbitrage
//!   math, stake sizing, signatures and the dedup cache
//! - [`application`] - One scan cycle and the alert text
//! - [`port`] - Traits for odds sources, notifiers and cache storage
//! - [`adapter`] - CLI, Odds API / CSV sources, Telegram, JSON cache file
//! - [`infrastructure`] - Configuration, wiring and the polling loop
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram alert delivery via teloxide
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use surescan::domain::{allocate, evaluate, DetectorConfig, Moneyline, OddsQuote};
//!
//! let a = OddsQuote::new("nba", "X vs Y", "K", "X", Moneyline::try_new(150).unwrap());
//! let b = OddsQuote::new("nba", "X vs Y", "M", "Y", Moneyline::try_new(-120).unwrap());
//! let arb = evaluate(&a, &b, &DetectorConfig::default()).unwrap();
//! let plan = allocate(dec!(1000), arb.leg_a.decimal, arb.leg_b.decimal, dec!(10000));
//! assert!(plan.profit > dec!(57));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
