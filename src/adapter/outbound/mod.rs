//! Outbound adapters (driven side).

pub mod notifier;
pub mod odds_api;
pub mod odds_file;
pub mod store;
