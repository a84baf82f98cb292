//! The Odds API (`api.the-odds-api.com`) odds source.

mod client;
mod dto;
pub mod settings;

pub use client::OddsApiClient;
pub use settings::OddsApiConfig;
