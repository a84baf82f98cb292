//! The Odds API configuration.

use serde::Deserialize;

/// Connection and query settings for The Odds API.
///
/// The API key is normally supplied through `ODDS_API_KEY` rather than the
/// config file.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// API key. Overridden by `ODDS_API_KEY` when set.
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sport key, or `upcoming` for the next events across all sports.
    #[serde(default = "default_sport")]
    pub sport: String,
    /// Bookmaker regions to query.
    #[serde(default = "default_regions")]
    pub regions: String,
    /// Market key; only this market is read from the response.
    #[serde(default = "default_markets")]
    pub markets: String,
    /// Price format requested from the API.
    #[serde(default = "default_odds_format")]
    pub odds_format: String,
    /// Bookmakers requested from the API.
    #[serde(default = "default_bookmakers")]
    pub bookmakers: Vec<String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.the-odds-api.com".into()
}

fn default_sport() -> String {
    "upcoming".into()
}

fn default_regions() -> String {
    "us".into()
}

fn default_markets() -> String {
    "h2h".into()
}

fn default_odds_format() -> String {
    "american".into()
}

fn default_bookmakers() -> Vec<String> {
    vec!["DraftKings".into(), "BetMGM".into(), "FanDuel".into()]
}

const fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            sport: default_sport(),
            regions: default_regions(),
            markets: default_markets(),
            odds_format: default_odds_format(),
            bookmakers: default_bookmakers(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
