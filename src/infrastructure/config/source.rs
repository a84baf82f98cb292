//! Odds source selection.

use std::path::PathBuf;

use serde::Deserialize;

use crate::adapter::outbound::odds_api::OddsApiConfig;

/// Which odds source to poll. Selected by the `type` field of `[source]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceConfig {
    /// The Odds API over HTTP.
    OddsApi(OddsApiConfig),
    /// A local CSV file (`sport,event,book,team,american_odds`).
    Csv(CsvSourceConfig),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CsvSourceConfig {
    #[serde(default = "default_csv_path")]
    pub path: PathBuf,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("sample_odds.csv")
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::Csv(CsvSourceConfig {
            path: default_csv_path(),
        })
    }
}
