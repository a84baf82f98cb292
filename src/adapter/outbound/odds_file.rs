//! CSV odds file source, for offline runs and fixtures.
//!
//! Expected header: `sport,event,book,team,american_odds`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Moneyline, OddsQuote};
use crate::error::{FetchError, Result};
use crate::port::OddsSource;

#[derive(Debug, Deserialize)]
struct OddsRow {
    sport: String,
    event: String,
    book: String,
    team: String,
    american_odds: String,
}

/// Reads the whole file on every fetch, so edits show up on the next cycle.
pub struct CsvOddsSource {
    path: PathBuf,
}

impl CsvOddsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OddsSource for CsvOddsSource {
    async fn fetch(&self) -> Result<Vec<OddsQuote>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Transient(format!("{}: {e}", self.path.display())))?;
        Ok(parse_rows(&content))
    }

    fn name(&self) -> &'static str {
        "csv"
    }
}

/// Parse CSV content, skipping rows that are malformed or carry an invalid
/// price.
pub fn parse_rows(content: &str) -> Vec<OddsQuote> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut quotes = Vec::new();
    for (line, row) in reader.deserialize::<OddsRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(row = line + 1, error = %e, "Skipping malformed odds row");
                continue;
            }
        };
        let price = match row
            .american_odds
            .parse::<i64>()
            .ok()
            .and_then(|p| Moneyline::try_new(p).ok())
        {
            Some(price) => price,
            None => {
                debug!(row = line + 1, price = %row.american_odds, "Skipping invalid price");
                continue;
            }
        };
        quotes.push(OddsQuote::new(row.sport, row.event, row.book, row.team, price));
    }
    quotes
}
