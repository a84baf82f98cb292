//! HTTP client for The Odds API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

use super::dto::ApiEvent;
use super::settings::OddsApiConfig;
use crate::domain::{Moneyline, OddsQuote};
use crate::error::{FetchError, Result};
use crate::port::OddsSource;

/// Odds source backed by The Odds API.
///
/// One GET per polling pass, no retries inside a pass. HTTP 429 surfaces as
/// [`FetchError::RateLimited`]; rejected credentials are fatal.
pub struct OddsApiClient {
    http: HttpClient,
    config: OddsApiConfig,
}

impl OddsApiClient {
    #[must_use]
    pub fn from_config(config: OddsApiConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });
        Self { http, config }
    }

    fn url(&self) -> String {
        format!(
            "{}/v4/sports/{}/odds",
            self.config.base_url.trim_end_matches('/'),
            self.config.sport
        )
    }
}

#[async_trait]
impl OddsSource for OddsApiClient {
    async fn fetch(&self) -> Result<Vec<OddsQuote>> {
        let bookmakers = self.config.bookmakers.join(",");
        let response = self
            .http
            .get(self.url())
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("regions", self.config.regions.as_str()),
                ("markets", self.config.markets.as_str()),
                ("oddsFormat", self.config.odds_format.as_str()),
                ("bookmakers", bookmakers.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Transient(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(FetchError::RateLimited { retry_after }.into());
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FetchError::Fatal(format!("odds API rejected credentials ({status})")).into());
        }
        if !status.is_success() {
            return Err(FetchError::Transient(format!("odds API returned {status}")).into());
        }

        let events: Vec<ApiEvent> = response
            .json()
            .await
            .map_err(|e| FetchError::Transient(format!("invalid odds payload: {e}")))?;

        Ok(quotes_from_events(&events, &self.config.markets))
    }

    fn name(&self) -> &'static str {
        "odds_api"
    }
}

/// Flatten API events into quotes for `market`, skipping anything that is
/// not a usable moneyline price.
pub(super) fn quotes_from_events(events: &[ApiEvent], market: &str) -> Vec<OddsQuote> {
    let mut quotes = Vec::new();

    for event in events {
        let label = event.label();
        let sport = event.sport_key.as_deref().unwrap_or("unknown");

        for book in &event.bookmakers {
            let book_name = book.title.as_deref().unwrap_or("unknown");
            for outcome in book.markets.iter().filter(|m| m.key == market).flat_map(|m| &m.outcomes) {
                let Some(raw) = outcome.price else {
                    continue;
                };
                let price = match Moneyline::try_new(raw.trunc() as i64) {
                    Ok(price) => price,
                    Err(e) => {
                        debug!(event = %label, book = book_name, error = %e, "Skipping quote");
                        continue;
                    }
                };
                let team = outcome.name.as_deref().unwrap_or("unknown");
                quotes.push(OddsQuote::new(sport, label.as_str(), book_name, team, price));
            }
        }
    }

    quotes
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "id": "e1",
            "sport_key": "basketball_nba",
            "commence_time": "2026-10-20T00:00:00Z",
            "home_team": "Lakers",
            "away_team": "Celtics",
            "bookmakers": [
                {
                    "key": "draftkings",
                    "title": "DraftKings",
                    "markets": [
                        {"key": "h2h", "outcomes": [
                            {"name": "Lakers", "price": 150},
                            {"name": "Celtics", "price": -170}
                        ]},
                        {"key": "spreads", "outcomes": [
                            {"name": "Lakers", "price": -110, "point": 3.5}
                        ]}
                    ]
                },
                {
                    "key": "fanduel",
                    "title": "FanDuel",
                    "markets": [
                        {"key": "h2h", "outcomes": [
                            {"name": "Lakers", "price": 145.0},
                            {"name": "Celtics"},
                            {"name": "Celtics", "price": 40}
                        ]}
                    ]
                }
            ]
        },
        {
            "sport_key": "soccer_epl",
            "commence_time": "2026-10-21T15:00:00Z",
            "bookmakers": [
                {"title": "BetMGM", "markets": [
                    {"key": "h2h", "outcomes": [{"name": "Draw", "price": 230}]}
                ]}
            ]
        }
    ]"#;

    #[test]
    fn flattens_selected_market_and_skips_bad_prices() {
        let events: Vec<ApiEvent> = serde_json::from_str(PAYLOAD).unwrap();
        let quotes = quotes_from_events(&events, "h2h");

        assert_eq!(quotes.len(), 4);
        assert_eq!(quotes[0].event, "Lakers vs Celtics");
        assert_eq!(quotes[0].sport, "basketball_nba");
        assert_eq!(quotes[0].source, "DraftKings");
        assert_eq!(quotes[1].price.value(), -170);
        assert_eq!(quotes[2].source, "FanDuel");
        assert_eq!(quotes[2].price.value(), 145);
    }

    #[test]
    fn event_without_teams_is_labelled_by_commence_time() {
        let events: Vec<ApiEvent> = serde_json::from_str(PAYLOAD).unwrap();
        let quotes = quotes_from_events(&events, "h2h");
        assert_eq!(quotes[3].event, "2026-10-21T15:00:00Z");
        assert_eq!(quotes[3].outcome, "Draw");
    }

    #[test]
    fn other_markets_are_ignored() {
        let events: Vec<ApiEvent> = serde_json::from_str(PAYLOAD).unwrap();
        let quotes = quotes_from_events(&events, "spreads");
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].price.value(), -110);
    }

    #[test]
    fn huge_prices_are_clamped_without_panicking() {
        let payload = r#"[{
            "sport_key": "mma",
            "home_team": "A",
            "away_team": "B",
            "bookmakers": [{"title": "K", "markets": [{"key": "h2h", "outcomes": [
                {"name": "A", "price": -1e30},
                {"name": "B", "price": 1e30}
            ]}]}]
        }]"#;
        let events: Vec<ApiEvent> = serde_json::from_str(payload).unwrap();
        let quotes = quotes_from_events(&events, "h2h");

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].price.value(), i64::MIN);
        assert_eq!(quotes[1].price.value(), i64::MAX);
    }

    #[test]
    fn url_joins_base_and_sport() {
        let client = OddsApiClient::from_config(OddsApiConfig {
            base_url: "https://example.test/".into(),
            sport: "basketball_nba".into(),
            ..OddsApiConfig::default()
        });
        assert_eq!(client.url(), "https://example.test/v4/sports/basketball_nba/odds");
    }
}
