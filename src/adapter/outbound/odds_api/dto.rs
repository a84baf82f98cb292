//! Response shapes for `/v4/sports/{sport}/odds`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiEvent {
    #[serde(default)]
    pub sport_key: Option<String>,
    #[serde(default)]
    pub commence_time: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub bookmakers: Vec<ApiBookmaker>,
}

impl ApiEvent {
    /// "home vs away", falling back to the commence time.
    pub fn label(&self) -> String {
        match (self.home_team.as_deref(), self.away_team.as_deref()) {
            (Some(home), Some(away)) if !home.is_empty() && !away.is_empty() => {
                format!("{home} vs {away}")
            }
            _ => self
                .commence_time
                .clone()
                .unwrap_or_else(|| "Unknown event".into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiBookmaker {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub markets: Vec<ApiMarket>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<ApiOutcome>,
}

#[derive(Debug, Deserialize)]
pub struct ApiOutcome {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}
