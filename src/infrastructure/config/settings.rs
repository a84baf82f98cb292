//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for secrets (`ODDS_API_KEY`, `TELEGRAM_BOT_TOKEN`,
//! `TELEGRAM_CHAT_ID`). Any validation failure is fatal at startup.
//!
//! # Example
//!
//! ```no_run
//! use surescan::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use super::scan::ScanConfig;
use super::source::SourceConfig;
use super::telegram::TelegramAppConfig;
use crate::application::ScanSettings;
use crate::domain::DetectorConfig;
use crate::error::{ConfigError, Result};

/// Recipient label used when alerts only go to the log.
pub const LOG_RECIPIENT: &str = "console";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Bankroll, thresholds, allowed books and cadence.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Odds source selection and its settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Telegram alert delivery.
    #[serde(default)]
    pub telegram: TelegramAppConfig,
}

impl Config {
    /// Parse configuration from TOML content, apply environment overrides,
    /// and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = Self::parse_unvalidated(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content and apply environment overrides without
    /// validating, so callers can layer CLI overrides first.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    #[allow(clippy::result_large_err)]
    pub fn parse_unvalidated(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Read a TOML file without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    #[allow(clippy::result_large_err)]
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_unvalidated(&content)
    }

    fn apply_env(&mut self) {
        if let SourceConfig::OddsApi(api) = &mut self.source {
            if let Some(key) = env_nonempty("ODDS_API_KEY") {
                api.api_key = key;
            }
        }
        if let Some(token) = env_nonempty("TELEGRAM_BOT_TOKEN") {
            self.telegram.bot_token = Some(token);
        }
        if let Some(chat_id) = env_nonempty("TELEGRAM_CHAT_ID") {
            self.telegram.chat_id = Some(chat_id);
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let scan = &self.scan;
        if scan.bankroll <= Decimal::ZERO {
            return Err(invalid("bankroll", "must be greater than 0"));
        }
        if scan.max_stake_per_side <= Decimal::ZERO {
            return Err(invalid("max_stake_per_side", "must be greater than 0"));
        }
        if scan.min_roi < Decimal::ZERO || scan.min_roi >= Decimal::ONE {
            return Err(invalid("min_roi", "must be in [0, 1)"));
        }
        if scan.books.iter().all(|b| b.trim().is_empty()) {
            return Err(ConfigError::MissingField { field: "books" }.into());
        }
        if scan.dedupe_minutes == 0 {
            return Err(invalid("dedupe_minutes", "must be greater than 0"));
        }
        if scan.scan_interval_seconds == 0 {
            return Err(invalid("scan_interval_seconds", "must be greater than 0"));
        }

        if let SourceConfig::OddsApi(api) = &self.source {
            if api.api_key.is_empty() {
                return Err(ConfigError::MissingField { field: "api_key" }.into());
            }
            if api.base_url.is_empty() {
                return Err(ConfigError::MissingField { field: "base_url" }.into());
            }
            if api.odds_format != "american" {
                return Err(invalid("odds_format", "only \"american\" prices are supported"));
            }
        }

        if self.telegram.enabled {
            if is_blank(&self.telegram.bot_token) {
                return Err(ConfigError::MissingField { field: "bot_token" }.into());
            }
            if is_blank(&self.telegram.chat_id) {
                return Err(ConfigError::MissingField { field: "chat_id" }.into());
            }
        }

        Ok(())
    }

    /// Who receives alerts: the Telegram chat, or the console.
    #[must_use]
    pub fn recipient(&self) -> String {
        match (&self.telegram.chat_id, self.telegram.enabled) {
            (Some(chat_id), true) => chat_id.clone(),
            _ => LOG_RECIPIENT.to_string(),
        }
    }

    /// Per-cycle settings derived from this configuration.
    #[must_use]
    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            bankroll: self.scan.bankroll,
            max_stake_per_side: self.scan.max_stake_per_side,
            allowed_sources: self.allowed_sources(),
            detector: DetectorConfig {
                min_roi: self.scan.min_roi,
            },
            cooldown: Duration::from_secs(self.scan.dedupe_minutes * 60),
            recipient: self.recipient(),
        }
    }

    #[must_use]
    pub fn allowed_sources(&self) -> HashSet<String> {
        self.scan
            .books
            .iter()
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty())
            .collect()
    }

    #[must_use]
    pub fn scan_interval(&self) -> Duration {
        Duration::from_secs(self.scan.scan_interval_seconds)
    }

    #[must_use]
    pub fn rate_limit_backoff(&self) -> Duration {
        Duration::from_secs(self.scan.rate_limit_backoff_seconds)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
    .into()
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn env_nonempty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
