//! Build adapters from configuration.

use tracing::info;

use crate::adapter::outbound::odds_api::OddsApiClient;
use crate::adapter::outbound::odds_file::CsvOddsSource;
use crate::adapter::outbound::store::JsonFileStore;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceConfig;
use crate::port::{LogNotifier, NotifierRegistry, OddsSource};

/// Build the configured odds source.
#[must_use]
pub fn build_odds_source(config: &Config) -> Box<dyn OddsSource> {
    match &config.source {
        SourceConfig::OddsApi(api) => {
            info!(sport = %api.sport, regions = %api.regions, "Using The Odds API");
            Box::new(OddsApiClient::from_config(api.clone()))
        }
        SourceConfig::Csv(csv) => {
            info!(path = %csv.path.display(), "Using CSV odds file");
            Box::new(CsvOddsSource::new(csv.path.clone()))
        }
    }
}

/// Build the notifier registry: the log always, Telegram when enabled.
///
/// # Errors
///
/// Fails when Telegram is enabled in a build without the `telegram`
/// feature.
#[allow(clippy::result_large_err)]
pub fn build_notifier_registry(config: &Config) -> Result<NotifierRegistry> {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    if config.telegram.enabled {
        register_telegram(&mut registry, config)?;
    }

    Ok(registry)
}

#[cfg(feature = "telegram")]
#[allow(clippy::result_large_err)]
fn register_telegram(registry: &mut NotifierRegistry, config: &Config) -> Result<()> {
    use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
    use crate::error::ConfigError;

    let (Some(bot_token), Some(chat_id)) = (&config.telegram.bot_token, &config.telegram.chat_id)
    else {
        return Err(ConfigError::MissingField { field: "bot_token" }.into());
    };
    let telegram = TelegramConfig {
        bot_token: bot_token.clone(),
        chat_id: chat_id.clone(),
    };
    registry.register(Box::new(TelegramNotifier::new(&telegram)));
    Ok(())
}

#[cfg(not(feature = "telegram"))]
#[allow(clippy::result_large_err)]
fn register_telegram(_registry: &mut NotifierRegistry, _config: &Config) -> Result<()> {
    Err(crate::error::ConfigError::InvalidValue {
        field: "telegram.enabled",
        reason: "telegram support requires the telegram feature".to_string(),
    }
    .into())
}

/// Build the dedup cache store.
#[must_use]
pub fn build_store(config: &Config) -> JsonFileStore {
    JsonFileStore::new(config.scan.cache_path.clone())
}
