//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceConfig;

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("Scan");
    output::field("Bankroll", format!("${}", config.scan.bankroll));
    output::field("Max per side", format!("${}", config.scan.max_stake_per_side));
    output::field("Min ROI", config.scan.min_roi);
    output::field("Books", config.scan.books.join(", "));
    output::field("Dedupe", format!("{}m", config.scan.dedupe_minutes));
    output::field("Interval", format!("{}s", config.scan.scan_interval_seconds));
    output::field("Backoff", format!("{}s", config.scan.rate_limit_backoff_seconds));
    output::field("Cache", config.scan.cache_path.display());

    output::section("Source");
    match &config.source {
        SourceConfig::OddsApi(api) => {
            output::field("Type", "odds_api");
            output::field("Base URL", &api.base_url);
            output::field("Sport", &api.sport);
            output::field("Regions", &api.regions);
            output::field("Markets", &api.markets);
            output::success("API key loaded");
        }
        SourceConfig::Csv(csv) => {
            output::field("Type", "csv");
            output::field("Path", csv.path.display());
        }
    }

    output::section("Notifications");
    output::field(
        "Telegram",
        if config.telegram.enabled {
            "enabled"
        } else {
            "disabled"
        },
    );
    output::field("Recipient", output::highlight(config.recipient()));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", format!("{:?}", config.logging.format).to_lowercase());

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    let warnings = warnings(&config);
    if !warnings.is_empty() {
        output::section("Warnings");
        for warning in &warnings {
            output::warning(warning);
        }
    }

    output::field("Next", format!("surescan run -c {}", path.display()));
    Ok(())
}

/// Settings that are valid but probably not what the operator wants.
fn warnings(config: &Config) -> Vec<String> {
    let mut out = Vec::new();
    if config.scan.max_stake_per_side * rust_decimal::Decimal::TWO < config.scan.bankroll {
        out.push(format!(
            "max_stake_per_side ({}) caps every bet well below the bankroll ({})",
            config.scan.max_stake_per_side, config.scan.bankroll
        ));
    }
    if !config.telegram.enabled {
        out.push("Telegram disabled, alerts are only logged".to_string());
    }
    if let SourceConfig::OddsApi(api) = &config.source {
        if config.scan.scan_interval_seconds < 30 {
            out.push(format!(
                "scan interval of {}s may exhaust the {} quota quickly",
                config.scan.scan_interval_seconds, api.base_url
            ));
        }
    }
    out
}
