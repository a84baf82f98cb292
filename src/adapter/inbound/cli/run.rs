//! Handler for the `run` command.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::application::CycleReport;
use crate::error::Result;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::source::SourceConfig;
use crate::infrastructure::runtime;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = load_config(args)?;
    config.init_logging();

    if !output::is_quiet() {
        print_startup_config(&config, args.once);
    }

    if args.once {
        let report = runtime::run_once(&config).await?;
        print_report(&report);
        return Ok(());
    }

    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = tx.send(true);
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl-C");
                // Hold the sender so the loop keeps running.
                std::future::pending::<()>().await;
            }
        }
    });

    runtime::run_with_shutdown(&config, rx).await?;
    info!("surescan stopped");
    Ok(())
}

/// Read the config file, layer CLI overrides on top, then validate.
fn load_config(args: &RunArgs) -> Result<Config> {
    let mut config = Config::read(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || output::is_json() {
        config.logging.format = LogFormat::Json;
    }
    if args.no_telegram {
        config.telegram.enabled = false;
    }
}

fn print_startup_config(config: &Config, once: bool) {
    output::header(env!("CARGO_PKG_VERSION"));
    let source = match &config.source {
        SourceConfig::OddsApi(api) => format!("odds_api ({})", api.sport),
        SourceConfig::Csv(csv) => format!("csv ({})", csv.path.display()),
    };
    output::field("Source", source);
    output::field("Books", config.scan.books.join(", "));
    output::field("Bankroll", format!("${}", config.scan.bankroll));
    output::field("Min ROI", config.scan.min_roi);
    output::field("Dedupe", format!("{}m", config.scan.dedupe_minutes));
    if once {
        output::field("Mode", "single cycle");
    } else {
        output::field("Interval", format!("{}s", config.scan.scan_interval_seconds));
    }
    if !config.telegram.enabled {
        output::warning("Telegram disabled - alerts go to the log only");
    }
}

fn print_report(report: &CycleReport) {
    output::section("Cycle");
    output::field("Quotes", report.quotes);
    output::field("Events", report.events);
    output::field("Opportunities", report.opportunities);
    output::field("Suppressed", report.suppressed);
    if report.failed_notifications > 0 {
        output::warning(&format!(
            "{} alert(s) failed to deliver",
            report.failed_notifications
        ));
    }

    if report.alerts.is_empty() {
        output::note("No new opportunities");
        return;
    }
    output::section("Alerts");
    for alert in &report.alerts {
        for line in alert.message.lines() {
            output::note(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(no_telegram: bool) -> RunArgs {
        RunArgs {
            config: PathBuf::from("config.toml"),
            once: true,
            log_level: Some("debug".into()),
            json_logs: true,
            no_telegram,
        }
    }

    #[test]
    fn overrides_replace_logging_and_telegram() {
        let mut config = Config::default();
        assert!(config.telegram.enabled);

        apply_overrides(&mut config, &args(true));

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.telegram.enabled);
    }

    #[test]
    fn telegram_untouched_without_flag() {
        let mut config = Config::default();
        apply_overrides(&mut config, &args(false));
        assert!(config.telegram.enabled);
    }
}
