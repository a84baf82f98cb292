//! Command-line interface definitions.
//!
//! Defines the CLI structure for surescan using `clap`: a `run` command for
//! the scanner and a `config` group for checking configuration files.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "config.toml";

/// Two-way sportsbook arbitrage scanner
#[derive(Parser, Debug)]
#[command(name = "surescan")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll odds, detect arbitrage and send alerts
    Run(RunArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `surescan config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Run a single scan cycle and exit.
    #[arg(long)]
    pub once: bool,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,

    /// Deliver alerts to the log only, even if Telegram is configured.
    #[arg(long)]
    pub no_telegram: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults_to_config_toml() {
        let cli = Cli::try_parse_from(["surescan", "run"]).unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(!args.once);
        assert!(!args.no_telegram);
    }

    #[test]
    fn run_accepts_once_and_overrides() {
        let cli = Cli::try_parse_from([
            "surescan",
            "run",
            "--config",
            "alt.toml",
            "--once",
            "--log-level",
            "debug",
            "--no-telegram",
        ])
        .unwrap();
        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.config, PathBuf::from("alt.toml"));
        assert!(args.once);
        assert!(args.no_telegram);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn config_validate_takes_short_flag() {
        let cli = Cli::try_parse_from(["surescan", "config", "validate", "-c", "x.toml"]).unwrap();
        match cli.command {
            Commands::Config(ConfigCommand::Validate(arg)) => {
                assert_eq!(arg.config, PathBuf::from("x.toml"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["surescan", "config", "show", "--json"]).unwrap();
        assert!(cli.json);
    }
}
