use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_config(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).expect("write temp config");
    path
}

fn csv_config(dir: &TempDir) -> String {
    format!(
        concat!(
            "[scan]\n",
            "books = [\"DraftKings\", \"FanDuel\"]\n",
            "max_stake_per_side = 10000\n",
            "cache_path = {cache:?}\n",
            "\n",
            "[source]\n",
            "type = \"csv\"\n",
            "path = {csv:?}\n",
            "\n",
            "[telegram]\n",
            "enabled = false\n",
        ),
        cache = dir.path().join("sent_cache.json").display().to_string(),
        csv = fixture("sample_odds.csv").display().to_string(),
    )
}

#[test]
fn run_once_alerts_from_csv_and_persists_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, &csv_config(&dir));

    Command::cargo_bin("surescan")
        .unwrap()
        .args(["run", "--once", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arbitrage found: X vs Y"))
        .stdout(predicate::str::contains("stake $423.08"));

    let cache = fs::read_to_string(dir.path().join("sent_cache.json")).unwrap();
    assert!(cache.contains("X vs Y|(DraftKings, X, 150)|(FanDuel, Y, -120)|roi=0.0545"));
}

#[test]
fn second_run_is_suppressed_by_cache() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, &csv_config(&dir));

    Command::cargo_bin("surescan")
        .unwrap()
        .args(["run", "--once", "--config"])
        .arg(&config)
        .assert()
        .success();

    Command::cargo_bin("surescan")
        .unwrap()
        .args(["run", "--once", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No new opportunities"));
}

#[test]
fn run_fails_on_missing_config() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("surescan")
        .unwrap()
        .args(["run", "--once", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn config_validate_returns_nonzero_on_invalid_value() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(
        &dir,
        "[scan]\nbooks = [\"DraftKings\"]\nmin_roi = 1.5\n[telegram]\nenabled = false\n",
    );

    Command::cargo_bin("surescan")
        .unwrap()
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for min_roi"));
}

#[test]
fn config_validate_accepts_csv_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, &csv_config(&dir));

    Command::cargo_bin("surescan")
        .unwrap()
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn telegram_enabled_without_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir, "[scan]\nbooks = [\"DraftKings\"]\n");

    Command::cargo_bin("surescan")
        .unwrap()
        .env_remove("TELEGRAM_BOT_TOKEN")
        .env_remove("TELEGRAM_CHAT_ID")
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bot_token"));
}
