use std::collections::HashSet;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use surescan::application::ScanSettings;
use surescan::domain::{DetectorConfig, Moneyline, OddsQuote};

pub const SPORT: &str = "basketball_nba";
pub const EVENT: &str = "X vs Y";

pub fn quote(event: &str, book: &str, team: &str, price: i64) -> OddsQuote {
    OddsQuote::new(
        SPORT,
        event,
        book,
        team,
        Moneyline::try_new(price).expect("valid moneyline"),
    )
}

/// Two books, each best on one side: X +150 at K, Y -120 at M.
pub fn reference_quotes() -> Vec<OddsQuote> {
    vec![
        quote(EVENT, "K", "X", 150),
        quote(EVENT, "K", "Y", -160),
        quote(EVENT, "M", "X", 120),
        quote(EVENT, "M", "Y", -120),
    ]
}

pub fn settings(books: &[&str]) -> ScanSettings {
    ScanSettings {
        bankroll: dec!(1000),
        max_stake_per_side: dec!(10000),
        allowed_sources: books.iter().map(|b| (*b).to_string()).collect::<HashSet<_>>(),
        detector: DetectorConfig::default(),
        cooldown: Duration::from_secs(120 * 60),
        recipient: "chat-1".to_string(),
    }
}

pub fn with_cap(mut settings: ScanSettings, cap: Decimal) -> ScanSettings {
    settings.max_stake_per_side = cap;
    settings
}
