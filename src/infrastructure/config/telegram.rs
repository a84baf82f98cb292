//! Telegram notification configuration.

use serde::{Deserialize, Deserializer};

const fn default_true() -> bool {
    true
}

/// Telegram notification configuration.
///
/// Credentials may also come from `TELEGRAM_BOT_TOKEN` and
/// `TELEGRAM_CHAT_ID`, which win over the file.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Send alerts to Telegram. When false alerts are only logged.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub bot_token: Option<String>,
    /// Chat id (number) or `@channel` name.
    #[serde(default, deserialize_with = "deserialize_chat_id")]
    pub chat_id: Option<String>,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            bot_token: None,
            chat_id: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChatId {
    Number(i64),
    Text(String),
}

fn deserialize_chat_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawChatId>::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawChatId::Number(n) => n.to_string(),
        RawChatId::Text(s) => s,
    }))
}
