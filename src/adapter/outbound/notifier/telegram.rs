//! Telegram alert delivery.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::info;

use crate::error::{Error, Result};
use crate::port::{Notification, Notifier};

/// Credentials for the Telegram bot.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for alerts.
    pub chat_id: String,
}

/// Sends alert text to a Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        info!(chat_id = %config.chat_id, "Telegram notifier started");
        Self {
            bot: Bot::new(&config.bot_token),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        self.bot
            .send_message(recipient(&notification.recipient), &notification.text)
            .await
            .map_err(|e| Error::Notify(e.to_string()))?;
        Ok(())
    }
}

/// Numeric ids are chats; anything else is treated as a `@channel` name.
fn recipient(raw: &str) -> Recipient {
    match raw.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(raw.trim().to_string()),
    }
}
