//! Notifier port for delivering alert text.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// One message for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Channel-specific recipient (a Telegram chat id, for instance).
    pub recipient: String,
    /// Plain text body.
    pub text: String,
}

impl Notification {
    pub fn new(recipient: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            text: text.into(),
        }
    }
}

/// Trait for notification handlers.
///
/// A failed send is reported to the caller, which logs it and moves on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<()>;
}

/// Registry of notifiers (composite pattern).
///
/// Sends to every registered notifier. All of them are tried even if one
/// fails; the first failure is returned.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifierRegistry {
    async fn send(&self, notification: &Notification) -> Result<()> {
        let mut first_error: Option<Error> = None;
        for notifier in &self.notifiers {
            if let Err(e) = notifier.send(notification).await {
                warn!(error = %e, "Notifier failed");
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _notification: &Notification) -> Result<()> {
        Ok(())
    }
}

/// A logging notifier that writes alerts via tracing.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        info!(recipient = %notification.recipient, "{}", notification.text);
        Ok(())
    }
}
