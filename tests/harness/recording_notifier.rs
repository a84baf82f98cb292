use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use surescan::error::{Error, Result};
use surescan::port::{Notification, Notifier};

/// Thread-safe notification collector; can be told to fail every send.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.sent.lock().expect("lock notifications").len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("lock notifications")
            .iter()
            .map(|n| n.text.clone())
            .collect()
    }

    pub fn recipients(&self) -> Vec<String> {
        self.sent
            .lock()
            .expect("lock notifications")
            .iter()
            .map(|n| n.recipient.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        self.sent
            .lock()
            .expect("lock notifications")
            .push(notification.clone());
        if self.failing {
            return Err(Error::Notify("chat unreachable".into()));
        }
        Ok(())
    }
}
