//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for notification backends.

#[cfg(feature = "telegram")]
pub mod telegram;
