#![allow(dead_code)]

pub mod failing_store;
pub mod recording_notifier;
pub mod scripted_source;
