//! Dedup cache persistence adapters.

mod json;

pub use json::JsonFileStore;
