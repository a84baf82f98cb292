//! Infrastructure: configuration, wiring, and the polling runtime.

pub mod bootstrap;
pub mod config;
pub mod runtime;
