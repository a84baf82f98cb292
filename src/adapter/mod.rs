//! Adapters: concrete implementations of the ports, plus the CLI.

pub mod inbound;
pub mod outbound;
