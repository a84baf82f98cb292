//! Inbound adapters: the command line.

pub mod cli;
