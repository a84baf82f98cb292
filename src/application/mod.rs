//! Application layer: alert formatting and the scan cycle.

pub mod alert;
pub mod cycle;

pub use alert::format_alert;
pub use cycle::{detect, CycleReport, EmittedAlert, ScanCycle, ScanSettings};
