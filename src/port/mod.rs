//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                  ┌─────────────────────────┐
//!                  │      Application        │
//!     ┌────────────┤  scan cycle + domain    ├────────────┐
//!     │            └─────────────────────────┘            │
//!     ▼                        ▼                          ▼
//! ┌──────────┐          ┌─────────────┐            ┌───────────┐
//! │  Odds    │          │ Dedup store │            │ Notifier  │
//! │  source  │          │   adapter   │            │  adapter  │
//! └──────────┘          └─────────────┘            └───────────┘
//! ```

pub mod outbound;

pub use outbound::notifier::{LogNotifier, Notification, Notifier, NotifierRegistry, NullNotifier};
pub use outbound::odds::OddsSource;
pub use outbound::store::{DedupStore, MemoryStore};
