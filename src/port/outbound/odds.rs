//! Odds source port.

use async_trait::async_trait;

use crate::domain::OddsQuote;
use crate::error::Result;

/// Produces normalized quotes for one polling pass.
///
/// Implementations skip malformed records themselves. A whole-pass failure
/// is reported as [`crate::error::FetchError`], with rate limiting as its
/// own variant.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Fetch every quote currently on offer.
    async fn fetch(&self) -> Result<Vec<OddsQuote>>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}
