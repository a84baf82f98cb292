//! A sized, identifiable arbitrage opportunity.

use rust_decimal::Decimal;

use super::detector::{Arbitrage, Leg};
use super::signature::OpportunitySignature;
use super::stake::StakePlan;

/// Arbitrage plus its stake plan and signature.
///
/// Lives for one evaluation only; just the signature is persisted.
#[derive(Debug, Clone)]
pub struct Opportunity {
    arbitrage: Arbitrage,
    stakes: StakePlan,
    signature: OpportunitySignature,
}

impl Opportunity {
    #[must_use]
    pub fn new(arbitrage: Arbitrage, stakes: StakePlan) -> Self {
        let signature = OpportunitySignature::new(
            arbitrage.event(),
            &arbitrage.leg_a.quote,
            &arbitrage.leg_b.quote,
            arbitrage.roi,
        );
        Self {
            arbitrage,
            stakes,
            signature,
        }
    }

    #[must_use]
    pub fn event(&self) -> &str {
        self.arbitrage.event()
    }

    #[must_use]
    pub fn leg_a(&self) -> &Leg {
        &self.arbitrage.leg_a
    }

    #[must_use]
    pub fn leg_b(&self) -> &Leg {
        &self.arbitrage.leg_b
    }

    #[must_use]
    pub fn roi(&self) -> Decimal {
        self.arbitrage.roi
    }

    #[must_use]
    pub fn stakes(&self) -> &StakePlan {
        &self.stakes
    }

    #[must_use]
    pub fn signature(&self) -> &OpportunitySignature {
        &self.signature
    }
}
