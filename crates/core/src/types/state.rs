use rust_decimal::Decimal;

use super::{params::AuctionParameters, primitives::Timestamp};

/// Lifecycle of an auction as reported by its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionPhase {
    Pending { seconds_until_start: u64 },
    Active { seconds_remaining: u64 },
    Cleared,
    Expired,
}

impl AuctionPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AuctionPhase::Cleared | AuctionPhase::Expired)
    }
}

/// Mutable sale progress, owned by the contract and copied in per read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionState {
    pub filled_units: u64,
    pub cleared: bool,
    pub final_price: Option<Decimal>,
}

impl AuctionState {
    pub fn open(filled_units: u64) -> Self {
        Self {
            filled_units,
            cleared: false,
            final_price: None,
        }
    }

    pub fn cleared(filled_units: u64, final_price: Option<Decimal>) -> Self {
        Self {
            filled_units,
            cleared: true,
            final_price,
        }
    }

    pub fn remaining_units(&self, params: &AuctionParameters) -> u64 {
        params.unit_count().saturating_sub(self.filled_units)
    }

    pub fn compute_phase(&self, params: &AuctionParameters, now: Timestamp) -> AuctionPhase {
        let start = params.start_time();
        let end = params.end_time();

        if self.cleared {
            AuctionPhase::Cleared
        } else if now < start {
            AuctionPhase::Pending {
                seconds_until_start: start.seconds_since(now),
            }
        } else if now < end {
            AuctionPhase::Active {
                seconds_remaining: end.seconds_since(now),
            }
        } else {
            AuctionPhase::Expired
        }
    }

    pub fn can_bid(&self, params: &AuctionParameters, now: Timestamp) -> bool {
        let active = matches!(self.compute_phase(params, now), AuctionPhase::Active { .. });
        active && self.remaining_units(params) > 0
    }
}

/// Commit-reveal pool attached to a premium auction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingPool {
    pub commit_deadline: Timestamp,
    pub reveal_deadline: Timestamp,
    pub total_pool: Decimal,
    pub settled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BettingPhase {
    Commit,
    Reveal,
    AwaitingSettlement,
    Settled,
}
