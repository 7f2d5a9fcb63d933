use rust_decimal::Decimal;

use crate::{
    error::ValidationError,
    types::{
        primitives::Timestamp,
        state::{AuctionState, BettingPhase, BettingPool},
        thresholds::BetThresholds,
    },
};

/// Outcome bucket of a premium auction's final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BetCategory {
    /// The auction never cleared.
    Uncleared = 0,
    /// Cleared below the low threshold.
    BelowLow = 1,
    /// Cleared within `[low, high]`.
    WithinBand = 2,
    /// Cleared above the high threshold.
    AboveHigh = 3,
}

impl BetCategory {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Categories a bettor can commit to; `Uncleared` is not a choice.
    pub fn is_choice(self) -> bool {
        !matches!(self, BetCategory::Uncleared)
    }
}

impl TryFrom<u8> for BetCategory {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BetCategory::Uncleared),
            1 => Ok(BetCategory::BelowLow),
            2 => Ok(BetCategory::WithinBand),
            3 => Ok(BetCategory::AboveHigh),
            _ => Err(ValidationError::InvalidParameters(
                "bet category must be between 0 and 3",
            )),
        }
    }
}

pub fn categorize(final_price: Decimal, thresholds: &BetThresholds, cleared: bool) -> BetCategory {
    if !cleared {
        BetCategory::Uncleared
    } else if final_price > thresholds.high_price() {
        BetCategory::AboveHigh
    } else if final_price >= thresholds.low_price() {
        BetCategory::WithinBand
    } else {
        BetCategory::BelowLow
    }
}

/// Categorize from contract state. A cleared auction that reports no final
/// price is treated as uncleared.
pub fn categorize_state(state: &AuctionState, thresholds: &BetThresholds) -> BetCategory {
    match state.final_price {
        Some(price) if state.cleared => categorize(price, thresholds, true),
        _ => BetCategory::Uncleared,
    }
}

pub fn betting_phase(pool: &BettingPool, now: Timestamp) -> BettingPhase {
    if pool.settled {
        BettingPhase::Settled
    } else if now < pool.commit_deadline {
        BettingPhase::Commit
    } else if now < pool.reveal_deadline {
        BettingPhase::Reveal
    } else {
        BettingPhase::AwaitingSettlement
    }
}
