use rust_decimal::Decimal;

use super::state::AuctionPhase;

/// Display snapshot of an auction at one instant, rebuilt on every poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionView {
    pub current_price: Decimal,
    pub fill_percentage: Decimal,
    pub estimated_end_price: Decimal,
    pub time_remaining: u64,
    pub is_active: bool,
    pub phase: AuctionPhase,
    pub remaining_units: u64,
    pub price_decay_percentage: Decimal,
}
