use rust_decimal::Decimal;

use crate::{
    pricing,
    types::{
        params::AuctionParameters, primitives::Timestamp, state::AuctionState, view::AuctionView,
    },
};

/// Build the display snapshot for `now`. Never fails for valid parameters.
pub fn project(params: &AuctionParameters, state: &AuctionState, now: Timestamp) -> AuctionView {
    let current_price = pricing::current_price(params, now);
    let elapsed = params.elapsed(now);
    let time_remaining = params.duration().saturating_sub(elapsed);

    AuctionView {
        current_price,
        fill_percentage: fill_percentage(params, state),
        estimated_end_price: pricing::estimated_end_price(params),
        time_remaining,
        is_active: !state.cleared && time_remaining > 0,
        phase: state.compute_phase(params, now),
        remaining_units: state.remaining_units(params),
        price_decay_percentage: pricing::price_decay_percentage(params, current_price),
    }
}

pub fn fill_percentage(params: &AuctionParameters, state: &AuctionState) -> Decimal {
    let filled = state.filled_units.min(params.unit_count());
    Decimal::from(filled) / Decimal::from(params.unit_count()) * Decimal::ONE_HUNDRED
}
