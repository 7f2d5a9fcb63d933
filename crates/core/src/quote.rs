// src/quote.rs

use rust_decimal::Decimal;

use crate::{
    error::ValidationError,
    pricing,
    types::{
        bid::{BidRequest, HardBidQuote, SoftBidQuote},
        params::AuctionParameters,
        primitives::Timestamp,
        state::AuctionState,
    },
};

/// Refundable soft-bid bond: 0.2% of the maximum intended spend.
pub const SOFT_BID_BOND_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 3);

fn check_inventory(
    params: &AuctionParameters,
    state: &AuctionState,
    desired_units: u64,
) -> Result<(), ValidationError> {
    let remaining = state.remaining_units(params);

    if desired_units == 0 || desired_units > remaining {
        return Err(ValidationError::InsufficientInventory {
            requested: desired_units,
            remaining,
        });
    }

    Ok(())
}

fn check_threshold(params: &AuctionParameters, threshold: Decimal) -> Result<(), ValidationError> {
    if !params.contains_price(threshold) {
        return Err(ValidationError::InvalidThreshold {
            threshold,
            reserve_price: params.reserve_price(),
            start_price: params.start_price(),
        });
    }

    Ok(())
}

/// Cost of buying `desired_units` right now.
pub fn hard_bid_cost(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
    desired_units: u64,
) -> Result<Decimal, ValidationError> {
    check_inventory(params, state, desired_units)?;
    pricing::current_price(params, now)
        .checked_mul(Decimal::from(desired_units))
        .ok_or(ValidationError::AmountOverflow)
}

pub fn soft_bid_bond(
    params: &AuctionParameters,
    threshold_price: Decimal,
    desired_units: u64,
) -> Result<Decimal, ValidationError> {
    check_threshold(params, threshold_price)?;
    Ok(soft_bid_max_payment(threshold_price, desired_units)? * SOFT_BID_BOND_RATE)
}

/// Upper bound a soft bid can convert at.
pub fn soft_bid_max_payment(
    threshold_price: Decimal,
    desired_units: u64,
) -> Result<Decimal, ValidationError> {
    threshold_price
        .checked_mul(Decimal::from(desired_units))
        .ok_or(ValidationError::AmountOverflow)
}

/// Units bought by a `percent` share of the bundle, rounded down.
pub fn units_for_fraction(unit_count: u64, percent: u8) -> Result<u64, ValidationError> {
    if percent > 100 {
        return Err(ValidationError::InvalidParameters(
            "fraction must be between 0 and 100 percent",
        ));
    }

    Ok(unit_count.saturating_mul(u64::from(percent)) / 100)
}

pub fn quote_hard_bid(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
    desired_units: u64,
) -> Result<HardBidQuote, ValidationError> {
    let cost = hard_bid_cost(params, state, now, desired_units)?;

    Ok(HardBidQuote {
        unit_price: pricing::current_price(params, now),
        units: desired_units,
        cost,
    })
}

pub fn quote_soft_bid(
    params: &AuctionParameters,
    state: &AuctionState,
    request: &BidRequest,
) -> Result<SoftBidQuote, ValidationError> {
    let threshold = request
        .threshold_price
        .ok_or(ValidationError::InvalidParameters(
            "soft bid requires a threshold price",
        ))?;

    check_inventory(params, state, request.desired_units)?;
    let bond = soft_bid_bond(params, threshold, request.desired_units)?;

    Ok(SoftBidQuote {
        threshold,
        units: request.desired_units,
        bond,
        max_payment: soft_bid_max_payment(threshold, request.desired_units)?,
    })
}

/// Quote either kind of bid from a [`BidRequest`].
pub fn quote(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
    request: &BidRequest,
) -> Result<Quote, ValidationError> {
    if request.is_soft() {
        quote_soft_bid(params, state, request).map(Quote::Soft)
    } else {
        quote_hard_bid(params, state, now, request.desired_units).map(Quote::Hard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Hard(HardBidQuote),
    Soft(SoftBidQuote),
}

impl Quote {
    /// Amount to attach as the transaction value.
    pub fn value(&self) -> Decimal {
        match self {
            Quote::Hard(q) => q.cost,
            Quote::Soft(q) => q.max_payment,
        }
    }
}
