use rust_decimal::Decimal;

use crate::{
    error::ValidationError,
    quote,
    types::{
        bid::BidRequest,
        params::AuctionParameters,
        primitives::Timestamp,
        state::AuctionState,
        thresholds::BetThresholds,
    },
};

fn ensure_biddable(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
) -> Result<(), ValidationError> {
    if !state.can_bid(params, now) {
        return Err(ValidationError::AuctionNotActive);
    }

    Ok(())
}

pub fn validate_hard_bid(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
    desired_units: u64,
) -> Result<(), ValidationError> {
    ensure_biddable(params, state, now)?;
    quote::hard_bid_cost(params, state, now, desired_units)?;

    Ok(())
}

pub fn validate_soft_bid(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
    threshold_price: Decimal,
    desired_units: u64,
) -> Result<(), ValidationError> {
    ensure_biddable(params, state, now)?;
    quote::quote_soft_bid(
        params,
        state,
        &BidRequest::soft(desired_units, threshold_price),
    )?;

    Ok(())
}

pub fn validate_bid(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
    request: &BidRequest,
) -> Result<(), ValidationError> {
    match request.threshold_price {
        Some(threshold) => {
            validate_soft_bid(params, state, now, threshold, request.desired_units)
        }
        None => validate_hard_bid(params, state, now, request.desired_units),
    }
}

/// Premium auctions take a single bid at the live price.
pub fn validate_premium_bid(
    params: &AuctionParameters,
    state: &AuctionState,
    now: Timestamp,
) -> Result<(), ValidationError> {
    validate_hard_bid(params, state, now, 1)
}

/// Commits are only meaningful on auctions that carry a betting band.
pub fn validate_commit_bet(
    thresholds: Option<&BetThresholds>,
    amount: Decimal,
) -> Result<(), ValidationError> {
    if thresholds.is_none() {
        return Err(ValidationError::InvalidParameters(
            "auction has no betting thresholds",
        ));
    }

    if amount <= Decimal::ZERO {
        return Err(ValidationError::InvalidParameters(
            "bet amount must be greater than 0",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AuctionParameters {
        AuctionParameters::new(
            Decimal::from(1000),
            Decimal::from(400),
            Decimal::from(2),
            Timestamp::new(100),
            300,
            10,
        )
        .expect("valid params")
    }

    #[test]
    fn rejects_bids_outside_the_live_window() {
        let p = params();
        let open = AuctionState::open(0);

        assert_eq!(
            validate_hard_bid(&p, &open, Timestamp::new(99), 1),
            Err(ValidationError::AuctionNotActive)
        );
        assert_eq!(
            validate_hard_bid(&p, &open, Timestamp::new(400), 1),
            Err(ValidationError::AuctionNotActive)
        );
        assert_eq!(
            validate_hard_bid(
                &p,
                &AuctionState::cleared(10, Some(Decimal::from(900))),
                Timestamp::new(150),
                1
            ),
            Err(ValidationError::AuctionNotActive)
        );
        assert!(validate_hard_bid(&p, &open, Timestamp::new(100), 1).is_ok());
    }

    #[test]
    fn live_auction_falls_through_to_calculator_checks() {
        let p = params();
        let state = AuctionState::open(8);
        let now = Timestamp::new(200);

        assert!(matches!(
            validate_hard_bid(&p, &state, now, 3),
            Err(ValidationError::InsufficientInventory { .. })
        ));
        assert!(matches!(
            validate_soft_bid(&p, &state, now, Decimal::from(300), 1),
            Err(ValidationError::InvalidThreshold { .. })
        ));
        assert!(validate_soft_bid(&p, &state, now, Decimal::from(500), 2).is_ok());
        assert!(validate_bid(&p, &state, now, &BidRequest::hard(2)).is_ok());
    }

    #[test]
    fn premium_bid_needs_the_single_unit() {
        let p = AuctionParameters::new(
            Decimal::from(10),
            Decimal::ONE,
            Decimal::new(1, 2),
            Timestamp::new(0),
            3_600,
            1,
        )
        .expect("valid params");

        assert!(validate_premium_bid(&p, &AuctionState::open(0), Timestamp::new(10)).is_ok());
        assert_eq!(
            validate_premium_bid(
                &p,
                &AuctionState::cleared(1, Some(Decimal::from(5))),
                Timestamp::new(10)
            ),
            Err(ValidationError::AuctionNotActive)
        );
    }

    #[test]
    fn commit_requires_band_and_stake() {
        let band = BetThresholds::new(Decimal::from(8), Decimal::from(6), None).unwrap();

        assert!(validate_commit_bet(Some(&band), Decimal::ONE).is_ok());
        assert!(validate_commit_bet(None, Decimal::ONE).is_err());
        assert!(validate_commit_bet(Some(&band), Decimal::ZERO).is_err());
    }
}
