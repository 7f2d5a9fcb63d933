// src/pricing.rs

use rust_decimal::Decimal;

use crate::{
    error::ValidationError,
    types::{params::AuctionParameters, primitives::Timestamp},
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Unit price at `now`. Times before the start or after the end are clamped,
/// so the result always lies in `[reserve_price, start_price]`.
pub fn current_price(params: &AuctionParameters, now: Timestamp) -> Decimal {
    price_at_elapsed(params, Decimal::from(params.elapsed(now)))
}

/// Unit price after `elapsed` seconds, which may be fractional.
pub fn price_at_elapsed(params: &AuctionParameters, elapsed: Decimal) -> Decimal {
    let elapsed = elapsed
        .max(Decimal::ZERO)
        .min(Decimal::from(params.duration()));

    params
        .price_decrement()
        .checked_mul(elapsed)
        .and_then(|drop| params.start_price().checked_sub(drop))
        .map_or(params.reserve_price(), |raw| raw.max(params.reserve_price()))
}

/// Seconds after the start at which the price reaches `target_price`.
///
/// The answer may exceed the auction's duration when the reserve or the
/// end of the auction comes first; callers compare against `duration`.
pub fn time_to_reach_price(
    params: &AuctionParameters,
    target_price: Decimal,
) -> Result<Decimal, ValidationError> {
    if !params.contains_price(target_price) {
        return Err(ValidationError::InvalidThreshold {
            threshold: target_price,
            reserve_price: params.reserve_price(),
            start_price: params.start_price(),
        });
    }

    (params.start_price() - target_price)
        .checked_div(params.price_decrement())
        .ok_or(ValidationError::AmountOverflow)
}

/// Whether `target_price` is reached before the auction runs out of time.
pub fn reaches_within_duration(
    params: &AuctionParameters,
    target_price: Decimal,
) -> Result<bool, ValidationError> {
    let t = time_to_reach_price(params, target_price)?;
    Ok(t <= Decimal::from(params.duration()))
}

/// Price once the whole duration has elapsed.
pub fn estimated_end_price(params: &AuctionParameters) -> Decimal {
    price_at_elapsed(params, Decimal::from(params.duration()))
}

/// How far `price` has decayed from the start towards the reserve, 0..=100.
pub fn price_decay_percentage(params: &AuctionParameters, price: Decimal) -> Decimal {
    let span = params.start_price() - params.reserve_price();
    let decayed = (params.start_price() - price)
        .max(Decimal::ZERO)
        .min(span);

    decayed / span * HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> AuctionParameters {
        AuctionParameters::new(
            Decimal::from(1000),
            Decimal::from(700),
            Decimal::ONE,
            Timestamp::new(10_000),
            300,
            100,
        )
        .expect("valid params")
    }

    fn at(offset: u64) -> Timestamp {
        Timestamp::new(10_000 + offset)
    }

    #[test]
    fn halfway_price() {
        assert_eq!(current_price(&params(), at(150)), Decimal::from(850));
    }

    #[test]
    fn starts_at_start_price_and_clamps_before_start() {
        let p = params();
        assert_eq!(current_price(&p, at(0)), Decimal::from(1000));
        assert_eq!(current_price(&p, Timestamp::new(0)), Decimal::from(1000));
    }

    #[test]
    fn end_price_is_floored_at_reserve() {
        let p = params();
        assert_eq!(current_price(&p, at(300)), Decimal::from(700));
        assert_eq!(current_price(&p, at(50_000)), Decimal::from(700));
        assert_eq!(estimated_end_price(&p), Decimal::from(700));

        let steep = AuctionParameters::new(
            Decimal::from(1000),
            Decimal::from(700),
            Decimal::from(5),
            Timestamp::new(0),
            300,
            1,
        )
        .unwrap();
        assert_eq!(current_price(&steep, Timestamp::new(300)), Decimal::from(700));
        assert_eq!(current_price(&steep, Timestamp::new(59)), Decimal::from(705));
    }

    #[test]
    fn end_price_above_reserve_when_decay_is_slow() {
        let slow = AuctionParameters::new(
            Decimal::from(1000),
            Decimal::from(100),
            Decimal::ONE,
            Timestamp::new(0),
            300,
            1,
        )
        .unwrap();
        assert_eq!(estimated_end_price(&slow), Decimal::from(700));
        assert_eq!(current_price(&slow, Timestamp::new(300)), Decimal::from(700));
    }

    #[test]
    fn price_never_increases() {
        let p = params();
        let mut last = current_price(&p, at(0));
        for t in 1..=400 {
            let price = current_price(&p, at(t));
            assert!(price <= last, "price rose at t={t}");
            assert!(price >= p.reserve_price() && price <= p.start_price());
            last = price;
        }
    }

    #[test]
    fn time_to_reach_price_round_trips() {
        let p = AuctionParameters::new(
            Decimal::new(15, 1),
            Decimal::new(25, 2),
            Decimal::new(3, 3),
            Timestamp::new(0),
            1_000,
            1,
        )
        .unwrap();

        for target in [
            Decimal::new(15, 1),
            Decimal::new(1234, 3),
            Decimal::new(7, 1),
            Decimal::new(25, 2),
        ] {
            let t = time_to_reach_price(&p, target).unwrap();
            let back = price_at_elapsed(&p, t);
            assert!((back - target).abs() < Decimal::new(1, 20), "{target} -> {back}");
        }
    }

    #[test]
    fn time_to_reach_price_can_outlast_the_auction() {
        let slow = AuctionParameters::new(
            Decimal::from(1000),
            Decimal::from(100),
            Decimal::ONE,
            Timestamp::new(0),
            300,
            1,
        )
        .unwrap();

        assert_eq!(
            time_to_reach_price(&slow, Decimal::from(200)).unwrap(),
            Decimal::from(800)
        );
        assert!(!reaches_within_duration(&slow, Decimal::from(200)).unwrap());
        assert!(reaches_within_duration(&slow, Decimal::from(800)).unwrap());
    }

    #[test]
    fn rejects_targets_outside_the_curve() {
        let p = params();
        assert!(matches!(
            time_to_reach_price(&p, Decimal::from(699)),
            Err(ValidationError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            time_to_reach_price(&p, Decimal::from(1001)),
            Err(ValidationError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn tiny_decrement_overflows_instead_of_panicking() {
        let p = AuctionParameters::new(
            Decimal::from_i128_with_scale(10_000_000_000_000_000_000_000_000_000, 0),
            Decimal::ZERO,
            Decimal::new(1, 27),
            Timestamp::new(0),
            300,
            1,
        )
        .unwrap();

        assert_eq!(
            time_to_reach_price(&p, Decimal::ZERO),
            Err(ValidationError::AmountOverflow)
        );
        assert!(current_price(&p, Timestamp::new(300)) <= p.start_price());
    }

    #[test]
    fn decay_percentage() {
        let p = params();
        assert_eq!(price_decay_percentage(&p, Decimal::from(1000)), Decimal::ZERO);
        assert_eq!(price_decay_percentage(&p, Decimal::from(850)), Decimal::from(50));
        assert_eq!(price_decay_percentage(&p, Decimal::from(700)), Decimal::from(100));
    }
}
