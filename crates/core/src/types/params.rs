use rust_decimal::Decimal;

use super::primitives::Timestamp;
use crate::error::ValidationError;

/// Immutable pricing schedule of a Dutch auction, in canonical units:
/// prices in whole native currency, `price_decrement` per second,
/// `duration` in seconds.
///
/// Only constructible through [`AuctionParameters::new`], so every value of
/// this type satisfies `start_price > reserve_price >= 0`,
/// `price_decrement > 0`, `duration > 0` and `unit_count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionParameters {
    start_price: Decimal,
    reserve_price: Decimal,
    price_decrement: Decimal,
    start_time: Timestamp,
    duration: u64,
    unit_count: u64,
}

impl AuctionParameters {
    pub fn new(
        start_price: Decimal,
        reserve_price: Decimal,
        price_decrement: Decimal,
        start_time: Timestamp,
        duration: u64,
        unit_count: u64,
    ) -> Result<Self, ValidationError> {
        if reserve_price < Decimal::ZERO {
            return Err(ValidationError::InvalidParameters(
                "reserve price cannot be negative",
            ));
        }

        if start_price <= reserve_price {
            return Err(ValidationError::InvalidParameters(
                "start price must be greater than reserve price",
            ));
        }

        if price_decrement <= Decimal::ZERO {
            return Err(ValidationError::InvalidParameters(
                "price decrement must be greater than zero",
            ));
        }

        if duration == 0 {
            return Err(ValidationError::InvalidParameters(
                "duration must be greater than zero",
            ));
        }

        if unit_count == 0 {
            return Err(ValidationError::InvalidParameters(
                "auction must offer at least one unit",
            ));
        }

        Ok(Self {
            start_price,
            reserve_price,
            price_decrement,
            start_time,
            duration,
            unit_count,
        })
    }

    pub fn start_price(&self) -> Decimal {
        self.start_price
    }

    pub fn reserve_price(&self) -> Decimal {
        self.reserve_price
    }

    pub fn price_decrement(&self) -> Decimal {
        self.price_decrement
    }

    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn unit_count(&self) -> u64 {
        self.unit_count
    }

    pub fn end_time(&self) -> Timestamp {
        self.start_time.plus(self.duration)
    }

    /// Seconds since start, clamped to `[0, duration]`.
    pub fn elapsed(&self, now: Timestamp) -> u64 {
        now.seconds_since(self.start_time).min(self.duration)
    }

    pub fn contains_price(&self, price: Decimal) -> bool {
        price >= self.reserve_price && price <= self.start_price
    }
}
