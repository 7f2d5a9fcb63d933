use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Price bands of a premium auction's 4-tier bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetThresholds {
    high_price: Decimal,
    low_price: Decimal,
}

impl BetThresholds {
    /// Validates `high > low >= 0` and, when the auction's start price is
    /// known, that both thresholds sit below it.
    pub fn new(
        high_price: Decimal,
        low_price: Decimal,
        start_price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        if low_price < Decimal::ZERO {
            return Err(ValidationError::InvalidParameters(
                "low price threshold cannot be negative",
            ));
        }

        if high_price <= low_price {
            return Err(ValidationError::InvalidParameters(
                "low price threshold must be less than high price threshold",
            ));
        }

        if let Some(start) = start_price {
            if high_price >= start {
                return Err(ValidationError::InvalidParameters(
                    "price thresholds must be below the start price",
                ));
            }
        }

        Ok(Self {
            high_price,
            low_price,
        })
    }

    pub fn high_price(&self) -> Decimal {
        self.high_price
    }

    pub fn low_price(&self) -> Decimal {
        self.low_price
    }
}
