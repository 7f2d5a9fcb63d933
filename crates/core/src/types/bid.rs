use rust_decimal::Decimal;

/// A bid intent from the user; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidRequest {
    pub desired_units: u64,
    pub threshold_price: Option<Decimal>,
}

impl BidRequest {
    pub fn hard(desired_units: u64) -> Self {
        Self {
            desired_units,
            threshold_price: None,
        }
    }

    pub fn soft(desired_units: u64, threshold_price: Decimal) -> Self {
        Self {
            desired_units,
            threshold_price: Some(threshold_price),
        }
    }

    pub fn is_soft(&self) -> bool {
        self.threshold_price.is_some()
    }
}

/// Immediate purchase at the current price. `cost` is the transaction value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardBidQuote {
    pub unit_price: Decimal,
    pub units: u64,
    pub cost: Decimal,
}

/// Conditional purchase that converts once the price reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftBidQuote {
    pub threshold: Decimal,
    pub units: u64,
    pub bond: Decimal,
    pub max_payment: Decimal,
}
