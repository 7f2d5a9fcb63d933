// src/units.rs

use alloy::primitives::U256;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::error::ConversionError;

/// Native currency decimals (DOMA / ETH).
pub const NATIVE_DECIMALS: u32 = 18;

/// Default block time of the Doma testnet.
pub const DEFAULT_BLOCK_TIME_SECS: u64 = 2;

/// Convert a whole-unit amount to wei. Digits beyond 18 decimals are
/// truncated.
pub fn to_wei(amount: Decimal) -> Result<U256, ConversionError> {
    if amount < Decimal::ZERO {
        return Err(ConversionError::Negative(amount));
    }

    let truncated = amount.round_dp_with_strategy(NATIVE_DECIMALS, RoundingStrategy::ToZero);
    let scale = Decimal::from(10u64.pow(NATIVE_DECIMALS));

    let wei = truncated
        .checked_mul(scale)
        .and_then(|v| v.to_u128())
        .ok_or(ConversionError::Overflow)?;

    Ok(U256::from(wei))
}

/// Convert wei back to a whole-unit decimal.
pub fn from_wei(wei: U256) -> Result<Decimal, ConversionError> {
    let raw: u128 = wei.try_into().map_err(|_| ConversionError::Overflow)?;
    let raw = i128::try_from(raw).map_err(|_| ConversionError::Overflow)?;

    Decimal::try_from_i128_with_scale(raw, NATIVE_DECIMALS)
        .map(|d| d.normalize())
        .map_err(|_| ConversionError::Overflow)
}

pub fn to_u64(value: U256) -> Result<u64, ConversionError> {
    value.try_into().map_err(|_| ConversionError::Overflow)
}

/// Time unit a contract field is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBase {
    Seconds,
    Minutes,
    Hours,
    Blocks { block_time: u64 },
}

impl TimeBase {
    pub fn seconds_per_unit(&self) -> u64 {
        match self {
            TimeBase::Seconds => 1,
            TimeBase::Minutes => 60,
            TimeBase::Hours => 3_600,
            TimeBase::Blocks { block_time } => (*block_time).max(1),
        }
    }

    pub fn to_seconds(&self, count: u64) -> u64 {
        count.saturating_mul(self.seconds_per_unit())
    }

    /// Whole units that fit in `seconds`, rounded down.
    pub fn from_seconds(&self, seconds: u64) -> u64 {
        seconds / self.seconds_per_unit()
    }

    /// Rate charged per one of these units, expressed per second.
    pub fn rate_per_second(&self, rate: Decimal) -> Decimal {
        rate / Decimal::from(self.seconds_per_unit())
    }

    /// Re-express a rate given per `from` unit as a rate per `self` unit.
    pub fn convert_rate(
        &self,
        rate: Decimal,
        from: TimeBase,
    ) -> Result<Decimal, ConversionError> {
        rate.checked_mul(Decimal::from(self.seconds_per_unit()))
            .map(|scaled| scaled / Decimal::from(from.seconds_per_unit()))
            .ok_or(ConversionError::Overflow)
    }
}

/// Time bases a particular auction contract uses for `duration` and
/// `priceDecrement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractUnits {
    pub duration: TimeBase,
    pub price_decrement: TimeBase,
}

impl ContractUnits {
    /// Hybrid batch auction: both fields are counted in blocks.
    pub fn hybrid(block_time: u64) -> Self {
        let blocks = TimeBase::Blocks { block_time };
        Self {
            duration: blocks,
            price_decrement: blocks,
        }
    }

    /// Premium auction: duration in seconds, decrement per minute.
    pub fn premium() -> Self {
        Self {
            duration: TimeBase::Seconds,
            price_decrement: TimeBase::Minutes,
        }
    }
}

impl Default for ContractUnits {
    fn default() -> Self {
        Self::hybrid(DEFAULT_BLOCK_TIME_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wei_conversions() {
        assert_eq!(
            to_wei(Decimal::new(15, 1)).unwrap(),
            U256::from(1_500_000_000_000_000_000u128)
        );
        assert_eq!(to_wei(Decimal::ZERO).unwrap(), U256::ZERO);
        assert_eq!(
            from_wei(U256::from(250_000_000_000_000_000u128)).unwrap(),
            Decimal::new(25, 2)
        );
        assert_eq!(
            to_wei(Decimal::from(-1)),
            Err(ConversionError::Negative(Decimal::from(-1)))
        );
        assert_eq!(from_wei(U256::MAX), Err(ConversionError::Overflow));
    }

    #[test]
    fn truncates_sub_wei_digits() {
        let third = Decimal::ONE / Decimal::from(3);
        assert_eq!(
            to_wei(third).unwrap(),
            U256::from(333_333_333_333_333_333u128)
        );
    }

    #[test]
    fn time_bases() {
        let blocks = TimeBase::Blocks { block_time: 2 };
        assert_eq!(blocks.to_seconds(150), 300);
        assert_eq!(blocks.from_seconds(301), 150);
        assert_eq!(TimeBase::Hours.to_seconds(2), 7_200);
        assert_eq!(blocks.rate_per_second(Decimal::from(4)), Decimal::from(2));
        assert_eq!(
            blocks.convert_rate(Decimal::new(3, 2), TimeBase::Minutes),
            Ok(Decimal::new(1, 3))
        );
        assert_eq!(
            TimeBase::Hours.convert_rate(Decimal::MAX, TimeBase::Seconds),
            Err(ConversionError::Overflow)
        );
        assert_eq!(TimeBase::Blocks { block_time: 0 }.seconds_per_unit(), 1);
    }
}
