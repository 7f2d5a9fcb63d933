use std::fmt;

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;

use super::{primitives::TokenId, thresholds::BetThresholds};
use crate::{
    error::ConversionError,
    units::{ContractUnits, TimeBase, to_wei},
};

pub const MIN_BATCH_DURATION_MINUTES: u64 = 10;
pub const MAX_BATCH_DURATION_MINUTES: u64 = 10_000;
pub const MAX_BPS: u64 = 10_000;

/// Every problem found in a draft, keyed by the field it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftErrors(Vec<(&'static str, &'static str)>);

impl DraftErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push((field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| *message)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, &'static str)> {
        self.0.iter()
    }

    fn into_result(self) -> Result<(), DraftErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for DraftErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl std::error::Error for DraftErrors {}

fn check_prices(
    errors: &mut DraftErrors,
    start_price: Decimal,
    reserve_price: Decimal,
    price_decrement: Decimal,
) {
    if start_price <= Decimal::ZERO {
        errors.push("start_price", "Start price must be greater than 0");
    }

    if reserve_price <= Decimal::ZERO {
        errors.push("reserve_price", "Reserve price must be greater than 0");
    } else if start_price <= reserve_price {
        errors.push("reserve_price", "Reserve price must be less than start price");
    }

    if price_decrement <= Decimal::ZERO {
        errors.push("price_decrement", "Price decrement must be greater than 0");
    }
}

/// Creation form of a hybrid batch auction. Prices are per token, the
/// decrement is per minute and the duration is in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchAuctionDraft {
    pub token_ids: Vec<TokenId>,
    pub start_price: Decimal,
    pub reserve_price: Decimal,
    pub price_decrement: Decimal,
    pub duration_minutes: u64,
    pub reward_budget_bps: u64,
    pub royalty_increment_bps: u64,
    pub payment_token: Address,
}

/// Arguments of `createBatchAuction`, already in contract units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchAuctionArgs {
    pub token_ids: Vec<U256>,
    pub start_price: U256,
    pub reserve_price: U256,
    pub price_decrement: U256,
    pub duration: U256,
    pub reward_budget_bps: U256,
    pub royalty_increment: U256,
    pub payment_token: Address,
}

impl BatchAuctionDraft {
    pub fn validate(&self) -> Result<(), DraftErrors> {
        let mut errors = DraftErrors::default();

        if self.token_ids.is_empty() {
            errors.push("token_ids", "Token IDs are required");
        } else if self.token_ids.iter().any(TokenId::is_zero) {
            errors.push("token_ids", "All token IDs must be valid positive numbers");
        }

        check_prices(
            &mut errors,
            self.start_price,
            self.reserve_price,
            self.price_decrement,
        );

        if !(MIN_BATCH_DURATION_MINUTES..=MAX_BATCH_DURATION_MINUTES)
            .contains(&self.duration_minutes)
        {
            errors.push("duration", "Duration must be between 10 and 10,000 minutes");
        }

        if self.reward_budget_bps > MAX_BPS {
            errors.push("reward_budget_bps", "Reward budget cannot exceed 100%");
        }

        if self.royalty_increment_bps > MAX_BPS {
            errors.push("royalty_increment_bps", "Royalty increment cannot exceed 100%");
        }

        errors.into_result()
    }

    pub fn to_contract_args(
        &self,
        units: &ContractUnits,
    ) -> Result<BatchAuctionArgs, ConversionError> {
        let duration_secs = TimeBase::Minutes.to_seconds(self.duration_minutes);
        let decrement = units
            .price_decrement
            .convert_rate(self.price_decrement, TimeBase::Minutes)?;

        Ok(BatchAuctionArgs {
            token_ids: self.token_ids.iter().map(TokenId::as_u256).collect(),
            start_price: to_wei(self.start_price)?,
            reserve_price: to_wei(self.reserve_price)?,
            price_decrement: to_wei(decrement)?,
            duration: U256::from(units.duration.from_seconds(duration_secs)),
            reward_budget_bps: U256::from(self.reward_budget_bps),
            royalty_increment: U256::from(self.royalty_increment_bps),
            payment_token: self.payment_token,
        })
    }

    pub fn bundle_start_value(&self) -> Decimal {
        self.start_price
            .saturating_mul(Decimal::from(self.token_ids.len()))
    }

    pub fn bundle_reserve_value(&self) -> Decimal {
        self.reserve_price
            .saturating_mul(Decimal::from(self.token_ids.len()))
    }
}

/// Creation form of a premium single-domain auction. The decrement is per
/// minute and the duration in hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumAuctionDraft {
    pub token_id: TokenId,
    pub start_price: Decimal,
    pub reserve_price: Decimal,
    pub price_decrement: Decimal,
    pub duration_hours: u64,
    pub betting: Option<(Decimal, Decimal)>,
}

/// Arguments of `createAuctionBetting`, already in contract units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumAuctionArgs {
    pub token_id: U256,
    pub start_price: U256,
    pub reserve_price: U256,
    pub price_decrement: U256,
    pub duration: U256,
    pub high_price: U256,
    pub low_price: U256,
}

impl PremiumAuctionDraft {
    pub fn validate(&self) -> Result<(), DraftErrors> {
        let mut errors = DraftErrors::default();

        if self.token_id.is_zero() {
            errors.push("token_id", "Token ID is required");
        }

        check_prices(
            &mut errors,
            self.start_price,
            self.reserve_price,
            self.price_decrement,
        );

        if self.duration_hours == 0 {
            errors.push("duration", "Duration must be at least one hour");
        }

        if let Some((high, low)) = self.betting {
            if high <= Decimal::ZERO {
                errors.push("high_price", "High price threshold is required for betting");
            }
            if low <= Decimal::ZERO {
                errors.push("low_price", "Low price threshold is required for betting");
            } else if BetThresholds::new(high, low, None).is_err() {
                errors.push("low_price", "Low price must be less than high price");
            }
            if high >= self.start_price {
                errors.push("high_price", "High price must be below the start price");
            }
        }

        errors.into_result()
    }

    /// Without betting both thresholds are sent as zero.
    pub fn to_contract_args(
        &self,
        units: &ContractUnits,
    ) -> Result<PremiumAuctionArgs, ConversionError> {
        let duration_secs = TimeBase::Hours.to_seconds(self.duration_hours);
        let decrement = units
            .price_decrement
            .convert_rate(self.price_decrement, TimeBase::Minutes)?;
        let (high, low) = self.betting.unwrap_or((Decimal::ZERO, Decimal::ZERO));

        Ok(PremiumAuctionArgs {
            token_id: self.token_id.as_u256(),
            start_price: to_wei(self.start_price)?,
            reserve_price: to_wei(self.reserve_price)?,
            price_decrement: to_wei(decrement)?,
            duration: U256::from(units.duration.from_seconds(duration_secs)),
            high_price: to_wei(high)?,
            low_price: to_wei(low)?,
        })
    }
}
