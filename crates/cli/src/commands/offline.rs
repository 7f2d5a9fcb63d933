use doma_core::{
    AuctionParameters, AuctionState, AuctionView, BetCategory, BetThresholds, BidRequest, Quote,
    Timestamp, ValidationError, pricing, project, quote, units::TimeBase, units_for_fraction,
};
use rust_decimal::Decimal;

/// Curve described on the command line. The auction starts at t = 0 and is
/// observed `elapsed_secs` later.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveInput {
    pub start_price: Decimal,
    pub reserve_price: Decimal,
    pub price_decrement: Decimal,
    pub decrement_per: TimeBase,
    pub duration_secs: u64,
    pub unit_count: u64,
    pub filled_units: u64,
    pub elapsed_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidSize {
    Units(u64),
    Percent(u8),
}

impl BidSize {
    pub fn resolve(self, unit_count: u64) -> Result<u64, ValidationError> {
        match self {
            BidSize::Units(units) => Ok(units),
            BidSize::Percent(percent) => units_for_fraction(unit_count, percent),
        }
    }
}

/// Soft bid quote plus when the curve reaches its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteOutput {
    pub quote: Quote,
    pub threshold_after_secs: Option<Decimal>,
    pub threshold_within_duration: Option<bool>,
}

impl CurveInput {
    pub fn params(&self) -> Result<AuctionParameters, ValidationError> {
        AuctionParameters::new(
            self.start_price,
            self.reserve_price,
            self.decrement_per.rate_per_second(self.price_decrement),
            Timestamp::ZERO,
            self.duration_secs,
            self.unit_count,
        )
    }

    pub fn state(&self) -> Result<AuctionState, ValidationError> {
        if self.filled_units > self.unit_count {
            return Err(ValidationError::InvalidParameters(
                "filled units cannot exceed the unit count",
            ));
        }

        Ok(AuctionState::open(self.filled_units))
    }

    pub fn now(&self) -> Timestamp {
        Timestamp::new(self.elapsed_secs)
    }
}

pub fn preview(input: &CurveInput) -> Result<AuctionView, ValidationError> {
    Ok(project(&input.params()?, &input.state()?, input.now()))
}

pub fn quote_bid(
    input: &CurveInput,
    size: BidSize,
    threshold: Option<Decimal>,
) -> Result<QuoteOutput, ValidationError> {
    let params = input.params()?;
    let state = input.state()?;
    let units = size.resolve(params.unit_count())?;

    let request = match threshold {
        Some(threshold) => BidRequest::soft(units, threshold),
        None => BidRequest::hard(units),
    };

    let quote = quote::quote(&params, &state, input.now(), &request)?;

    let (threshold_after_secs, threshold_within_duration) = match threshold {
        Some(threshold) => (
            Some(pricing::time_to_reach_price(&params, threshold)?),
            Some(pricing::reaches_within_duration(&params, threshold)?),
        ),
        None => (None, None),
    };

    Ok(QuoteOutput {
        quote,
        threshold_after_secs,
        threshold_within_duration,
    })
}

pub fn categorize(
    final_price: Decimal,
    high_price: Decimal,
    low_price: Decimal,
    cleared: bool,
) -> Result<BetCategory, ValidationError> {
    let thresholds = BetThresholds::new(high_price, low_price, None)?;
    Ok(doma_core::categorize(final_price, &thresholds, cleared))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CurveInput {
        CurveInput {
            start_price: Decimal::from(1000),
            reserve_price: Decimal::from(700),
            price_decrement: Decimal::ONE,
            decrement_per: TimeBase::Seconds,
            duration_secs: 300,
            unit_count: 100,
            filled_units: 65,
            elapsed_secs: 150,
        }
    }

    #[test]
    fn preview_matches_reference_curve() {
        let view = preview(&reference()).unwrap();
        assert_eq!(view.current_price, Decimal::from(850));
        assert_eq!(view.fill_percentage, Decimal::from(65));
        assert_eq!(view.time_remaining, 150);
    }

    #[test]
    fn per_minute_decrement_is_rescaled() {
        let input = CurveInput {
            price_decrement: Decimal::from(60),
            decrement_per: TimeBase::Minutes,
            ..reference()
        };
        assert_eq!(preview(&input).unwrap().current_price, Decimal::from(850));
    }

    #[test]
    fn quote_by_fraction() {
        let output = quote_bid(&reference(), BidSize::Percent(10), None).unwrap();
        assert_eq!(output.quote.value(), Decimal::from(8_500));
        assert_eq!(output.threshold_after_secs, None);

        assert!(matches!(
            quote_bid(&reference(), BidSize::Percent(50), None),
            Err(ValidationError::InsufficientInventory {
                requested: 50,
                remaining: 35
            })
        ));
    }

    #[test]
    fn soft_quote_reports_when_threshold_hits() {
        let output =
            quote_bid(&reference(), BidSize::Units(25), Some(Decimal::from(720))).unwrap();

        assert_eq!(output.quote.value(), Decimal::from(18_000));
        assert_eq!(output.threshold_after_secs, Some(Decimal::from(280)));
        assert_eq!(output.threshold_within_duration, Some(true));
    }

    #[test]
    fn huge_prices_fail_cleanly() {
        let input = CurveInput {
            start_price: Decimal::from_i128_with_scale(10_000_000_000_000_000_000_000_000_000, 0),
            filled_units: 0,
            elapsed_secs: 0,
            ..reference()
        };

        assert_eq!(
            quote_bid(&input, BidSize::Units(10), None),
            Err(ValidationError::AmountOverflow)
        );
        assert!(quote_bid(&input, BidSize::Units(1), None).is_ok());
    }

    #[test]
    fn overfilled_state_is_rejected() {
        let input = CurveInput {
            filled_units: 101,
            ..reference()
        };
        assert!(preview(&input).is_err());
    }

    #[test]
    fn categorize_validates_band() {
        assert_eq!(
            categorize(Decimal::new(7, 1), Decimal::new(8, 1), Decimal::new(6, 1), true).unwrap(),
            BetCategory::WithinBand
        );
        assert!(categorize(Decimal::ONE, Decimal::new(6, 1), Decimal::new(8, 1), true).is_err());
    }
}
