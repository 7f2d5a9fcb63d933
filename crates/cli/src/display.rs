use std::fmt::Write;

use doma_core::{
    AuctionPhase, AuctionSummary, AuctionView, BetCategory, BettingPhase, HardBidQuote, Quote,
    SoftBidQuote, TxReceipt,
};
use rust_decimal::Decimal;
use serde::Serialize;

pub const CURRENCY: &str = "DOMA";

/// `"Xh Ym"`, or `"0h 0m"` once nothing is left.
pub fn format_time_left(seconds: u64) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds % 3_600) / 60;
    format!("{hours}h {minutes}m")
}

pub fn phase_label(phase: &AuctionPhase) -> &'static str {
    match phase {
        AuctionPhase::Pending { .. } => "Pending",
        AuctionPhase::Active { .. } => "Active",
        AuctionPhase::Cleared => "Sold",
        AuctionPhase::Expired => "Ended",
    }
}

pub fn betting_phase_label(phase: BettingPhase) -> &'static str {
    match phase {
        BettingPhase::Commit => "commit",
        BettingPhase::Reveal => "reveal",
        BettingPhase::AwaitingSettlement => "awaiting settlement",
        BettingPhase::Settled => "settled",
    }
}

pub fn category_label(category: BetCategory) -> &'static str {
    match category {
        BetCategory::Uncleared => "Category 0: Uncleared",
        BetCategory::BelowLow => "Category 1: Below low threshold",
        BetCategory::WithinBand => "Category 2: Between thresholds",
        BetCategory::AboveHigh => "Category 3: Above high threshold",
    }
}

/// Rounds for display only.
pub fn amount(value: Decimal) -> String {
    format!("{} {CURRENCY}", value.round_dp(6).normalize())
}

pub fn percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2).normalize())
}

pub fn render_view(view: &AuctionView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "status:          {}", phase_label(&view.phase));
    let _ = writeln!(out, "current price:   {}", amount(view.current_price));
    let _ = writeln!(out, "end price:       {}", amount(view.estimated_end_price));
    let _ = writeln!(out, "price decay:     {}", percent(view.price_decay_percentage));
    let _ = writeln!(out, "filled:          {}", percent(view.fill_percentage));
    let _ = writeln!(out, "remaining units: {}", view.remaining_units);

    let time = match view.phase {
        AuctionPhase::Pending {
            seconds_until_start,
        } => format!("starts in {}", format_time_left(seconds_until_start)),
        _ => format_time_left(view.time_remaining),
    };
    let _ = write!(out, "time left:       {time}");

    out
}

pub fn render_hard_quote(quote: &HardBidQuote) -> String {
    format!(
        "hard bid: {} units at {} = {}",
        quote.units,
        amount(quote.unit_price),
        amount(quote.cost)
    )
}

pub fn render_soft_quote(quote: &SoftBidQuote) -> String {
    format!(
        "soft bid: {} units at or below {}\n  max payment: {}\n  bond (0.2%, refundable): {}",
        quote.units,
        amount(quote.threshold),
        amount(quote.max_payment),
        amount(quote.bond)
    )
}

/// One line per auction in `list` output.
pub fn render_summary(summary: &AuctionSummary) -> String {
    let view = &summary.view;
    format!(
        "#{:<5} {:<8} {:>20}  {:>7} filled  {:>8} left  {}",
        summary.id,
        phase_label(&view.phase),
        amount(view.current_price),
        percent(view.fill_percentage),
        format_time_left(view.time_remaining),
        summary.seller
    )
}

/// Serializable mirror of [`AuctionView`] for `--json` output.
#[derive(Debug, Serialize)]
pub struct ViewReport {
    pub status: &'static str,
    pub current_price: Decimal,
    pub estimated_end_price: Decimal,
    pub fill_percentage: Decimal,
    pub price_decay_percentage: Decimal,
    pub time_remaining: u64,
    pub remaining_units: u64,
    pub is_active: bool,
}

impl From<&AuctionView> for ViewReport {
    fn from(view: &AuctionView) -> Self {
        Self {
            status: phase_label(&view.phase),
            current_price: view.current_price,
            estimated_end_price: view.estimated_end_price,
            fill_percentage: view.fill_percentage,
            price_decay_percentage: view.price_decay_percentage,
            time_remaining: view.time_remaining,
            remaining_units: view.remaining_units,
            is_active: view.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub auction: String,
    pub seller: String,
    #[serde(flatten)]
    pub view: ViewReport,
}

impl From<&AuctionSummary> for SummaryReport {
    fn from(summary: &AuctionSummary) -> Self {
        Self {
            auction: summary.id.to_string(),
            seller: summary.seller.to_string(),
            view: ViewReport::from(&summary.view),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuoteReport {
    Hard {
        units: u64,
        unit_price: Decimal,
        cost: Decimal,
    },
    Soft {
        units: u64,
        threshold: Decimal,
        bond: Decimal,
        max_payment: Decimal,
        #[serde(skip_serializing_if = "Option::is_none")]
        threshold_after_secs: Option<Decimal>,
        #[serde(skip_serializing_if = "Option::is_none")]
        threshold_within_duration: Option<bool>,
    },
}

impl QuoteReport {
    /// Attach when a soft bid's threshold is reached; hard quotes are unchanged.
    pub fn with_threshold_timing(self, after_secs: Option<Decimal>, within: Option<bool>) -> Self {
        match self {
            QuoteReport::Soft {
                units,
                threshold,
                bond,
                max_payment,
                ..
            } => QuoteReport::Soft {
                units,
                threshold,
                bond,
                max_payment,
                threshold_after_secs: after_secs,
                threshold_within_duration: within,
            },
            hard => hard,
        }
    }
}

impl From<&Quote> for QuoteReport {
    fn from(quote: &Quote) -> Self {
        match quote {
            Quote::Hard(q) => QuoteReport::Hard {
                units: q.units,
                unit_price: q.unit_price,
                cost: q.cost,
            },
            Quote::Soft(q) => QuoteReport::Soft {
                units: q.units,
                threshold: q.threshold,
                bond: q.bond,
                max_payment: q.max_payment,
                threshold_after_secs: None,
                threshold_within_duration: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReceiptReport {
    pub tx_hash: String,
    pub block: Option<u64>,
    pub gas_used: u64,
}

impl From<&TxReceipt> for ReceiptReport {
    fn from(receipt: &TxReceipt) -> Self {
        Self {
            tx_hash: receipt.tx_hash.to_string(),
            block: receipt.block_number,
            gas_used: receipt.gas_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_left_in_hours_and_minutes() {
        assert_eq!(format_time_left(0), "0h 0m");
        assert_eq!(format_time_left(59), "0h 0m");
        assert_eq!(format_time_left(3_660), "1h 1m");
        assert_eq!(format_time_left(36_000 + 59 * 60 + 59), "10h 59m");
    }

    #[test]
    fn amounts_are_trimmed() {
        assert_eq!(amount(Decimal::new(8_500_000, 4)), "850 DOMA");
        assert_eq!(amount(Decimal::ONE / Decimal::from(3)), "0.333333 DOMA");
        assert_eq!(percent(Decimal::new(65_000, 3)), "65%");
    }

    #[test]
    fn renders_a_live_view() {
        let view = AuctionView {
            current_price: Decimal::from(850),
            fill_percentage: Decimal::from(65),
            estimated_end_price: Decimal::from(700),
            time_remaining: 150,
            is_active: true,
            phase: AuctionPhase::Active {
                seconds_remaining: 150,
            },
            remaining_units: 35,
            price_decay_percentage: Decimal::from(50),
        };

        let text = render_view(&view);
        assert!(text.contains("Active"));
        assert!(text.contains("850 DOMA"));
        assert!(text.contains("0h 2m"));

        let json = serde_json::to_value(ViewReport::from(&view)).unwrap();
        assert_eq!(json["status"], "Active");
        assert_eq!(json["remaining_units"], 35);
    }

    #[test]
    fn summary_line_and_report() {
        let summary = AuctionSummary {
            id: doma_core::AuctionId::from(7u64),
            seller: alloy::primitives::Address::with_last_byte(0xaa),
            view: AuctionView {
                current_price: Decimal::from(900),
                fill_percentage: Decimal::from(25),
                estimated_end_price: Decimal::from(700),
                time_remaining: 3_660,
                is_active: true,
                phase: AuctionPhase::Active {
                    seconds_remaining: 3_660,
                },
                remaining_units: 3,
                price_decay_percentage: Decimal::from(10),
            },
        };

        let line = render_summary(&summary);
        assert!(line.starts_with("#7"));
        assert!(line.contains("900 DOMA"));
        assert!(line.contains("1h 1m left"));
        assert!(line.ends_with(&summary.seller.to_string()));

        let json = serde_json::to_value(SummaryReport::from(&summary)).unwrap();
        assert_eq!(json["auction"], "7");
        assert_eq!(json["status"], "Active");
        assert_eq!(json["remaining_units"], 3);
    }

    #[test]
    fn quote_reports_are_tagged() {
        let hard = Quote::Hard(HardBidQuote {
            unit_price: Decimal::from(900),
            units: 10,
            cost: Decimal::from(9_000),
        });
        let json = serde_json::to_value(QuoteReport::from(&hard)).unwrap();
        assert_eq!(json["kind"], "hard");
        assert_eq!(json["units"], 10);

        let soft = Quote::Soft(SoftBidQuote {
            threshold: Decimal::from(420),
            units: 25,
            bond: Decimal::from(21),
            max_payment: Decimal::from(10_500),
        });
        let bare = serde_json::to_value(QuoteReport::from(&soft)).unwrap();
        assert_eq!(bare["kind"], "soft");
        assert!(bare.get("threshold_after_secs").is_none());

        let timed = QuoteReport::from(&soft).with_threshold_timing(Some(Decimal::from(48)), Some(true));
        let timed = serde_json::to_value(timed).unwrap();
        assert_eq!(timed["threshold_within_duration"], true);
        assert!(timed.get("threshold_after_secs").is_some());
    }

    #[test]
    fn receipt_report_keeps_missing_block_as_null() {
        let receipt = TxReceipt {
            tx_hash: alloy::primitives::B256::repeat_byte(0x11),
            block_number: None,
            gas_used: 21_000,
        };
        let json = serde_json::to_value(ReceiptReport::from(&receipt)).unwrap();
        assert!(json["block"].is_null());
        assert_eq!(json["gas_used"], 21_000);
        assert!(json["tx_hash"].as_str().unwrap().starts_with("0x11"));
    }
}
