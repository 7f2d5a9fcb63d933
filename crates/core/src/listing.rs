use std::cmp::Ordering;

use alloy::primitives::Address;
use tracing::debug;

use crate::{
    error::{Error, StateError},
    gateway::traits::AuctionDirectory,
    projection,
    types::{
        primitives::{AuctionId, Timestamp},
        state::AuctionPhase,
        view::AuctionView,
    },
};

/// Live auctions with at most this many seconds left count as ending soon.
pub const ENDING_SOON_SECS: u64 = 3_600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionSummary {
    pub id: AuctionId,
    pub seller: Address,
    pub view: AuctionView,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    #[default]
    All,
    Active,
    EndingSoon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Least time left first.
    #[default]
    TimeLeft,
    /// Cheapest first.
    CurrentPrice,
    /// Most filled first.
    FillPercentage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: ListFilter,
    pub sort: SortKey,
    /// Case-insensitive fragment of the seller address.
    pub seller: Option<String>,
}

impl ListQuery {
    pub fn matches(&self, summary: &AuctionSummary) -> bool {
        let live = matches!(summary.view.phase, AuctionPhase::Active { .. });

        let phase_ok = match self.filter {
            ListFilter::All => true,
            ListFilter::Active => live,
            ListFilter::EndingSoon => live && summary.view.time_remaining <= ENDING_SOON_SECS,
        };

        let seller_ok = self.seller.as_deref().is_none_or(|needle| {
            summary
                .seller
                .to_string()
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });

        phase_ok && seller_ok
    }

    fn compare(&self, a: &AuctionSummary, b: &AuctionSummary) -> Ordering {
        let primary = match self.sort {
            SortKey::TimeLeft => a.view.time_remaining.cmp(&b.view.time_remaining),
            SortKey::CurrentPrice => a.view.current_price.cmp(&b.view.current_price),
            SortKey::FillPercentage => b.view.fill_percentage.cmp(&a.view.fill_percentage),
        };

        primary.then_with(|| a.id.as_u256().cmp(&b.id.as_u256()))
    }
}

/// Keep the summaries `query` matches, in its sort order. Ties keep id order.
pub fn select(summaries: Vec<AuctionSummary>, query: &ListQuery) -> Vec<AuctionSummary> {
    let mut selected: Vec<AuctionSummary> = summaries
        .into_iter()
        .filter(|summary| query.matches(summary))
        .collect();

    selected.sort_by(|a, b| query.compare(a, b));
    selected
}

/// Read and project every auction up to the contract's counter.
///
/// Ids are scanned from zero so both zero- and one-based counters are
/// covered; ids the contract never assigned are skipped.
pub async fn list_auctions<G>(
    gateway: &G,
    now: Timestamp,
) -> Result<Vec<AuctionSummary>, Error>
where
    G: AuctionDirectory + ?Sized,
{
    let count = gateway.auction_count().await?;
    let mut summaries = Vec::new();

    for raw in 0..=count {
        let id = AuctionId::from(raw);

        let seller = match gateway.read_seller(id).await {
            Ok(seller) => seller,
            Err(Error::State(StateError::AuctionNotFound(_))) => {
                debug!(auction = %id, "skipping unused auction id");
                continue;
            }
            Err(err) => return Err(err),
        };

        let (params, state) = gateway.read_auction(id).await?;
        summaries.push(AuctionSummary {
            id,
            seller,
            view: projection::project(&params, &state, now),
        });
    }

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn summary(id: u64, seller: u8, phase: AuctionPhase, price: i64, fill: i64) -> AuctionSummary {
        let time_remaining = match phase {
            AuctionPhase::Active { seconds_remaining } => seconds_remaining,
            AuctionPhase::Pending { .. } => 7_200,
            AuctionPhase::Cleared | AuctionPhase::Expired => 0,
        };

        AuctionSummary {
            id: AuctionId::from(id),
            seller: Address::with_last_byte(seller),
            view: AuctionView {
                current_price: Decimal::from(price),
                fill_percentage: Decimal::from(fill),
                estimated_end_price: Decimal::from(price),
                time_remaining,
                is_active: matches!(
                    phase,
                    AuctionPhase::Active { .. } | AuctionPhase::Pending { .. }
                ),
                phase,
                remaining_units: 0,
                price_decay_percentage: Decimal::ZERO,
            },
        }
    }

    fn book() -> Vec<AuctionSummary> {
        vec![
            summary(1, 0xaa, AuctionPhase::Active { seconds_remaining: 5_400 }, 900, 10),
            summary(2, 0xbb, AuctionPhase::Active { seconds_remaining: 600 }, 750, 80),
            summary(3, 0xaa, AuctionPhase::Cleared, 720, 100),
            summary(4, 0xcc, AuctionPhase::Pending { seconds_until_start: 60 }, 1_000, 0),
            summary(5, 0xbb, AuctionPhase::Active { seconds_remaining: 3_600 }, 800, 40),
        ]
    }

    fn ids(summaries: &[AuctionSummary]) -> Vec<u64> {
        summaries
            .iter()
            .map(|s| s.id.as_u256().to::<u64>())
            .collect()
    }

    #[test]
    fn all_sorted_by_time_left() {
        let listed = select(book(), &ListQuery::default());
        assert_eq!(ids(&listed), vec![3, 2, 5, 1, 4]);
    }

    #[test]
    fn active_only_drops_pending_and_finished() {
        let query = ListQuery {
            filter: ListFilter::Active,
            sort: SortKey::CurrentPrice,
            seller: None,
        };
        assert_eq!(ids(&select(book(), &query)), vec![2, 5, 1]);
    }

    #[test]
    fn ending_soon_includes_the_hour_boundary() {
        let query = ListQuery {
            filter: ListFilter::EndingSoon,
            ..ListQuery::default()
        };
        assert_eq!(ids(&select(book(), &query)), vec![2, 5]);
    }

    #[test]
    fn fill_sorts_descending() {
        let query = ListQuery {
            sort: SortKey::FillPercentage,
            ..ListQuery::default()
        };
        assert_eq!(ids(&select(book(), &query)), vec![3, 2, 5, 1, 4]);
    }

    #[test]
    fn seller_search_ignores_case() {
        let needle = Address::with_last_byte(0xbb).to_string().to_uppercase();
        let query = ListQuery {
            seller: Some(needle),
            ..ListQuery::default()
        };
        assert_eq!(ids(&select(book(), &query)), vec![2, 5]);

        let partial = ListQuery {
            seller: Some("00AA".into()),
            ..ListQuery::default()
        };
        assert_eq!(ids(&select(book(), &partial)), vec![3, 1]);
    }
}
