mod common;

use std::{sync::atomic::Ordering, time::Duration};

use alloy::primitives::{B256, U256};
use doma_core::{
    AuctionGateway, AuctionId, AuctionPhase, AuctionState, BetCategory, BettingGateway,
    BidRequest, Error, ListFilter, ListQuery, Quote, StateError, Timestamp, TransactionError,
    ValidationError, list_auctions, place_bid, place_hard_bid, select, watch::AuctionWatcher,
};
use futures::StreamExt;
use rust_decimal::Decimal;

use common::{MockGateway, Submission, reference_params};

fn live_gateway(filled: u64) -> (MockGateway, Timestamp) {
    let now = Timestamp::now();
    let start = Timestamp::new(now.as_u64().saturating_sub(100));
    (
        MockGateway::new(reference_params(start), AuctionState::open(filled)),
        now,
    )
}

#[tokio::test]
async fn hard_bid_sends_the_quoted_cost() {
    let (gateway, now) = live_gateway(65);
    let start = gateway.params.start_time();
    let at_150 = Timestamp::new(start.as_u64() + 150);

    let placed = place_hard_bid(&gateway, gateway.id, 10, at_150).await.unwrap();

    assert_eq!(placed.quote.value(), Decimal::from(8_500));
    assert_eq!(placed.receipt.tx_hash, placed.tx.hash());
    assert_eq!(
        gateway.submissions(),
        vec![Submission::Hard {
            units: 10,
            value: Decimal::from(8_500)
        }]
    );
    assert_eq!(gateway.state.lock().unwrap().filled_units, 75);
    assert!(now >= start);
}

#[tokio::test]
async fn soft_bid_sends_the_maximum_payment() {
    let (gateway, now) = live_gateway(0);

    let request = BidRequest::soft(25, Decimal::from(720));
    let placed = place_bid(&gateway, gateway.id, &request, now).await.unwrap();

    let Quote::Soft(quote) = placed.quote else {
        panic!("expected a soft quote");
    };
    assert_eq!(quote.max_payment, Decimal::from(18_000));
    assert_eq!(quote.bond, Decimal::from(36));
    assert_eq!(
        gateway.submissions(),
        vec![Submission::Soft {
            threshold: Decimal::from(720),
            units: 25,
            value: Decimal::from(18_000),
        }]
    );
}

#[tokio::test]
async fn rejected_bids_never_reach_the_contract() {
    let (gateway, now) = live_gateway(95);

    let err = place_hard_bid(&gateway, gateway.id, 6, now).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InsufficientInventory {
            requested: 6,
            remaining: 5
        })
    ));

    let err = place_bid(&gateway, gateway.id, &BidRequest::soft(1, Decimal::from(50)), now)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidThreshold { .. })
    ));

    let late = Timestamp::new(gateway.params.end_time().as_u64() + 1);
    let err = place_hard_bid(&gateway, gateway.id, 1, late).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::AuctionNotActive)
    ));

    assert!(gateway.submissions().is_empty());
}

#[tokio::test]
async fn reverted_bid_surfaces_the_hash() {
    let (mut gateway, now) = live_gateway(0);
    gateway.revert = true;

    let err = place_hard_bid(&gateway, gateway.id, 1, now).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transaction(TransactionError::Reverted { tx_hash }) if tx_hash == B256::with_last_byte(1)
    ));
}

#[tokio::test]
async fn unknown_auction_is_reported() {
    let (gateway, now) = live_gateway(0);

    let err = place_hard_bid(&gateway, AuctionId::from(99), 1, now)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::State(StateError::AuctionNotFound(id)) if id == "99"));
}

#[tokio::test]
async fn listing_skips_unused_ids() {
    let (gateway, now) = live_gateway(65);

    let listed = list_auctions(&gateway, now).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, AuctionId::from(1));
    assert_eq!(listed[0].seller, gateway.seller);
    assert_eq!(listed[0].view.remaining_units, 35);
    assert_eq!(listed[0].view.current_price, Decimal::from(900));

    let query = ListQuery {
        filter: ListFilter::EndingSoon,
        seller: Some("00aa".into()),
        ..ListQuery::default()
    };
    assert_eq!(select(listed.clone(), &query).len(), 1);

    let elsewhere = ListQuery {
        seller: Some("00bb".into()),
        ..ListQuery::default()
    };
    assert!(select(listed, &elsewhere).is_empty());
}

#[tokio::test]
async fn betting_calls_pass_through() {
    let (gateway, _) = live_gateway(0);

    gateway
        .submit_commit_bet(gateway.id, B256::repeat_byte(0xab), Decimal::ONE)
        .await
        .unwrap();
    gateway
        .submit_reveal_bet(
            gateway.id,
            BetCategory::WithinBand,
            Decimal::ONE,
            U256::from(42),
        )
        .await
        .unwrap();

    assert_eq!(gateway.read_thresholds(gateway.id).await.unwrap(), None);
    assert_eq!(
        gateway.submissions()[1],
        Submission::Reveal {
            choice: BetCategory::WithinBand,
            amount: Decimal::ONE,
            secret: U256::from(42),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn watcher_polls_on_every_tick() {
    let (gateway, _) = live_gateway(10);
    let gateway = std::sync::Arc::new(gateway);

    let mut views = AuctionWatcher::new(ArcGateway(gateway.clone()), AuctionId::from(1))
        .with_interval(Duration::from_secs(5))
        .into_stream();

    let first = views.next().await.unwrap().unwrap();
    assert_eq!(first.remaining_units, 90);
    assert!(first.is_active);

    gateway.state.lock().unwrap().filled_units = 40;
    let second = views.next().await.unwrap().unwrap();
    assert_eq!(second.remaining_units, 60);
    assert_eq!(second.fill_percentage, Decimal::from(40));

    assert_eq!(gateway.state_reads.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn watcher_can_stop_once_cleared() {
    let (gateway, _) = live_gateway(0);
    *gateway.state.lock().unwrap() = AuctionState::cleared(100, Some(Decimal::from(800)));

    let views: Vec<_> = AuctionWatcher::new(gateway, AuctionId::from(1))
        .stop_at_terminal(true)
        .into_stream()
        .collect()
        .await;

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].as_ref().unwrap().phase, AuctionPhase::Cleared);
}

/// Shares one mock between the watcher and the test body.
struct ArcGateway(std::sync::Arc<MockGateway>);

#[async_trait::async_trait]
impl AuctionGateway for ArcGateway {
    async fn read_auction_parameters(
        &self,
        id: AuctionId,
    ) -> Result<doma_core::AuctionParameters, Error> {
        self.0.read_auction_parameters(id).await
    }

    async fn read_auction_state(&self, id: AuctionId) -> Result<AuctionState, Error> {
        self.0.read_auction_state(id).await
    }

    async fn submit_hard_bid(
        &self,
        id: AuctionId,
        desired_units: u64,
        value: Decimal,
    ) -> Result<doma_core::TxHandle, Error> {
        self.0.submit_hard_bid(id, desired_units, value).await
    }

    async fn await_confirmation(
        &self,
        tx: doma_core::TxHandle,
    ) -> Result<doma_core::TxReceipt, Error> {
        self.0.await_confirmation(tx).await
    }
}
