use rust_decimal::Decimal;
use tracing::info;

use crate::{
    error::Error,
    gateway::traits::{AuctionGateway, SoftBidGateway},
    quote::{self, Quote},
    types::{
        bid::BidRequest,
        primitives::{AuctionId, Timestamp, TxHandle, TxReceipt},
    },
    validation,
};

/// A bid that made it on chain, with the quote it was sent at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBid {
    pub quote: Quote,
    pub tx: TxHandle,
    pub receipt: TxReceipt,
}

/// Read fresh state, validate, quote and submit a hard bid, then wait for it
/// to be mined.
pub async fn place_hard_bid<G>(
    gateway: &G,
    id: AuctionId,
    desired_units: u64,
    now: Timestamp,
) -> Result<PlacedBid, Error>
where
    G: AuctionGateway + ?Sized,
{
    let (params, state) = gateway.read_auction(id).await?;

    validation::validate_hard_bid(&params, &state, now, desired_units)?;
    let quote = Quote::Hard(quote::quote_hard_bid(&params, &state, now, desired_units)?);

    let tx = gateway.submit_hard_bid(id, desired_units, quote.value()).await?;
    let receipt = gateway.await_confirmation(tx).await?;

    info!(auction = %id, value = %quote.value(), block = ?receipt.block_number, "hard bid confirmed");
    Ok(PlacedBid { quote, tx, receipt })
}

pub async fn place_soft_bid<G>(
    gateway: &G,
    id: AuctionId,
    threshold_price: Decimal,
    desired_units: u64,
    now: Timestamp,
) -> Result<PlacedBid, Error>
where
    G: SoftBidGateway + ?Sized,
{
    let (params, state) = gateway.read_auction(id).await?;

    validation::validate_soft_bid(&params, &state, now, threshold_price, desired_units)?;
    let request = BidRequest::soft(desired_units, threshold_price);
    let quote = Quote::Soft(quote::quote_soft_bid(&params, &state, &request)?);

    let tx = gateway
        .submit_soft_bid(id, threshold_price, desired_units, quote.value())
        .await?;
    let receipt = gateway.await_confirmation(tx).await?;

    info!(auction = %id, value = %quote.value(), block = ?receipt.block_number, "soft bid confirmed");
    Ok(PlacedBid { quote, tx, receipt })
}

pub async fn place_bid<G>(
    gateway: &G,
    id: AuctionId,
    request: &BidRequest,
    now: Timestamp,
) -> Result<PlacedBid, Error>
where
    G: SoftBidGateway + ?Sized,
{
    match request.threshold_price {
        Some(threshold) => {
            place_soft_bid(gateway, id, threshold, request.desired_units, now).await
        }
        None => place_hard_bid(gateway, id, request.desired_units, now).await,
    }
}
