use doma_core::{
    AuctionGateway, AuctionId, BidRequest, PlacedBid, Quote, SoftBidGateway, Timestamp, place_bid,
    place_hard_bid, quote, validation,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::commands::offline::BidSize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidInput {
    pub id: AuctionId,
    pub size: BidSize,
    pub threshold: Option<Decimal>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BidOutcome {
    Quoted(Quote),
    Placed(PlacedBid),
}

/// Validate against fresh state and quote without sending anything.
pub async fn quote_live<G>(gateway: &G, id: AuctionId, request: &BidRequest) -> eyre::Result<Quote>
where
    G: AuctionGateway + ?Sized,
{
    let (params, state) = gateway.read_auction(id).await?;
    let now = Timestamp::now();

    validation::validate_bid(&params, &state, now, request)?;
    Ok(quote::quote(&params, &state, now, request)?)
}

pub async fn bid_hybrid<G>(gateway: &G, input: BidInput) -> eyre::Result<BidOutcome>
where
    G: SoftBidGateway + ?Sized,
{
    let params = gateway.read_auction_parameters(input.id).await?;
    let units = input.size.resolve(params.unit_count())?;

    let request = match input.threshold {
        Some(threshold) => BidRequest::soft(units, threshold),
        None => BidRequest::hard(units),
    };

    if input.dry_run {
        return Ok(BidOutcome::Quoted(
            quote_live(gateway, input.id, &request).await?,
        ));
    }

    info!(auction = %input.id, units, soft = request.is_soft(), "placing bid");
    let placed = place_bid(gateway, input.id, &request, Timestamp::now()).await?;
    Ok(BidOutcome::Placed(placed))
}

/// Premium auctions sell one domain and only take bids at the live price.
pub async fn bid_premium<G>(gateway: &G, id: AuctionId, dry_run: bool) -> eyre::Result<BidOutcome>
where
    G: AuctionGateway + ?Sized,
{
    if dry_run {
        let (params, state) = gateway.read_auction(id).await?;
        let now = Timestamp::now();

        validation::validate_premium_bid(&params, &state, now)?;
        return Ok(BidOutcome::Quoted(Quote::Hard(quote::quote_hard_bid(
            &params, &state, now, 1,
        )?)));
    }

    info!(auction = %id, "placing premium bid");
    let placed = place_hard_bid(gateway, id, 1, Timestamp::now()).await?;
    Ok(BidOutcome::Placed(placed))
}
