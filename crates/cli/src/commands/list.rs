use doma_core::{
    AuctionDirectory, AuctionSummary, Error, ListQuery, Timestamp, list_auctions, select,
};
use tracing::info;

/// Every auction the contract knows about, filtered and sorted by `query`.
pub async fn list<G>(gateway: &G, query: &ListQuery) -> Result<Vec<AuctionSummary>, Error>
where
    G: AuctionDirectory + ?Sized,
{
    let summaries = list_auctions(gateway, Timestamp::now()).await?;
    let total = summaries.len();

    let selected = select(summaries, query);
    info!(total, shown = selected.len(), "listed auctions");
    Ok(selected)
}
