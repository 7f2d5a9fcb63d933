use alloy::primitives::Address;
use doma_core::{
    AuctionDirectory, AuctionGateway, BatchAuctionDraft, HybridAuctionClient,
    OwnershipTokenClient, PremiumAuctionClient, PremiumAuctionDraft, TxReceipt,
};
use tracing::info;

use crate::{config::AuctionConfig, wallet::LocalWallet};

#[derive(Debug, Clone)]
pub struct Created {
    pub receipt: TxReceipt,
    /// The contract's auction counter once the creation was mined.
    pub auction_count: u64,
}

pub async fn create_batch(
    wallet: &LocalWallet,
    config: &AuctionConfig,
    draft: &BatchAuctionDraft,
) -> eyre::Result<Created> {
    draft.validate()?;

    let seller = wallet.context().require_address()?;
    let units = config.units.hybrid();
    let args = draft.to_contract_args(&units)?;

    let hybrid = HybridAuctionClient::new(
        wallet.provider().clone(),
        config.contracts.hybrid_auction,
        units,
    )
    .with_confirmation(config.wallet.confirmation());

    let ownership = OwnershipTokenClient::new(
        wallet.provider().clone(),
        config.contracts.ownership_token,
    )
    .with_confirmation(config.wallet.confirmation());

    for token_id in &draft.token_ids {
        let owner = ownership.owner_of(*token_id).await?;
        if owner != seller {
            eyre::bail!("domain {token_id} is owned by {owner}, not {seller}");
        }
    }

    if let Some(receipt) = ownership.ensure_approval(seller, hybrid.address()).await? {
        info!(tx = %receipt.tx_hash, "auction contract approved for all domains");
    }

    let tx = hybrid.create_batch_auction(&args).await?;
    let receipt = hybrid.await_confirmation(tx).await?;

    Ok(Created {
        receipt,
        auction_count: hybrid.auction_count().await?,
    })
}

pub async fn create_premium(
    wallet: &LocalWallet,
    config: &AuctionConfig,
    premium: Address,
    draft: &PremiumAuctionDraft,
) -> eyre::Result<Created> {
    draft.validate()?;

    let seller = wallet.context().require_address()?;
    let units = config.units.premium();
    let args = draft.to_contract_args(&units)?;

    let client = PremiumAuctionClient::new(wallet.provider().clone(), premium, units)
        .with_confirmation(config.wallet.confirmation());

    let ownership = OwnershipTokenClient::new(
        wallet.provider().clone(),
        config.contracts.ownership_token,
    )
    .with_confirmation(config.wallet.confirmation());

    let owner = ownership.owner_of(draft.token_id).await?;
    if owner != seller {
        eyre::bail!("domain {} is owned by {owner}, not {seller}", draft.token_id);
    }

    if let Some(receipt) = ownership
        .ensure_token_approval(seller, draft.token_id, premium)
        .await?
    {
        info!(tx = %receipt.tx_hash, token = %draft.token_id, "auction contract approved");
    }

    let tx = client.create_auction_betting(&args).await?;
    let receipt = client.await_confirmation(tx).await?;

    Ok(Created {
        receipt,
        auction_count: client.auction_count().await?,
    })
}
