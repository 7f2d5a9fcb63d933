use alloy::primitives::{B256, U256};
use doma_core::{
    AuctionId, BetCategory, BettingGateway, BettingPhase, Timestamp, TxReceipt, betting_phase,
    validation,
};
use eyre::bail;
use rust_decimal::Decimal;
use tracing::info;

pub async fn commit<G>(
    gateway: &G,
    id: AuctionId,
    commit_hash: B256,
    amount: Decimal,
) -> eyre::Result<TxReceipt>
where
    G: BettingGateway + ?Sized,
{
    let thresholds = gateway.read_thresholds(id).await?;
    validation::validate_commit_bet(thresholds.as_ref(), amount)?;

    let pool = gateway.read_betting_pool(id).await?;
    let phase = betting_phase(&pool, Timestamp::now());
    if phase != BettingPhase::Commit {
        bail!("auction {id} is no longer accepting commitments ({phase:?})");
    }

    let tx = gateway.submit_commit_bet(id, commit_hash, amount).await?;
    let receipt = gateway.await_confirmation(tx).await?;
    info!(auction = %id, tx = %receipt.tx_hash, "bet committed");
    Ok(receipt)
}

pub async fn reveal<G>(
    gateway: &G,
    id: AuctionId,
    choice: u8,
    amount: Decimal,
    secret: U256,
) -> eyre::Result<TxReceipt>
where
    G: BettingGateway + ?Sized,
{
    let choice = BetCategory::try_from(choice)?;
    if !choice.is_choice() {
        bail!("category 0 cannot be bet on; choose 1, 2 or 3");
    }

    let pool = gateway.read_betting_pool(id).await?;
    let phase = betting_phase(&pool, Timestamp::now());
    if phase != BettingPhase::Reveal {
        bail!("auction {id} is not in its reveal window ({phase:?})");
    }

    let tx = gateway.submit_reveal_bet(id, choice, amount, secret).await?;
    let receipt = gateway.await_confirmation(tx).await?;
    info!(auction = %id, choice = choice.code(), tx = %receipt.tx_hash, "bet revealed");
    Ok(receipt)
}
