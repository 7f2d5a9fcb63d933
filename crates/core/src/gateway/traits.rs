use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::{
    betting::BetCategory,
    error::{Error, MetadataError, WalletError},
    gateway::{metadata::TokenMetadata, wallet::WalletContext},
    types::{
        params::AuctionParameters,
        primitives::{AuctionId, TokenId, TxHandle, TxReceipt},
        state::{AuctionState, BettingPool},
        thresholds::BetThresholds,
    },
};

/// Read/write access to an auction contract. Amounts are whole native
/// units and times are seconds; implementations convert at the boundary.
#[async_trait]
pub trait AuctionGateway: Send + Sync {
    async fn read_auction_parameters(&self, id: AuctionId) -> Result<AuctionParameters, Error>;

    async fn read_auction_state(&self, id: AuctionId) -> Result<AuctionState, Error>;

    async fn read_auction(&self, id: AuctionId) -> Result<(AuctionParameters, AuctionState), Error> {
        let params = self.read_auction_parameters(id).await?;
        let state = self.read_auction_state(id).await?;
        Ok((params, state))
    }

    async fn submit_hard_bid(
        &self,
        id: AuctionId,
        desired_units: u64,
        value: Decimal,
    ) -> Result<TxHandle, Error>;

    async fn await_confirmation(&self, tx: TxHandle) -> Result<TxReceipt, Error>;
}

/// Enumeration over every auction a contract has created.
#[async_trait]
pub trait AuctionDirectory: AuctionGateway {
    /// Value of the contract's auction counter.
    async fn auction_count(&self) -> Result<u64, Error>;

    /// Fails with `AuctionNotFound` for ids that were never used.
    async fn read_seller(&self, id: AuctionId) -> Result<Address, Error>;
}

#[async_trait]
pub trait SoftBidGateway: AuctionGateway {
    async fn submit_soft_bid(
        &self,
        id: AuctionId,
        threshold_price: Decimal,
        desired_units: u64,
        value: Decimal,
    ) -> Result<TxHandle, Error>;
}

#[async_trait]
pub trait BettingGateway: AuctionGateway {
    /// `None` when the auction was created without a betting band.
    async fn read_thresholds(&self, id: AuctionId) -> Result<Option<BetThresholds>, Error>;

    async fn read_betting_pool(&self, id: AuctionId) -> Result<BettingPool, Error>;

    async fn submit_commit_bet(
        &self,
        id: AuctionId,
        commit_hash: B256,
        amount: Decimal,
    ) -> Result<TxHandle, Error>;

    async fn submit_reveal_bet(
        &self,
        id: AuctionId,
        choice: BetCategory,
        amount: Decimal,
        secret: U256,
    ) -> Result<TxHandle, Error>;
}

#[async_trait]
pub trait WalletGateway: Send + Sync {
    async fn connect(&mut self) -> Result<WalletContext, WalletError>;

    fn disconnect(&mut self) -> WalletContext;

    fn current_address(&self) -> Option<Address>;

    async fn current_chain_id(&self) -> Result<u64, WalletError>;

    async fn switch_chain(&mut self, chain_id: u64) -> Result<WalletContext, WalletError>;
}

#[async_trait]
pub trait MetadataResolver: Send + Sync {
    async fn resolve_token_metadata(&self, token_id: TokenId)
    -> Result<TokenMetadata, MetadataError>;
}
