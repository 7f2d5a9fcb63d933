use alloy::{
    primitives::{Address, B256, U256},
    providers::Provider,
};
use async_trait::async_trait;
use doma_abi::IPremiumAuctionBetting;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    betting::BetCategory,
    client::{ConfirmationPolicy, wait_for_receipt},
    error::{Error, StateError, TransactionError, ValidationError},
    gateway::traits::{AuctionDirectory, AuctionGateway, BettingGateway},
    types::{
        draft::PremiumAuctionArgs,
        params::AuctionParameters,
        primitives::{AuctionId, Timestamp, TokenId, TxHandle, TxReceipt},
        state::{AuctionState, BettingPool},
        thresholds::BetThresholds,
    },
    units::{ContractUnits, from_wei, to_u64, to_wei},
};

/// Gateway over the single-domain premium auction with its betting pool.
#[derive(Clone)]
pub struct PremiumAuctionClient<P>
where
    P: Provider + Clone,
{
    provider: P,
    address: Address,
    units: ContractUnits,
    confirmation: ConfirmationPolicy,
}

impl<P> PremiumAuctionClient<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P, address: Address, units: ContractUnits) -> Self {
        Self {
            provider,
            address,
            units,
            confirmation: ConfirmationPolicy::default(),
        }
    }

    pub fn with_confirmation(mut self, confirmation: ConfirmationPolicy) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// Domain sold by the auction.
    pub async fn read_token_id(&self, id: AuctionId) -> Result<TokenId, Error> {
        let auction = self.read_raw(id).await?;
        Ok(TokenId::new(auction.tokenId))
    }

    pub async fn create_auction_betting(&self, args: &PremiumAuctionArgs) -> Result<TxHandle, Error> {
        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);

        let pending = contract
            .createAuctionBetting(
                args.token_id,
                args.start_price,
                args.reserve_price,
                args.price_decrement,
                args.duration,
                args.high_price,
                args.low_price,
            )
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(token = %args.token_id, tx = %handle.hash(), "submitted premium auction");
        Ok(handle)
    }

    pub async fn settle_betting(&self, id: AuctionId) -> Result<TxHandle, Error> {
        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);

        let pending = contract
            .settleBetting(id.as_u256())
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(auction = %id, tx = %handle.hash(), "submitted betting settlement");
        Ok(handle)
    }

    async fn read_raw(&self, id: AuctionId) -> Result<IPremiumAuctionBetting::auctionsReturn, Error> {
        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);
        let auction = contract
            .auctions(id.as_u256())
            .call()
            .await
            .map_err(StateError::from)?;

        if auction.seller == Address::ZERO {
            return Err(StateError::AuctionNotFound(id.to_string()).into());
        }

        Ok(auction)
    }
}

#[async_trait]
impl<P> AuctionGateway for PremiumAuctionClient<P>
where
    P: Provider + Clone,
{
    async fn read_auction_parameters(&self, id: AuctionId) -> Result<AuctionParameters, Error> {
        let auction = self.read_raw(id).await?;
        debug!(auction = %id, token = %auction.tokenId, "read premium auction");

        let per_unit_decrement = from_wei(auction.priceDecrement)?;
        let duration = self.units.duration.to_seconds(to_u64(auction.duration)?);

        let params = AuctionParameters::new(
            from_wei(auction.startPrice)?,
            from_wei(auction.reservePrice)?,
            self.units.price_decrement.rate_per_second(per_unit_decrement),
            Timestamp::new(to_u64(auction.startTime)?),
            duration,
            1,
        )
        .map_err(|err| StateError::Malformed(format!("auction {id}: {err}")))?;

        Ok(params)
    }

    async fn read_auction_state(&self, id: AuctionId) -> Result<AuctionState, Error> {
        let auction = self.read_raw(id).await?;

        let state = if auction.cleared {
            AuctionState::cleared(1, Some(from_wei(auction.finalPrice)?))
        } else {
            AuctionState::open(0)
        };

        Ok(state)
    }

    async fn submit_hard_bid(
        &self,
        id: AuctionId,
        desired_units: u64,
        value: Decimal,
    ) -> Result<TxHandle, Error> {
        if desired_units != 1 {
            return Err(ValidationError::InsufficientInventory {
                requested: desired_units,
                remaining: 1,
            }
            .into());
        }

        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);

        let pending = contract
            .placeBid(id.as_u256())
            .value(to_wei(value)?)
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(auction = %id, %value, tx = %handle.hash(), "submitted premium bid");
        Ok(handle)
    }

    async fn await_confirmation(&self, tx: TxHandle) -> Result<TxReceipt, Error> {
        Ok(wait_for_receipt(&self.provider, tx, self.confirmation).await?)
    }
}

#[async_trait]
impl<P> AuctionDirectory for PremiumAuctionClient<P>
where
    P: Provider + Clone,
{
    async fn auction_count(&self) -> Result<u64, Error> {
        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);
        let count = contract
            .auctionCounter()
            .call()
            .await
            .map_err(StateError::from)?;
        Ok(to_u64(count)?)
    }

    async fn read_seller(&self, id: AuctionId) -> Result<Address, Error> {
        Ok(self.read_raw(id).await?.seller)
    }
}

#[async_trait]
impl<P> BettingGateway for PremiumAuctionClient<P>
where
    P: Provider + Clone,
{
    async fn read_thresholds(&self, id: AuctionId) -> Result<Option<BetThresholds>, Error> {
        let auction = self.read_raw(id).await?;

        if auction.highPrice.is_zero() && auction.lowPrice.is_zero() {
            return Ok(None);
        }

        let thresholds = BetThresholds::new(
            from_wei(auction.highPrice)?,
            from_wei(auction.lowPrice)?,
            Some(from_wei(auction.startPrice)?),
        )
        .map_err(|err| StateError::Malformed(format!("auction {id}: {err}")))?;

        Ok(Some(thresholds))
    }

    async fn read_betting_pool(&self, id: AuctionId) -> Result<BettingPool, Error> {
        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);
        let pool = contract
            .bettingPools(id.as_u256())
            .call()
            .await
            .map_err(StateError::from)?;

        Ok(BettingPool {
            commit_deadline: Timestamp::new(to_u64(pool.commitDeadline)?),
            reveal_deadline: Timestamp::new(to_u64(pool.revealDeadline)?),
            total_pool: from_wei(pool.totalPool)?,
            settled: pool.settled,
        })
    }

    async fn submit_commit_bet(
        &self,
        id: AuctionId,
        commit_hash: B256,
        amount: Decimal,
    ) -> Result<TxHandle, Error> {
        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);

        let pending = contract
            .commitBet(id.as_u256(), commit_hash, to_wei(amount)?)
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(auction = %id, %amount, tx = %handle.hash(), "submitted bet commitment");
        Ok(handle)
    }

    async fn submit_reveal_bet(
        &self,
        id: AuctionId,
        choice: BetCategory,
        amount: Decimal,
        secret: U256,
    ) -> Result<TxHandle, Error> {
        if !choice.is_choice() {
            return Err(ValidationError::InvalidParameters(
                "reveal choice must be category 1, 2 or 3",
            )
            .into());
        }

        let contract = IPremiumAuctionBetting::new(self.address, &self.provider);

        let pending = contract
            .revealBet(id.as_u256(), choice.code(), to_wei(amount)?, secret)
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(auction = %id, choice = choice.code(), tx = %handle.hash(), "submitted bet reveal");
        Ok(handle)
    }
}
