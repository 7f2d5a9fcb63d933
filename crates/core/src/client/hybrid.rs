use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use async_trait::async_trait;
use doma_abi::IHybridDutchAuction;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    client::{ConfirmationPolicy, wait_for_receipt},
    error::{Error, StateError, TransactionError},
    gateway::traits::{AuctionDirectory, AuctionGateway, SoftBidGateway},
    types::{
        draft::BatchAuctionArgs,
        params::AuctionParameters,
        primitives::{AuctionId, Timestamp, TxHandle, TxReceipt},
        state::AuctionState,
    },
    units::{ContractUnits, from_wei, to_u64, to_wei},
};

/// Gateway over the hybrid batch Dutch auction contract.
#[derive(Clone)]
pub struct HybridAuctionClient<P>
where
    P: Provider + Clone,
{
    provider: P,
    address: Address,
    units: ContractUnits,
    confirmation: ConfirmationPolicy,
}

impl<P> HybridAuctionClient<P>
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

    pub fn units(&self) -> ContractUnits {
        self.units
    }

    /// Reverse royalty currently offered, in percent.
    pub async fn read_current_royalty(&self, id: AuctionId) -> Result<Decimal, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);
        let bps = contract
            .getCurrentRoyalty(id.as_u256())
            .call()
            .await
            .map_err(StateError::from)?;
        Ok(Decimal::from(to_u64(bps)?) / Decimal::ONE_HUNDRED)
    }

    pub async fn read_token_ids(&self, id: AuctionId) -> Result<Vec<U256>, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);
        let ids = contract
            .getAuctionTokenIds(id.as_u256())
            .call()
            .await
            .map_err(StateError::from)?;
        Ok(ids)
    }

    pub async fn create_batch_auction(&self, args: &BatchAuctionArgs) -> Result<TxHandle, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);

        let pending = contract
            .createBatchAuction(
                args.token_ids.clone(),
                args.start_price,
                args.reserve_price,
                args.price_decrement,
                args.duration,
                args.reward_budget_bps,
                args.royalty_increment,
                args.payment_token,
            )
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(
            tokens = args.token_ids.len(),
            tx = %handle.hash(),
            "submitted batch auction"
        );
        Ok(handle)
    }

    fn decode_parameters(
        &self,
        id: AuctionId,
        auction: &IHybridDutchAuction::auctionsReturn,
        unit_count: usize,
    ) -> Result<AuctionParameters, Error> {
        if auction.seller == Address::ZERO {
            return Err(StateError::AuctionNotFound(id.to_string()).into());
        }

        let per_unit_decrement = from_wei(auction.priceDecrement)?;
        let duration = self.units.duration.to_seconds(to_u64(auction.duration)?);

        let params = AuctionParameters::new(
            from_wei(auction.startPrice)?,
            from_wei(auction.reservePrice)?,
            self.units.price_decrement.rate_per_second(per_unit_decrement),
            Timestamp::new(to_u64(auction.startedAt)?),
            duration,
            unit_count as u64,
        )
        .map_err(|err| StateError::Malformed(format!("auction {id}: {err}")))?;

        Ok(params)
    }
}

#[async_trait]
impl<P> AuctionGateway for HybridAuctionClient<P>
where
    P: Provider + Clone,
{
    async fn read_auction_parameters(&self, id: AuctionId) -> Result<AuctionParameters, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);

        let (auction, token_ids) = self
            .provider
            .multicall()
            .add(contract.auctions(id.as_u256()))
            .add(contract.getAuctionTokenIds(id.as_u256()))
            .aggregate()
            .await
            .map_err(StateError::from)?;

        debug!(auction = %id, tokens = token_ids.len(), "read hybrid auction");
        self.decode_parameters(id, &auction, token_ids.len())
    }

    async fn read_auction_state(&self, id: AuctionId) -> Result<AuctionState, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);

        let (auction, filled, price) = self
            .provider
            .multicall()
            .add(contract.auctions(id.as_u256()))
            .add(contract.getAuctionFilled(id.as_u256()))
            .add(contract.getCurrentPrice(id.as_u256()))
            .aggregate()
            .await
            .map_err(StateError::from)?;

        if auction.seller == Address::ZERO {
            return Err(StateError::AuctionNotFound(id.to_string()).into());
        }

        let filled = to_u64(filled)?;

        // The contract freezes its price once the bundle clears.
        let state = if auction.cleared {
            AuctionState::cleared(filled, Some(from_wei(price)?))
        } else {
            AuctionState::open(filled)
        };

        Ok(state)
    }

    async fn submit_hard_bid(
        &self,
        id: AuctionId,
        desired_units: u64,
        value: Decimal,
    ) -> Result<TxHandle, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);

        let pending = contract
            .placeHardBid(id.as_u256(), U256::from(desired_units))
            .value(to_wei(value)?)
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(auction = %id, units = desired_units, %value, tx = %handle.hash(), "submitted hard bid");
        Ok(handle)
    }

    async fn await_confirmation(&self, tx: TxHandle) -> Result<TxReceipt, Error> {
        Ok(wait_for_receipt(&self.provider, tx, self.confirmation).await?)
    }
}

#[async_trait]
impl<P> AuctionDirectory for HybridAuctionClient<P>
where
    P: Provider + Clone,
{
    async fn auction_count(&self) -> Result<u64, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);
        let count = contract
            .auctionCounter()
            .call()
            .await
            .map_err(StateError::from)?;
        Ok(to_u64(count)?)
    }

    async fn read_seller(&self, id: AuctionId) -> Result<Address, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);
        let auction = contract
            .auctions(id.as_u256())
            .call()
            .await
            .map_err(StateError::from)?;

        if auction.seller == Address::ZERO {
            return Err(StateError::AuctionNotFound(id.to_string()).into());
        }
        Ok(auction.seller)
    }
}

#[async_trait]
impl<P> SoftBidGateway for HybridAuctionClient<P>
where
    P: Provider + Clone,
{
    async fn submit_soft_bid(
        &self,
        id: AuctionId,
        threshold_price: Decimal,
        desired_units: u64,
        value: Decimal,
    ) -> Result<TxHandle, Error> {
        let contract = IHybridDutchAuction::new(self.address, &self.provider);

        let pending = contract
            .placeSoftBid(
                id.as_u256(),
                to_wei(threshold_price)?,
                U256::from(desired_units),
            )
            .value(to_wei(value)?)
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(
            auction = %id,
            units = desired_units,
            threshold = %threshold_price,
            %value,
            tx = %handle.hash(),
            "submitted soft bid"
        );
        Ok(handle)
    }
}
