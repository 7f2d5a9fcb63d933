use alloy::{primitives::Address, providers::Provider};
use async_trait::async_trait;
use doma_abi::IOwnershipToken;
use tracing::{debug, info};

use crate::{
    client::{ConfirmationPolicy, wait_for_receipt},
    error::{Error, MetadataError, StateError, TransactionError},
    gateway::{metadata::TokenMetadata, traits::MetadataResolver},
    types::primitives::{TokenId, TxHandle, TxReceipt},
};

/// ERC-721 domain ownership token.
#[derive(Clone)]
pub struct OwnershipTokenClient<P>
where
    P: Provider + Clone,
{
    provider: P,
    address: Address,
    confirmation: ConfirmationPolicy,
}

impl<P> OwnershipTokenClient<P>
where
    P: Provider + Clone,
{
    pub fn new(provider: P, address: Address) -> Self {
        Self {
            provider,
            address,
            confirmation: ConfirmationPolicy::default(),
        }
    }

    pub fn with_confirmation(mut self, confirmation: ConfirmationPolicy) -> Self {
        self.confirmation = confirmation;
        self
    }

    pub async fn owner_of(&self, token_id: TokenId) -> Result<Address, Error> {
        let token = IOwnershipToken::new(self.address, &self.provider);
        let owner = token
            .ownerOf(token_id.as_u256())
            .call()
            .await
            .map_err(StateError::from)?;
        Ok(owner)
    }

    /// Approve `operator` for every token of `owner` unless it already is.
    /// Returns the confirmed approval receipt when one was needed.
    pub async fn ensure_approval(
        &self,
        owner: Address,
        operator: Address,
    ) -> Result<Option<TxReceipt>, Error> {
        let token = IOwnershipToken::new(self.address, &self.provider);

        let approved = token
            .isApprovedForAll(owner, operator)
            .call()
            .await
            .map_err(StateError::from)?;

        if approved {
            debug!(%owner, %operator, "operator already approved");
            return Ok(None);
        }

        let pending = token
            .setApprovalForAll(operator, true)
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(%operator, tx = %handle.hash(), "submitted operator approval");

        let receipt = wait_for_receipt(&self.provider, handle, self.confirmation).await?;
        Ok(Some(receipt))
    }

    /// Approve `operator` for a single token unless it already is, either
    /// directly or as an operator for all of `owner`'s tokens.
    pub async fn ensure_token_approval(
        &self,
        owner: Address,
        token_id: TokenId,
        operator: Address,
    ) -> Result<Option<TxReceipt>, Error> {
        let token = IOwnershipToken::new(self.address, &self.provider);

        let (approved, for_all) = self
            .provider
            .multicall()
            .add(token.getApproved(token_id.as_u256()))
            .add(token.isApprovedForAll(owner, operator))
            .aggregate()
            .await
            .map_err(StateError::from)?;

        if approved == operator || for_all {
            debug!(token = %token_id, %operator, "token already approved");
            return Ok(None);
        }

        let pending = token
            .approve(operator, token_id.as_u256())
            .send()
            .await
            .map_err(TransactionError::from)?;

        let handle = TxHandle::new(*pending.tx_hash());
        info!(token = %token_id, %operator, tx = %handle.hash(), "submitted token approval");

        let receipt = wait_for_receipt(&self.provider, handle, self.confirmation).await?;
        Ok(Some(receipt))
    }
}

#[async_trait]
impl<P> MetadataResolver for OwnershipTokenClient<P>
where
    P: Provider + Clone,
{
    async fn resolve_token_metadata(
        &self,
        token_id: TokenId,
    ) -> Result<TokenMetadata, MetadataError> {
        let token = IOwnershipToken::new(self.address, &self.provider);
        let uri = token.tokenURI(token_id.as_u256()).call().await?;

        TokenMetadata::from_token_uri(token_id, &uri)
    }
}
