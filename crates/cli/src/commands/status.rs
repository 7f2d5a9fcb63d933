use alloy::{primitives::Address, providers::DynProvider};
use doma_core::{
    AuctionGateway, AuctionId, AuctionView, BetCategory, BetThresholds, BettingGateway,
    BettingPhase, BettingPool, Error, HybridAuctionClient, MetadataResolver, OwnershipTokenClient,
    PremiumAuctionClient, TokenId, TokenMetadata, Timestamp, betting_phase, categorize_state,
    project,
};
use rust_decimal::Decimal;
use tracing::warn;

use crate::config::AuctionConfig;

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub id: AuctionId,
    pub view: AuctionView,
    pub tokens: Vec<TokenMetadata>,
    pub royalty_percent: Option<Decimal>,
    pub betting: Option<BettingReport>,
}

#[derive(Debug, Clone)]
pub struct BettingReport {
    pub thresholds: BetThresholds,
    pub pool: BettingPool,
    pub phase: BettingPhase,
    pub category: BetCategory,
}

pub async fn hybrid_status(
    provider: DynProvider,
    config: &AuctionConfig,
    id: AuctionId,
) -> Result<StatusReport, Error> {
    let client = HybridAuctionClient::new(
        provider.clone(),
        config.contracts.hybrid_auction,
        config.units.hybrid(),
    );

    let (params, state) = client.read_auction(id).await?;
    let royalty = client.read_current_royalty(id).await?;
    let token_ids: Vec<TokenId> = client
        .read_token_ids(id)
        .await?
        .into_iter()
        .map(TokenId::new)
        .collect();

    let ownership = OwnershipTokenClient::new(provider, config.contracts.ownership_token);
    let tokens = resolve_names(&ownership, &token_ids).await;

    Ok(StatusReport {
        id,
        view: project(&params, &state, Timestamp::now()),
        tokens,
        royalty_percent: Some(royalty),
        betting: None,
    })
}

pub async fn premium_status(
    provider: DynProvider,
    config: &AuctionConfig,
    address: Address,
    id: AuctionId,
) -> Result<StatusReport, Error> {
    let client = PremiumAuctionClient::new(provider.clone(), address, config.units.premium());

    let (params, state) = client.read_auction(id).await?;
    let now = Timestamp::now();

    let betting = match client.read_thresholds(id).await? {
        Some(thresholds) => {
            let pool = client.read_betting_pool(id).await?;
            Some(BettingReport {
                thresholds,
                phase: betting_phase(&pool, now),
                category: categorize_state(&state, &thresholds),
                pool,
            })
        }
        None => None,
    };

    let ownership = OwnershipTokenClient::new(provider, config.contracts.ownership_token);
    let token_id = client.read_token_id(id).await?;
    let tokens = resolve_names(&ownership, &[token_id]).await;

    Ok(StatusReport {
        id,
        view: project(&params, &state, now),
        tokens,
        royalty_percent: None,
        betting,
    })
}

async fn resolve_names<R>(resolver: &R, token_ids: &[TokenId]) -> Vec<TokenMetadata>
where
    R: MetadataResolver,
{
    let mut names = Vec::with_capacity(token_ids.len());
    for token_id in token_ids {
        let metadata = match resolver.resolve_token_metadata(*token_id).await {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(token = %token_id, %err, "falling back to placeholder metadata");
                TokenMetadata::placeholder(*token_id)
            }
        };
        names.push(metadata);
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use doma_core::error::MetadataError;

    struct Flaky;

    #[async_trait]
    impl MetadataResolver for Flaky {
        async fn resolve_token_metadata(
            &self,
            token_id: TokenId,
        ) -> Result<TokenMetadata, MetadataError> {
            if token_id == TokenId::from(2) {
                let err = serde_json::from_str::<TokenMetadata>("{").unwrap_err();
                return Err(MetadataError::Json(err));
            }
            Ok(TokenMetadata {
                name: format!("name-{token_id}.doma"),
                image: None,
            })
        }
    }

    #[tokio::test]
    async fn unresolvable_tokens_get_placeholders() {
        let names = resolve_names(&Flaky, &[TokenId::from(1), TokenId::from(2)]).await;

        assert_eq!(names[0].name, "name-1.doma");
        assert_eq!(names[1].name, "Domain #2");
    }
}
