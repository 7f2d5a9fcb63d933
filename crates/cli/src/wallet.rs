use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use doma_core::{WalletContext, WalletGateway, error::WalletError};
use tracing::{debug, info};

use crate::config::{AuctionConfig, ConfigOverrides, resolve_private_key, resolve_rpc_url};

/// Key-backed wallet session. The key never leaves the process; the RPC
/// endpoint decides which chain it is on.
pub struct LocalWallet {
    signer: PrivateKeySigner,
    provider: DynProvider,
    context: WalletContext,
}

impl LocalWallet {
    pub fn new(signer: PrivateKeySigner, provider: DynProvider) -> Self {
        Self {
            signer,
            provider,
            context: WalletContext::disconnected(),
        }
    }

    pub fn context(&self) -> WalletContext {
        self.context
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

#[async_trait]
impl WalletGateway for LocalWallet {
    async fn connect(&mut self) -> Result<WalletContext, WalletError> {
        let chain_id = self.provider.get_chain_id().await?;
        self.context = WalletContext::connected(self.signer.address(), chain_id);
        debug!(address = %self.signer.address(), chain_id, "wallet connected");
        Ok(self.context)
    }

    fn disconnect(&mut self) -> WalletContext {
        self.context = WalletContext::disconnected();
        self.context
    }

    fn current_address(&self) -> Option<Address> {
        self.context.address
    }

    async fn current_chain_id(&self) -> Result<u64, WalletError> {
        Ok(self.provider.get_chain_id().await?)
    }

    // A local key cannot move its endpoint, so switching only succeeds when
    // the endpoint already serves `chain_id`.
    async fn switch_chain(&mut self, chain_id: u64) -> Result<WalletContext, WalletError> {
        let actual = self.current_chain_id().await?;
        if actual != chain_id {
            return Err(WalletError::WrongChain {
                expected: chain_id,
                actual,
            });
        }

        self.context.chain_id = Some(actual);
        Ok(self.context)
    }
}

pub fn parse_signer(private_key: &str) -> Result<PrivateKeySigner, WalletError> {
    private_key
        .trim()
        .parse::<PrivateKeySigner>()
        .map_err(|err| WalletError::InvalidKey(err.to_string()))
}

/// Address of the configured key, without touching the network.
pub fn configured_address(
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
) -> eyre::Result<Address> {
    let signer = parse_signer(&resolve_private_key(config, overrides)?)?;
    Ok(signer.address())
}

pub async fn read_provider(
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
) -> eyre::Result<DynProvider> {
    let rpc_url = resolve_rpc_url(config, overrides)?;
    let provider = ProviderBuilder::new().connect(&rpc_url).await?;
    Ok(provider.erased())
}

/// Connect a signing provider and make sure it talks to the configured chain.
pub async fn connect_wallet(
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
) -> eyre::Result<LocalWallet> {
    let rpc_url = resolve_rpc_url(config, overrides)?;
    let signer = parse_signer(&resolve_private_key(config, overrides)?)?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer.clone()))
        .connect(&rpc_url)
        .await?
        .erased();

    let mut wallet = LocalWallet::new(signer, provider);
    wallet.connect().await?;
    let context = wallet.switch_chain(config.chain.chain_id).await?;
    let address = context.ensure_chain(config.chain.chain_id)?;

    info!(%address, chain_id = config.chain.chain_id, "using wallet");
    Ok(wallet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!(
            parse_signer("0x1234"),
            Err(WalletError::InvalidKey(_))
        ));
    }

    #[test]
    fn accepts_hex_keys_with_whitespace() {
        let key = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
        let signer = parse_signer(&format!("  {key}\n")).unwrap();
        let overrides = ConfigOverrides {
            rpc_url: None,
            private_key: Some(key.to_string()),
        };
        let config: AuctionConfig =
            toml::from_str(include_str!("../auction.example.toml")).unwrap();
        assert_eq!(
            configured_address(&config, &overrides).unwrap(),
            signer.address()
        );
        assert_eq!(
            signer.address(),
            "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
                .parse::<Address>()
                .unwrap()
        );
    }
}
