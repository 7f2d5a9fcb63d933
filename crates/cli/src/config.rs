use std::{
    env, fs,
    path::{Path, PathBuf},
};

use alloy::primitives::Address;
use doma_core::{
    client::ConfirmationPolicy,
    units::{ContractUnits, DEFAULT_BLOCK_TIME_SECS, TimeBase},
};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "auction.toml";
pub const DOMA_TESTNET_CHAIN_ID: u64 = 97476;
const ENV_EXAMPLE: &str = include_str!("./.env.example");
const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";
const USER_CONFIG_DIR: &str = "doma";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AuctionConfig {
    pub chain: ChainConfig,
    pub contracts: ContractsConfig,
    #[serde(default)]
    pub units: UnitsConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChainConfig {
    pub rpc_url: Option<String>,
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ContractsConfig {
    pub hybrid_auction: Address,
    pub premium_auction: Option<Address>,
    pub ownership_token: Address,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Blocks,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnitsConfig {
    pub block_time_secs: u64,
    pub hybrid_duration: TimeUnit,
    pub hybrid_decrement: TimeUnit,
    pub premium_duration: TimeUnit,
    pub premium_decrement: TimeUnit,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct WalletConfig {
    pub private_key: Option<String>,
    pub confirmation_timeout_secs: Option<u64>,
    pub poll_interval_secs: Option<u64>,
}

/// Command-line values that win over the file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigOverrides {
    pub rpc_url: Option<String>,
    pub private_key: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse toml at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("missing rpc url: pass --rpc-url, set DOMA_RPC_URL or add [chain].rpc_url")]
    MissingRpcUrl,
    #[error("missing signing key: pass --private-key or set {PRIVATE_KEY_ENV}")]
    MissingPrivateKey,
    #[error("no premium auction contract configured in [contracts]")]
    MissingPremiumContract,
}

fn default_chain_id() -> u64 {
    DOMA_TESTNET_CHAIN_ID
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            block_time_secs: DEFAULT_BLOCK_TIME_SECS,
            hybrid_duration: TimeUnit::Blocks,
            hybrid_decrement: TimeUnit::Blocks,
            premium_duration: TimeUnit::Seconds,
            premium_decrement: TimeUnit::Minutes,
        }
    }
}

impl UnitsConfig {
    fn time_base(&self, unit: TimeUnit) -> TimeBase {
        match unit {
            TimeUnit::Seconds => TimeBase::Seconds,
            TimeUnit::Minutes => TimeBase::Minutes,
            TimeUnit::Hours => TimeBase::Hours,
            TimeUnit::Blocks => TimeBase::Blocks {
                block_time: self.block_time_secs,
            },
        }
    }

    pub fn hybrid(&self) -> ContractUnits {
        ContractUnits {
            duration: self.time_base(self.hybrid_duration),
            price_decrement: self.time_base(self.hybrid_decrement),
        }
    }

    pub fn premium(&self) -> ContractUnits {
        ContractUnits {
            duration: self.time_base(self.premium_duration),
            price_decrement: self.time_base(self.premium_decrement),
        }
    }
}

impl WalletConfig {
    pub fn confirmation(&self) -> ConfirmationPolicy {
        let defaults = ConfirmationPolicy::default();
        ConfirmationPolicy {
            poll_interval: self
                .poll_interval_secs
                .map(std::time::Duration::from_secs)
                .unwrap_or(defaults.poll_interval),
            timeout: self
                .confirmation_timeout_secs
                .map(std::time::Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

impl AuctionConfig {
    pub fn premium_auction(&self) -> Result<Address, SessionError> {
        self.contracts
            .premium_auction
            .ok_or(SessionError::MissingPremiumContract)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AuctionConfig, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AuctionConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(config)
}

/// `path` when it exists, otherwise `<config dir>/doma/auction.toml`.
pub fn resolve_config_path(path: &Path) -> PathBuf {
    if path.exists() {
        return path.to_path_buf();
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR).join(DEFAULT_CONFIG_PATH))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

pub fn resolve_rpc_url(
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
) -> Result<String, SessionError> {
    overrides
        .rpc_url
        .clone()
        .or_else(|| config.chain.rpc_url.clone())
        .ok_or(SessionError::MissingRpcUrl)
}

pub fn resolve_private_key(
    config: &AuctionConfig,
    overrides: &ConfigOverrides,
) -> Result<String, SessionError> {
    overrides
        .private_key
        .clone()
        .or_else(|| config.wallet.private_key.clone())
        .or_else(private_key_from_env)
        .ok_or(SessionError::MissingPrivateKey)
}

fn private_key_from_env() -> Option<String> {
    env::var(PRIVATE_KEY_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| parse_env_example(PRIVATE_KEY_ENV))
}

fn parse_env_example(key: &str) -> Option<String> {
    ENV_EXAMPLE
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .find_map(|line| {
            let (name, value) = line.split_once('=')?;
            let (name, value) = (name.trim(), value.trim());
            if name == key && !value.is_empty() {
                Some(value.to_string())
            } else {
                None
            }
        })
}
