use alloy::{
    contract,
    primitives::B256,
    providers::MulticallError,
    transports::TransportError,
};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("threshold {threshold} is outside [{reserve_price}, {start_price}]")]
    InvalidThreshold {
        threshold: Decimal,
        reserve_price: Decimal,
        start_price: Decimal,
    },

    #[error("requested {requested} units but only {remaining} remain")]
    InsufficientInventory { requested: u64, remaining: u64 },

    #[error("invalid auction parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("auction is not accepting bids")]
    AuctionNotActive,

    #[error("amount exceeds the representable range")]
    AmountOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("amount {0} cannot be negative")]
    Negative(Decimal),

    #[error("value does not fit the target type")]
    Overflow,
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to fetch state: {0}")]
    Transport(#[from] TransportError),

    #[error("contract call failed: {0}")]
    Contract(#[from] contract::Error),

    #[error("multicall failed: {0}")]
    Multicall(#[from] MulticallError),

    #[error("auction {0} does not exist")]
    AuctionNotFound(String),

    #[error("contract returned malformed data: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("transaction failed: {0}")]
    Contract(#[from] contract::Error),

    #[error("failed to poll transaction: {0}")]
    Transport(#[from] TransportError),

    #[error("transaction reverted: {tx_hash:?}")]
    Reverted { tx_hash: B256 },

    #[error("no receipt for {tx_hash:?} after {waited_secs}s")]
    Timeout { tx_hash: B256, waited_secs: u64 },
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("wallet is not connected")]
    NotConnected,

    #[error("wallet is on chain {actual}, expected {expected}")]
    WrongChain { expected: u64, actual: u64 },

    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    #[error("failed to query chain: {0}")]
    Transport(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read token uri: {0}")]
    Contract(#[from] contract::Error),

    #[error("token metadata is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}
