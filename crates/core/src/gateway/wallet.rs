use alloy::primitives::Address;

use crate::error::WalletError;

/// Snapshot of the wallet session, handed to whatever needs a signer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletContext {
    pub address: Option<Address>,
    pub chain_id: Option<u64>,
}

impl WalletContext {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn connected(address: Address, chain_id: u64) -> Self {
        Self {
            address: Some(address),
            chain_id: Some(chain_id),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn require_address(&self) -> Result<Address, WalletError> {
        self.address.ok_or(WalletError::NotConnected)
    }

    /// Fails unless connected to `expected`.
    pub fn ensure_chain(&self, expected: u64) -> Result<Address, WalletError> {
        let address = self.require_address()?;

        match self.chain_id {
            Some(actual) if actual == expected => Ok(address),
            Some(actual) => Err(WalletError::WrongChain { expected, actual }),
            None => Err(WalletError::NotConnected),
        }
    }
}
