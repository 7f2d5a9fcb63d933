pub mod hybrid;
pub mod ownership;
pub mod premium;

pub use hybrid::HybridAuctionClient;
pub use ownership::OwnershipTokenClient;
pub use premium::PremiumAuctionClient;

use std::time::Duration;

use alloy::{network::ReceiptResponse, providers::Provider};
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::{
    error::TransactionError,
    types::primitives::{TxHandle, TxReceipt},
};

/// How long to wait for a receipt and how often to ask for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(2),
            timeout: Duration::from_secs(120),
        }
    }
}

pub(crate) async fn wait_for_receipt<P>(
    provider: &P,
    tx: TxHandle,
    policy: ConfirmationPolicy,
) -> Result<TxReceipt, TransactionError>
where
    P: Provider,
{
    let started = Instant::now();

    loop {
        if let Some(receipt) = provider.get_transaction_receipt(tx.hash()).await? {
            if !receipt.status() {
                warn!(tx = %tx.hash(), "transaction reverted");
                return Err(TransactionError::Reverted { tx_hash: tx.hash() });
            }

            return Ok(TxReceipt {
                tx_hash: tx.hash(),
                block_number: receipt.block_number(),
                gas_used: receipt.gas_used(),
            });
        }

        let waited = started.elapsed();
        if waited >= policy.timeout {
            return Err(TransactionError::Timeout {
                tx_hash: tx.hash(),
                waited_secs: waited.as_secs(),
            });
        }

        debug!(tx = %tx.hash(), waited_secs = waited.as_secs(), "receipt not available yet");
        sleep(policy.poll_interval).await;
    }
}
