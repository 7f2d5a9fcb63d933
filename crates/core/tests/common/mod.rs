#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use doma_core::{
    AuctionDirectory, AuctionGateway, AuctionId, AuctionParameters, AuctionState, BetCategory,
    BetThresholds, BettingGateway, BettingPool, Error, SoftBidGateway, StateError, Timestamp,
    TransactionError, TxHandle, TxReceipt,
};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Hard {
        units: u64,
        value: Decimal,
    },
    Soft {
        threshold: Decimal,
        units: u64,
        value: Decimal,
    },
    Commit {
        hash: B256,
        amount: Decimal,
    },
    Reveal {
        choice: BetCategory,
        amount: Decimal,
        secret: U256,
    },
}

/// In-memory auction contract. Every hard bid fills immediately.
pub struct MockGateway {
    pub id: AuctionId,
    pub seller: Address,
    pub params: AuctionParameters,
    pub state: Mutex<AuctionState>,
    pub thresholds: Option<BetThresholds>,
    pub pool: BettingPool,
    pub submissions: Mutex<Vec<Submission>>,
    pub state_reads: AtomicUsize,
    pub revert: bool,
}

impl MockGateway {
    pub fn new(params: AuctionParameters, state: AuctionState) -> Self {
        Self {
            id: AuctionId::from(1),
            seller: Address::with_last_byte(0xaa),
            params,
            state: Mutex::new(state),
            thresholds: None,
            pool: BettingPool {
                commit_deadline: Timestamp::new(0),
                reveal_deadline: Timestamp::new(0),
                total_pool: Decimal::ZERO,
                settled: false,
            },
            submissions: Mutex::new(Vec::new()),
            state_reads: AtomicUsize::new(0),
            revert: false,
        }
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    fn check_id(&self, id: AuctionId) -> Result<(), Error> {
        if id != self.id {
            return Err(StateError::AuctionNotFound(id.to_string()).into());
        }
        Ok(())
    }

    fn record(&self, submission: Submission) -> TxHandle {
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(submission);
        TxHandle::new(B256::with_last_byte(submissions.len() as u8))
    }
}

#[async_trait]
impl AuctionGateway for MockGateway {
    async fn read_auction_parameters(&self, id: AuctionId) -> Result<AuctionParameters, Error> {
        self.check_id(id)?;
        Ok(self.params.clone())
    }

    async fn read_auction_state(&self, id: AuctionId) -> Result<AuctionState, Error> {
        self.check_id(id)?;
        self.state_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.state.lock().unwrap().clone())
    }

    async fn submit_hard_bid(
        &self,
        id: AuctionId,
        desired_units: u64,
        value: Decimal,
    ) -> Result<TxHandle, Error> {
        self.check_id(id)?;
        {
            let mut state = self.state.lock().unwrap();
            state.filled_units += desired_units;
            if state.filled_units >= self.params.unit_count() {
                state.cleared = true;
            }
        }
        Ok(self.record(Submission::Hard {
            units: desired_units,
            value,
        }))
    }

    async fn await_confirmation(&self, tx: TxHandle) -> Result<TxReceipt, Error> {
        if self.revert {
            return Err(TransactionError::Reverted { tx_hash: tx.hash() }.into());
        }
        Ok(TxReceipt {
            tx_hash: tx.hash(),
            block_number: Some(100),
            gas_used: 21_000,
        })
    }
}

#[async_trait]
impl AuctionDirectory for MockGateway {
    async fn auction_count(&self) -> Result<u64, Error> {
        Ok(self.id.as_u256().to::<u64>())
    }

    async fn read_seller(&self, id: AuctionId) -> Result<Address, Error> {
        self.check_id(id)?;
        Ok(self.seller)
    }
}

#[async_trait]
impl SoftBidGateway for MockGateway {
    async fn submit_soft_bid(
        &self,
        id: AuctionId,
        threshold_price: Decimal,
        desired_units: u64,
        value: Decimal,
    ) -> Result<TxHandle, Error> {
        self.check_id(id)?;
        Ok(self.record(Submission::Soft {
            threshold: threshold_price,
            units: desired_units,
            value,
        }))
    }
}

#[async_trait]
impl BettingGateway for MockGateway {
    async fn read_thresholds(&self, id: AuctionId) -> Result<Option<BetThresholds>, Error> {
        self.check_id(id)?;
        Ok(self.thresholds)
    }

    async fn read_betting_pool(&self, id: AuctionId) -> Result<BettingPool, Error> {
        self.check_id(id)?;
        Ok(self.pool.clone())
    }

    async fn submit_commit_bet(
        &self,
        id: AuctionId,
        commit_hash: B256,
        amount: Decimal,
    ) -> Result<TxHandle, Error> {
        self.check_id(id)?;
        Ok(self.record(Submission::Commit {
            hash: commit_hash,
            amount,
        }))
    }

    async fn submit_reveal_bet(
        &self,
        id: AuctionId,
        choice: BetCategory,
        amount: Decimal,
        secret: U256,
    ) -> Result<TxHandle, Error> {
        self.check_id(id)?;
        Ok(self.record(Submission::Reveal {
            choice,
            amount,
            secret,
        }))
    }
}

/// 1000 -> 700 at 1 per second over 300 seconds, 100 units.
pub fn reference_params(start_time: Timestamp) -> AuctionParameters {
    AuctionParameters::new(
        Decimal::from(1000),
        Decimal::from(700),
        Decimal::ONE,
        start_time,
        300,
        100,
    )
    .expect("valid params")
}
