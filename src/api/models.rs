use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::ledger::{Block, Ledger};
use crate::miner::CancelToken;
use crate::transaction::Transaction;

/// Shared application state: the in-memory ledger plus the node identity
/// used as the reward recipient. The cancel token lets a shutdown path
/// abandon an in-flight proof search.
pub struct AppState {
    pub ledger: Mutex<Ledger>,
    pub node_id: String,
    pub mining_cancel: CancelToken,
}

impl AppState {
    pub fn new(node_id: String) -> Self {
        Self {
            ledger: Mutex::new(Ledger::new()),
            node_id,
            mining_cancel: CancelToken::new(),
        }
    }
}

/* ---------- Chain API Models ---------- */

#[derive(Serialize)]
pub struct ChainResponse<'a> {
    pub chain: &'a [Block],
    pub length: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub length: usize,
}

/* ---------- Mining API Models ---------- */

#[derive(Serialize, Deserialize)]
pub struct MineResponse {
    pub message: String,
    pub index: u64,
    pub transactions: Vec<Transaction>,
    pub proof: u64,
    pub previous_hash: String,
}

/* ---------- TX API Models ---------- */

#[derive(Serialize, Deserialize)]
pub struct NewTransactionRequest {
    pub sender: String,
    pub recipient: String,
    pub amount: u64,
}

#[derive(Serialize, Deserialize)]
pub struct NewTransactionResponse {
    pub message: String,
    pub index: u64,
}

#[derive(Serialize, Deserialize)]
pub struct PendingResponse {
    pub size: usize,
    pub transactions: Vec<Transaction>,
}
