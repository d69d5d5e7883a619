use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::transaction::Transaction;

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

/// A single block in the chain, immutable once sealed. `previous_hash` is
/// the SHA-256 digest of the predecessor's canonical serialization, so each
/// block commits to the entire chain behind it.
///
/// Field order is lexicographic by name: `canonical_json` relies on it for
/// deterministic key ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub previous_hash: String,
    pub proof: u64,
    pub timestamp: i64, // Unix timestamp (UTC)
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Create the genesis block (first block in the chain).
    pub fn genesis() -> Self {
        Self {
            index: 1,
            previous_hash: String::from(GENESIS_PREVIOUS_HASH),
            proof: GENESIS_PROOF,
            timestamp: Utc::now().timestamp(),
            transactions: Vec::new(),
        }
    }

    /// Create a block at `index` carrying the given pool snapshot,
    /// timestamped now. Sealing (appending to the chain) is the Ledger's job.
    pub fn seal(
        index: u64,
        previous_hash: String,
        proof: u64,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            index,
            previous_hash,
            proof,
            timestamp: Utc::now().timestamp(),
            transactions,
        }
    }

    /// Canonical serialization used as the hash preimage: JSON with keys in
    /// lexicographic order and no extraneous whitespace. Two structurally
    /// equal blocks always produce the identical string.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).expect("serialize block")
    }

    /// SHA-256 hash (hex, 64 chars) of the canonical serialization.
    pub fn compute_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_json().as_bytes());
        let digest = hasher.finalize();
        hex::encode(digest)
    }
}
