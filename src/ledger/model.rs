use std::mem;

use crate::error::{LedgerError, Result};
use crate::miner;
use crate::transaction::Transaction;

use super::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

/// Append-only chain plus the pool of transactions waiting for the next
/// block. Sole owner of both; all mutation goes through these methods.
#[derive(Debug)]
pub struct Ledger {
    pub chain: Vec<Block>,
    pub pending: Vec<Transaction>,
}

impl Ledger {
    /// Initialize a new ledger with a genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending: Vec::new(),
        }
    }

    /// Return the most recently sealed block.
    pub fn last_block(&self) -> Result<&Block> {
        self.chain.last().ok_or(LedgerError::EmptyChain)
    }

    /// Queue a transaction for the next block, in arrival order. Returns the
    /// index of the block that will contain it.
    pub fn submit_transaction(&mut self, sender: String, recipient: String, amount: u64) -> u64 {
        self.pending
            .push(Transaction::new(sender, recipient, amount));
        self.chain.len() as u64 + 1
    }

    /// Seal the current pool into a new block and append it. The pool is
    /// emptied; its snapshot becomes the block's transactions. When
    /// `previous_hash` is not supplied it is derived from the current last
    /// block. The proof is taken as-is; validity against the puzzle is the
    /// caller's contract (the miner found it).
    pub fn seal_block(&mut self, proof: u64, previous_hash: Option<String>) -> Result<&Block> {
        let previous_hash = match previous_hash {
            Some(hash) => hash,
            None => self.last_block()?.compute_hash(),
        };

        let block = Block::seal(
            self.chain.len() as u64 + 1,
            previous_hash,
            proof,
            mem::take(&mut self.pending),
        );

        self.chain.push(block);
        self.last_block()
    }

    /// Validate the entire chain: genesis shape, hash linkage and PoW.
    pub fn is_valid_chain(&self) -> bool {
        let Some(genesis) = self.chain.first() else {
            return false;
        };
        if genesis.index != 1
            || genesis.proof != GENESIS_PROOF
            || genesis.previous_hash != GENESIS_PREVIOUS_HASH
        {
            return false;
        }

        for i in 1..self.chain.len() {
            let current = &self.chain[i];
            let prev = &self.chain[i - 1];

            if current.previous_hash != prev.compute_hash() {
                return false;
            }
            if !miner::valid_proof(prev.proof, current.proof) {
                return false;
            }
        }

        true
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Ledger;
    use crate::ledger::{GENESIS_PREVIOUS_HASH, MINING_REWARD, MINING_SENDER};
    use crate::miner;
    use crate::transaction::Transaction;

    #[test]
    fn fresh_ledger_holds_only_genesis() {
        let ledger = Ledger::new();
        assert_eq!(ledger.len(), 1);
        assert!(ledger.pending.is_empty());

        let genesis = ledger.last_block().unwrap();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, 100);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
    }

    #[test]
    fn submissions_queue_in_arrival_order() {
        let mut ledger = Ledger::new();
        let idx1 = ledger.submit_transaction("A".into(), "B".into(), 10);
        let idx2 = ledger.submit_transaction("C".into(), "D".into(), 20);

        assert_eq!(idx1, 2);
        assert_eq!(idx2, 2);
        assert_eq!(
            ledger.pending,
            vec![
                Transaction::new("A".into(), "B".into(), 10),
                Transaction::new("C".into(), "D".into(), 20),
            ]
        );
    }

    #[test]
    fn sealing_snapshots_and_clears_the_pool() {
        let mut ledger = Ledger::new();
        ledger.submit_transaction("A".into(), "B".into(), 10);
        ledger.submit_transaction("C".into(), "D".into(), 20);
        let snapshot = ledger.pending.clone();

        let block = ledger.seal_block(12345, None).unwrap();
        assert_eq!(block.index, 2);
        assert_eq!(block.transactions, snapshot);
        assert!(ledger.pending.is_empty());
    }

    #[test]
    fn sealing_derives_the_previous_hash_when_omitted() {
        let mut ledger = Ledger::new();
        let genesis_hash = ledger.last_block().unwrap().compute_hash();

        let block = ledger.seal_block(12345, None).unwrap();
        assert_eq!(block.previous_hash, genesis_hash);
    }

    #[test]
    fn link_invariant_holds_across_seals() {
        let mut ledger = Ledger::new();
        ledger.seal_block(1, None).unwrap();
        ledger.seal_block(2, None).unwrap();

        for i in 1..ledger.chain.len() {
            assert_eq!(
                ledger.chain[i].previous_hash,
                ledger.chain[i - 1].compute_hash()
            );
        }
    }

    #[test]
    fn tampering_breaks_chain_validity() {
        let mut ledger = Ledger::new();
        ledger.submit_transaction("A".into(), "B".into(), 10);
        let proof = miner::search(ledger.last_block().unwrap().proof);
        ledger.seal_block(proof, None).unwrap();
        assert!(ledger.is_valid_chain());

        ledger.chain[1]
            .transactions
            .push(Transaction::new("M".into(), "M".into(), 999));
        assert!(!ledger.is_valid_chain());
    }

    // Full mine workflow: user transaction, search from the genesis proof,
    // reward transaction, seal against the genesis hash.
    #[test]
    fn mine_workflow_end_to_end() {
        let mut ledger = Ledger::new();
        ledger.submit_transaction("A".into(), "B".into(), 10);

        let last_proof = ledger.last_block().unwrap().proof;
        let proof = miner::search(last_proof);

        ledger.submit_transaction(MINING_SENDER.into(), "node".into(), MINING_REWARD);
        let previous_hash = ledger.last_block().unwrap().compute_hash();
        let block = ledger.seal_block(proof, Some(previous_hash.clone())).unwrap();

        assert_eq!(block.index, 2);
        assert_eq!(block.transactions.len(), 2);
        assert_eq!(block.transactions[0], Transaction::new("A".into(), "B".into(), 10));
        assert_eq!(
            block.transactions[1],
            Transaction::new(MINING_SENDER.into(), "node".into(), MINING_REWARD)
        );
        assert_eq!(block.previous_hash, previous_hash);
        assert!(miner::valid_proof(100, block.proof));
        assert!(ledger.is_valid_chain());
    }
}
