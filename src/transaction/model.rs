use serde::{Deserialize, Serialize};

/// A value transfer waiting in the pending pool until a block seals it.
/// Immutable after creation; the core does not validate addresses or
/// amounts (that belongs to the HTTP boundary, if anywhere).
///
/// Field order is lexicographic by name: the derived serde output is the
/// canonical serialization hashed by `Block::compute_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: u64,
    pub recipient: String,
    pub sender: String,
}

impl Transaction {
    pub fn new(sender: String, recipient: String, amount: u64) -> Self {
        Self {
            amount,
            recipient,
            sender,
        }
    }
}
