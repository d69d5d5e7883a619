pub mod block;
pub mod model;

pub use block::Block;
pub use model::Ledger;

/// Proof assigned to the genesis block (no puzzle is solved for it).
pub const GENESIS_PROOF: u64 = 100;

/// Sentinel previous-hash of the genesis block: an all-zero digest, shaped
/// like a real SHA-256 hex digest but unreachable as one in practice.
pub const GENESIS_PREVIOUS_HASH: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Sender address used for mining-reward transactions.
pub const MINING_SENDER: &str = "0";

/// Reward credited to the node for each sealed block.
pub const MINING_REWARD: u64 = 1;
