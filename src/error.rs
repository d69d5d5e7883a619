use actix_web::ResponseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, Error)]
pub enum LedgerError {
    /// The chain has no blocks. Unreachable after construction; if it ever
    /// surfaces, an invariant has been broken and the caller must treat it
    /// as fatal.
    #[error("ledger chain is empty (genesis block missing)")]
    EmptyChain,
}

impl ResponseError for LedgerError {}
