use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sha2::{Digest, Sha256};

/// Required prefix of a winning digest: 4 hex zeros (16 bits). Fixed, no
/// adjustment mechanism.
pub const DIFFICULTY_PREFIX: &str = "0000";

/// Cooperative cancellation flag for an in-flight proof search. The search
/// touches no shared state, so cancelling it mid-flight leaves the ledger
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The puzzle predicate: hash the decimal concatenation `{last_proof}{proof}`
/// and require the digest to start with `DIFFICULTY_PREFIX`. Pure and
/// deterministic.
pub fn valid_proof(last_proof: u64, proof: u64) -> bool {
    let guess = format!("{last_proof}{proof}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest.starts_with(DIFFICULTY_PREFIX)
}

/// Exhaustive search for the smallest proof satisfying the puzzle against
/// `last_proof`. CPU-bound, expected ~65k attempts; callers on an async
/// runtime must run it on a blocking pool.
pub fn search(last_proof: u64) -> u64 {
    let mut proof = 0u64;
    while !valid_proof(last_proof, proof) {
        proof += 1;
    }
    proof
}

/// Like `search`, but abandons the scan and returns `None` once `cancel` is
/// set. The flag is checked every candidate; the check is negligible next to
/// the hash itself.
pub fn search_with_cancel(last_proof: u64, cancel: &CancelToken) -> Option<u64> {
    let mut proof = 0u64;
    loop {
        if cancel.is_cancelled() {
            return None;
        }
        if valid_proof(last_proof, proof) {
            return Some(proof);
        }
        proof += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{CancelToken, search, search_with_cancel, valid_proof};

    #[test]
    fn predicate_is_deterministic() {
        for (last, candidate) in [(100u64, 0u64), (100, 12345), (7, 7)] {
            assert_eq!(valid_proof(last, candidate), valid_proof(last, candidate));
        }
    }

    #[test]
    fn search_finds_the_smallest_valid_proof() {
        let p = search(100);
        assert!(valid_proof(100, p));
        assert!((0..p).all(|candidate| !valid_proof(100, candidate)));
    }

    #[test]
    fn search_is_repeatable() {
        assert_eq!(search(100), search(100));
    }

    #[test]
    fn cancelled_search_returns_none() {
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(search_with_cancel(100, &cancel), None);
    }

    #[test]
    fn uncancelled_search_matches_plain_search() {
        let cancel = CancelToken::new();
        assert_eq!(search_with_cancel(100, &cancel), Some(search(100)));
    }
}
