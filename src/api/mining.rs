use actix_web::{HttpResponse, get, web};
use log::{info, warn};

use super::models::{AppState, MineResponse};
use crate::ledger::{MINING_REWARD, MINING_SENDER};
use crate::miner;

/// Mine a new block:
/// - Snapshot the head (last proof + its hash) under a short lock
/// - Run the proof search on the blocking pool, lock released
/// - Queue the reward transaction and seal, re-checking the head first
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let (last_proof, previous_hash) = {
        let ledger = state.ledger.lock().expect("mutex poisoned");
        let last = ledger.last_block()?;
        (last.proof, last.compute_hash())
    };

    let cancel = state.mining_cancel.clone();
    let proof = web::block(move || miner::search_with_cancel(last_proof, &cancel)).await?;

    let Some(proof) = proof else {
        warn!("MINER - search cancelled (last_proof={last_proof})");
        return Ok(HttpResponse::ServiceUnavailable().body("mining cancelled"));
    };

    let response = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");

        // The head may have moved while the search ran off-lock.
        if ledger.last_block()?.compute_hash() != previous_hash {
            warn!("MINER - head moved during search, discarding proof {proof}");
            return Ok(HttpResponse::Conflict().body("chain advanced during mining"));
        }

        ledger.submit_transaction(
            MINING_SENDER.to_string(),
            state.node_id.clone(),
            MINING_REWARD,
        );
        let block = ledger.seal_block(proof, Some(previous_hash))?;

        MineResponse {
            message: "New Block Forged".to_string(),
            index: block.index,
            transactions: block.transactions.clone(),
            proof: block.proof,
            previous_hash: block.previous_hash.clone(),
        }
    };

    info!(
        "MINER - sealed block #{} (proof={})",
        response.index, response.proof
    );
    Ok(HttpResponse::Ok().json(response))
}
