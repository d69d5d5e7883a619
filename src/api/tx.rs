use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info};

use super::models::{AppState, NewTransactionRequest, NewTransactionResponse, PendingResponse};

/// Submit a new transaction into the pending pool. Missing body fields are
/// rejected by the Json extractor before we get here (400).
#[post("/transactions/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<NewTransactionRequest>,
) -> impl Responder {
    let body = body.into_inner();

    let index = {
        let mut ledger = state.ledger.lock().expect("mutex poisoned");
        let index = ledger.submit_transaction(body.sender, body.recipient, body.amount);
        debug!(
            "POST /transactions/new - pool size now {} (target block {})",
            ledger.pending.len(),
            index
        );
        index
    };

    info!("POST /transactions/new - queued for block {index}");
    HttpResponse::Created().json(NewTransactionResponse {
        message: format!("Transaction will be added to Block {index}"),
        index,
    })
}

/// List the transactions waiting for the next block.
#[get("/transactions/pending")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let ledger = state.ledger.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(PendingResponse {
        size: ledger.pending.len(),
        transactions: ledger.pending.clone(),
    })
}
