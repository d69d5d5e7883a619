mod api;
mod error;
mod ledger;
mod miner;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::env;
use uuid::Uuid;

use api::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    // Node identity: configured, or a fresh hyphenless UUIDv4. Used only as
    // the recipient of mining rewards.
    let node_id = env::var("NODE_ID").unwrap_or_else(|_| Uuid::new_v4().simple().to_string());

    println!("⛓️ Starting ledger node {node_id} at http://{host}:{port}");

    let state = web::Data::new(AppState::new(node_id));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
