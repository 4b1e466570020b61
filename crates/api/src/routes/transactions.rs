//! Ledger transaction routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use nexus_core::accounting::{NewTransaction, Transaction};

use crate::{AppState, error::ApiError};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/transactions", get(list_transactions).post(record_transaction))
}

/// GET /transactions
async fn list_transactions(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    Json(state.accounting().list_transactions().await)
}

/// POST /transactions
async fn record_transaction(
    State(state): State<AppState>,
    Json(payload): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let tx = state.accounting().record_transaction(payload).await?;
    Ok((StatusCode::CREATED, Json(tx)))
}
