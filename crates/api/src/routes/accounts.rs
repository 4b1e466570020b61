//! Chart of accounts routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use nexus_core::accounting::{Account, AccountType, NewAccount};
use nexus_shared::AppError;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/accounts", get(list_accounts).post(create_account))
}

/// Query parameters for listing accounts.
#[derive(Debug, Deserialize)]
pub struct ListAccountsQuery {
    /// Filter by account type (case-insensitive).
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

/// GET /accounts
async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ListAccountsQuery>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let account_type = query
        .account_type
        .as_deref()
        .map(str::parse::<AccountType>)
        .transpose()
        .map_err(AppError::Validation)?;

    Ok(Json(state.accounting().list_accounts(account_type).await))
}

/// POST /accounts
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<NewAccount>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let account = state.accounting().add_account(payload).await?;
    Ok((StatusCode::CREATED, Json(account)))
}
