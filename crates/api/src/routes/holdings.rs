//! Asset and liability register routes.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use nexus_core::accounting::{Asset, Liability, NewAsset, NewLiability};

use crate::{AppState, error::ApiError};

/// Creates the asset and liability routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assets", get(list_assets).post(add_asset))
        .route("/liabilities", get(list_liabilities).post(add_liability))
}

/// GET /assets
async fn list_assets(State(state): State<AppState>) -> Json<Vec<Asset>> {
    Json(state.accounting().list_assets().await)
}

/// POST /assets
async fn add_asset(
    State(state): State<AppState>,
    Json(payload): Json<NewAsset>,
) -> Result<(StatusCode, Json<Asset>), ApiError> {
    let asset = state.accounting().add_asset(payload).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /liabilities
async fn list_liabilities(State(state): State<AppState>) -> Json<Vec<Liability>> {
    Json(state.accounting().list_liabilities().await)
}

/// POST /liabilities
async fn add_liability(
    State(state): State<AppState>,
    Json(payload): Json<NewLiability>,
) -> Result<(StatusCode, Json<Liability>), ApiError> {
    let liability = state.accounting().add_liability(payload).await?;
    Ok((StatusCode::CREATED, Json(liability)))
}
