//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod accounts;
pub mod bills;
pub mod dashboard;
pub mod health;
pub mod holdings;
pub mod hr;
pub mod invoices;
pub mod reports;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dashboard::routes())
        .merge(accounts::routes())
        .merge(transactions::routes())
        .merge(invoices::routes())
        .merge(bills::routes())
        .merge(holdings::routes())
        .merge(reports::routes())
        .merge(hr::routes())
}
