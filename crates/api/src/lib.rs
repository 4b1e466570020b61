//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes under `/api/v1`
//! - Application state shared by handlers
//! - Error responses in a single JSON shape

pub mod error;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use nexus_insight::InsightProvider;
use nexus_store::{AccountingRepository, BusinessStore, HrRepository, ReportRepository};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Business records.
    pub store: BusinessStore,
    /// Generative-AI collaborator.
    pub insights: Arc<dyn InsightProvider>,
}

impl AppState {
    /// Creates state over a store and an insight provider.
    pub fn new(store: BusinessStore, insights: Arc<dyn InsightProvider>) -> Self {
        Self { store, insights }
    }

    /// Repository for bookkeeping records.
    #[must_use]
    pub fn accounting(&self) -> AccountingRepository {
        AccountingRepository::new(self.store.clone())
    }

    /// Repository for HR records.
    #[must_use]
    pub fn hr(&self) -> HrRepository {
        HrRepository::new(self.store.clone())
    }

    /// Repository for computed reports.
    #[must_use]
    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.store.clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
