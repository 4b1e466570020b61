//! Dashboard routes.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use nexus_core::dashboard::DashboardStats;
use serde::Serialize;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/stats", get(stats))
        .route("/dashboard/insight", post(insight))
}

/// Generated financial commentary.
#[derive(Debug, Serialize)]
pub struct InsightResponse {
    /// Commentary text, or a fallback message.
    pub insight: String,
}

/// GET /dashboard/stats
async fn stats(State(state): State<AppState>) -> Result<Json<DashboardStats>, ApiError> {
    Ok(Json(state.reports().dashboard_stats().await?))
}

/// POST /dashboard/insight
///
/// The summary is taken under the read lock, which is released before the
/// model is called.
async fn insight(State(state): State<AppState>) -> Result<Json<InsightResponse>, ApiError> {
    let summary = state.reports().financial_summary().await?;
    let insight = state.insights.financial_insight(&summary).await;
    info!(chars = insight.len(), "Financial insight generated");
    Ok(Json(InsightResponse { insight }))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_app, test_state};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_stats_of_seed() {
        let (status, body) =
            send(test_app(test_state()), "GET", "/api/v1/dashboard/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["netWorth"], "1605000");
        assert_eq!(body["employeeCount"], 3);
        assert_eq!(body["cashFlow"][0]["name"], "Income");
        assert_eq!(body["cashFlow"][1]["name"], "Expenses");
    }

    #[tokio::test]
    async fn test_insight_uses_provider() {
        let (status, body) =
            send(test_app(test_state()), "POST", "/api/v1/dashboard/insight", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["insight"], "Cash position 450000");
    }

    #[tokio::test]
    async fn test_stats_with_overflowing_ledger() {
        let state = test_state();
        let (status, _) = send(
            test_app(state.clone()),
            "POST",
            "/api/v1/transactions",
            Some(json!({
                "description": "Windfall",
                "category": "Sales Revenue",
                "amount": "79228162514264337593543950335",
                "type": "Income"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) =
            send(test_app(state.clone()), "GET", "/api/v1/dashboard/stats", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");

        let (status, _) = send(test_app(state), "GET", "/api/v1/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
