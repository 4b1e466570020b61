//! Financial report routes.

use axum::{Json, Router, extract::State, routing::get};
use nexus_core::accounting::{
    AccountsOverview, AgingReport, BalanceSheetSummary, IncomeStatementSummary,
};

use crate::{AppState, error::ApiError};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/balance-sheet", get(balance_sheet))
        .route("/reports/income-statement", get(income_statement))
        .route("/reports/aging", get(aging))
        .route("/reports/overview", get(overview))
}

/// GET /reports/balance-sheet
async fn balance_sheet(
    State(state): State<AppState>,
) -> Result<Json<BalanceSheetSummary>, ApiError> {
    Ok(Json(state.reports().balance_sheet().await?))
}

/// GET /reports/income-statement
async fn income_statement(
    State(state): State<AppState>,
) -> Result<Json<IncomeStatementSummary>, ApiError> {
    Ok(Json(state.reports().income_statement().await?))
}

/// GET /reports/aging
async fn aging(State(state): State<AppState>) -> Json<AgingReport> {
    Json(state.reports().aging().await)
}

/// GET /reports/overview
async fn overview(State(state): State<AppState>) -> Result<Json<AccountsOverview>, ApiError> {
    Ok(Json(state.reports().overview().await?))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_app, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_income_statement_of_seed() {
        let (status, body) =
            send(test_app(test_state()), "GET", "/api/v1/reports/income-statement", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalRevenue"], "23500");
        assert_eq!(body["totalExpenses"], "17200");
        assert_eq!(body["netIncome"], "6300");
    }

    #[tokio::test]
    async fn test_aging_of_seed() {
        let (status, body) =
            send(test_app(test_state()), "GET", "/api/v1/reports/aging", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["receivables"].as_array().unwrap().len(), 2);
        assert_eq!(body["receivables"][1]["overdue"], true);
        assert_eq!(body["payables"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_overview_of_seed() {
        let (_, body) = send(test_app(test_state()), "GET", "/api/v1/reports/overview", None).await;
        assert_eq!(body["receivables"]["totalOutstanding"], "7500");
        assert_eq!(body["receivables"]["awaitingPaymentCount"], 2);
        assert_eq!(body["payables"]["totalUnpaid"], "1150.00");
    }
}
