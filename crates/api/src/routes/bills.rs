//! Payables routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use nexus_core::accounting::{Bill, NewBill, PaymentOutcome};
use nexus_shared::types::BillId;

use crate::{AppState, error::ApiError};

/// Creates the bill routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bills", get(list_bills).post(create_bill))
        .route("/bills/{bill_id}/pay", post(pay_bill))
}

/// GET /bills
async fn list_bills(State(state): State<AppState>) -> Json<Vec<Bill>> {
    Json(state.accounting().list_bills().await)
}

/// POST /bills
async fn create_bill(
    State(state): State<AppState>,
    Json(payload): Json<NewBill>,
) -> Result<(StatusCode, Json<Bill>), ApiError> {
    let bill = state.accounting().create_bill(payload).await?;
    Ok((StatusCode::CREATED, Json(bill)))
}

/// POST /bills/{bill_id}/pay
async fn pay_bill(
    State(state): State<AppState>,
    Path(bill_id): Path<String>,
) -> Result<Json<PaymentOutcome<Bill>>, ApiError> {
    let outcome = state.accounting().pay_bill(&BillId::new(bill_id)).await?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_app, test_state};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_pay_bill_books_expense() {
        let state = test_state();
        let (status, outcome) =
            send(test_app(state.clone()), "POST", "/api/v1/bills/BILL-002/pay", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            outcome["transaction"]["description"],
            "Bill Payment: CleanCo Facilities (CLN-992)"
        );
        assert_eq!(outcome["transaction"]["type"], "Expense");

        let (_, overview) = send(test_app(state), "GET", "/api/v1/reports/overview", None).await;
        assert_eq!(overview["payables"]["unpaidCount"], 1);
    }

    #[tokio::test]
    async fn test_create_bill_requires_category() {
        let (status, body) = send(
            test_app(test_state()),
            "POST",
            "/api/v1/bills",
            Some(json!({ "vendorName": "Staples", "amount": 45 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error: category is required");
    }

    #[tokio::test]
    async fn test_create_bill_is_received() {
        let (status, bill) = send(
            test_app(test_state()),
            "POST",
            "/api/v1/bills",
            Some(json!({ "vendorName": "Staples", "amount": 45, "category": "Utilities" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(bill["status"], "Received");
        assert!(bill["id"].as_str().unwrap().starts_with("BILL-"));
    }
}
