//! Receivables routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use nexus_core::accounting::{Invoice, NewInvoice, PaymentOutcome};
use nexus_shared::types::InvoiceId;

use crate::{AppState, error::ApiError};

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/{invoice_id}/pay", post(pay_invoice))
}

/// GET /invoices
async fn list_invoices(State(state): State<AppState>) -> Json<Vec<Invoice>> {
    Json(state.accounting().list_invoices().await)
}

/// POST /invoices
async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<NewInvoice>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let invoice = state.accounting().create_invoice(payload).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// POST /invoices/{invoice_id}/pay
async fn pay_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<PaymentOutcome<Invoice>>, ApiError> {
    let outcome = state
        .accounting()
        .mark_invoice_paid(&InvoiceId::new(invoice_id))
        .await?;
    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_app, test_state};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_invoice_derives_totals() {
        let state = test_state();
        let (status, invoice) = send(
            test_app(state.clone()),
            "POST",
            "/api/v1/invoices",
            Some(json!({
                "clientName": "Initech",
                "dueDate": "2023-12-31",
                "items": [
                    { "description": "Audit", "quantity": 3, "unitPrice": "1200" },
                    { "description": "Report", "unitPrice": 300 }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(invoice["totalAmount"], "3900");
        assert_eq!(invoice["status"], "Sent");
        assert!(invoice["id"].as_str().unwrap().starts_with("INV-"));

        let (_, list) = send(test_app(state), "GET", "/api/v1/invoices", None).await;
        assert_eq!(list[0]["clientName"], "Initech");
    }

    #[tokio::test]
    async fn test_pay_invoice_once() {
        let state = test_state();
        let (status, first) =
            send(test_app(state.clone()), "POST", "/api/v1/invoices/INV-2023-001/pay", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["document"]["status"], "Paid");
        assert_eq!(first["transaction"]["category"], "Sales Revenue");

        let (status, second) =
            send(test_app(state.clone()), "POST", "/api/v1/invoices/INV-2023-001/pay", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(second["transaction"].is_null());

        let (_, ledger) = send(test_app(state), "GET", "/api/v1/transactions", None).await;
        assert_eq!(ledger.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_pay_unknown_invoice() {
        let (status, body) =
            send(test_app(test_state()), "POST", "/api/v1/invoices/INV-404/pay", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_invoice_requires_due_date() {
        let (status, body) = send(
            test_app(test_state()),
            "POST",
            "/api/v1/invoices",
            Some(json!({ "clientName": "Initech" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error: dueDate is required");
    }

    #[tokio::test]
    async fn test_create_invoice_with_overflowing_line() {
        let state = test_state();
        let (status, body) = send(
            test_app(state.clone()),
            "POST",
            "/api/v1/invoices",
            Some(json!({
                "clientName": "Initech",
                "dueDate": "2023-12-31",
                "items": [
                    {
                        "description": "Licences",
                        "quantity": "79228162514264337593543950335",
                        "unitPrice": "2"
                    }
                ]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");

        let (_, list) = send(test_app(state), "GET", "/api/v1/invoices", None).await;
        assert_eq!(list.as_array().unwrap().len(), 2);
    }
}
