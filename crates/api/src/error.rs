//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nexus_core::accounting::AccountingError;
use nexus_core::hr::HrError;
use nexus_shared::AppError;
use serde_json::json;
use tracing::error;

/// An error returned from a handler, rendered as
/// `{"error": <code>, "message": <text>}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<AccountingError> for ApiError {
    fn from(err: AccountingError) -> Self {
        Self(err.into())
    }
}

impl From<HrError> for ApiError {
    fn from(err: HrError) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use nexus_core::validation::MissingField;
    use nexus_shared::types::InvoiceId;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let (status, body) = render(AccountingError::from(MissingField("clientName")).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "Validation error: clientName is required");
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) =
            render(AccountingError::InvoiceNotFound(InvoiceId::from("INV-9")).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_amount_overflow_is_unprocessable() {
        let (status, body) = render(AccountingError::AmountOverflow.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");
    }
}
