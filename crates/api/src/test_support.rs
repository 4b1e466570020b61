//! Shared helpers for route tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use nexus_core::hr::JobDescription;
use nexus_core::insight::FinancialSummary;
use nexus_insight::InsightProvider;
use nexus_store::BusinessStore;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Provider answering with fixed text.
pub struct CannedInsights;

#[async_trait]
impl InsightProvider for CannedInsights {
    async fn financial_insight(&self, summary: &FinancialSummary) -> String {
        format!("Cash position {}", summary.cash_position)
    }

    async fn job_description(&self, title: &str, department: &str) -> JobDescription {
        JobDescription {
            description: format!("{title} for {department}"),
            requirements: vec!["Curiosity".to_string(), "Rust".to_string()],
        }
    }
}

pub fn test_state() -> AppState {
    AppState::new(BusinessStore::seeded(), Arc::new(CannedInsights))
}

pub fn test_app(state: AppState) -> Router {
    create_router(state)
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
