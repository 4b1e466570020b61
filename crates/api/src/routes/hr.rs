//! HR routes: directory, hiring pipeline and proformas.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use nexus_core::hr::{
    Candidate, Employee, HireOutcome, HrError, JobProforma, NewCandidate, NewProforma,
};
use nexus_shared::types::{CandidateId, EmployeeId};
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Creates the HR routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(list_employees))
        .route("/employees/{employee_id}/credentials", post(add_credential))
        .route("/candidates", get(list_candidates).post(add_candidate))
        .route("/candidates/{candidate_id}/hire", post(hire_candidate))
        .route("/proformas", get(list_proformas).post(create_proforma))
}

/// Request body for adding a credential.
#[derive(Debug, Deserialize)]
pub struct AddCredentialRequest {
    /// Certification or degree.
    #[serde(default)]
    pub credential: String,
}

/// Query parameters for listing candidates.
#[derive(Debug, Default, Deserialize)]
pub struct ListCandidatesQuery {
    /// Only candidates not yet hired.
    #[serde(default)]
    pub open: bool,
}

/// GET /employees
async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.hr().list_employees().await)
}

/// POST /employees/{employee_id}/credentials
async fn add_credential(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<AddCredentialRequest>,
) -> Result<Json<Employee>, ApiError> {
    let employee = state
        .hr()
        .add_credential(&EmployeeId::new(employee_id), &payload.credential)
        .await?;
    Ok(Json(employee))
}

/// GET /candidates
async fn list_candidates(
    State(state): State<AppState>,
    Query(query): Query<ListCandidatesQuery>,
) -> Json<Vec<Candidate>> {
    Json(state.hr().list_candidates(query.open).await)
}

/// POST /candidates
async fn add_candidate(
    State(state): State<AppState>,
    Json(payload): Json<NewCandidate>,
) -> Result<(StatusCode, Json<Candidate>), ApiError> {
    let candidate = state.hr().add_candidate(payload).await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// POST /candidates/{candidate_id}/hire
async fn hire_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> Result<(StatusCode, Json<HireOutcome>), ApiError> {
    let outcome = state.hr().hire(&CandidateId::new(candidate_id)).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// GET /proformas
async fn list_proformas(State(state): State<AppState>) -> Json<Vec<JobProforma>> {
    Json(state.hr().list_proformas().await)
}

/// POST /proformas
///
/// Incomplete requests are rejected before the description is drafted.
async fn create_proforma(
    State(state): State<AppState>,
    Json(payload): Json<NewProforma>,
) -> Result<(StatusCode, Json<JobProforma>), ApiError> {
    let (title, department) = payload.validated().map_err(HrError::from)?;
    let drafted = state.insights.job_description(title, department).await;

    let proforma = state.hr().create_proforma(&payload, drafted).await?;
    Ok((StatusCode::CREATED, Json(proforma)))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{send, test_app, test_state};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_hire_flow() {
        let state = test_state();
        let (status, outcome) =
            send(test_app(state.clone()), "POST", "/api/v1/candidates/1/hire", None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(outcome["employee"]["email"], "alice.smith@company.com");
        assert_eq!(outcome["employee"]["department"], "General");
        assert_eq!(outcome["candidate"]["stage"], "Hired");

        let (status, body) =
            send(test_app(state.clone()), "POST", "/api/v1/candidates/1/hire", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "BUSINESS_RULE_VIOLATION");

        let (_, open) =
            send(test_app(state.clone()), "GET", "/api/v1/candidates?open=true", None).await;
        assert_eq!(open.as_array().unwrap().len(), 3);

        let (_, employees) = send(test_app(state), "GET", "/api/v1/employees", None).await;
        assert_eq!(employees.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_hire_unknown_candidate() {
        let (status, _) =
            send(test_app(test_state()), "POST", "/api/v1/candidates/99/hire", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_candidate() {
        let (status, candidate) = send(
            test_app(test_state()),
            "POST",
            "/api/v1/candidates",
            Some(json!({ "name": "Evan Wright", "applyingFor": "QA Tester" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(candidate["stage"], "Applied");
    }

    #[tokio::test]
    async fn test_add_credential() {
        let (status, employee) = send(
            test_app(test_state()),
            "POST",
            "/api/v1/employees/3/credentials",
            Some(json!({ "credential": "CCNA" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(employee["credentials"], json!(["CompTIA A+", "CCNA"]));
    }

    #[tokio::test]
    async fn test_create_proforma_uses_drafted_description() {
        let state = test_state();
        let (status, proforma) = send(
            test_app(state.clone()),
            "POST",
            "/api/v1/proformas",
            Some(json!({ "title": "Data Analyst", "department": "Finance" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(proforma["description"], "Data Analyst for Finance");
        assert_eq!(proforma["salaryRange"], "$50,000 - $80,000");

        let (_, list) = send(test_app(state), "GET", "/api/v1/proformas", None).await;
        assert_eq!(list.as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_create_proforma_requires_department() {
        let (status, body) = send(
            test_app(test_state()),
            "POST",
            "/api/v1/proformas",
            Some(json!({ "title": "Data Analyst" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Validation error: department is required");
    }
}
