//! HR error types.

use nexus_shared::AppError;
use nexus_shared::types::{CandidateId, EmployeeId};
use thiserror::Error;

use crate::validation::MissingField;

/// HR-related errors.
#[derive(Debug, Error)]
pub enum HrError {
    /// A required input field was missing.
    #[error(transparent)]
    MissingField(#[from] MissingField),

    /// Employee not found.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(EmployeeId),

    /// Candidate not found.
    #[error("Candidate not found: {0}")]
    CandidateNotFound(CandidateId),

    /// Candidate was already hired.
    #[error("Candidate {0} has already been hired")]
    CandidateAlreadyHired(CandidateId),
}

impl HrError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::EmployeeNotFound(_) => "EMPLOYEE_NOT_FOUND",
            Self::CandidateNotFound(_) => "CANDIDATE_NOT_FOUND",
            Self::CandidateAlreadyHired(_) => "CANDIDATE_ALREADY_HIRED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingField(_) => 400,
            Self::EmployeeNotFound(_) | Self::CandidateNotFound(_) => 404,
            Self::CandidateAlreadyHired(_) => 422,
        }
    }
}

impl From<HrError> for AppError {
    fn from(err: HrError) -> Self {
        match err {
            HrError::MissingField(_) => Self::Validation(err.to_string()),
            HrError::EmployeeNotFound(_) | HrError::CandidateNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            HrError::CandidateAlreadyHired(_) => Self::BusinessRule(err.to_string()),
        }
    }
}
