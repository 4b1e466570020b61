//! Insight error types.

use nexus_shared::AppError;
use thiserror::Error;

/// Errors talking to the generative model.
#[derive(Debug, Error)]
pub enum InsightError {
    /// No API key is configured.
    #[error("API key not configured")]
    MissingApiKey,

    /// The HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error status.
    #[error("Gemini API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// The model answered without any text.
    #[error("Empty response")]
    EmptyResponse,

    /// A prompt or response could not be (de)serialized.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl InsightError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "INSIGHT_NOT_CONFIGURED",
            Self::Http(_) | Self::Api { .. } => "INSIGHT_UNAVAILABLE",
            Self::EmptyResponse | Self::Json(_) => "INSIGHT_INVALID_RESPONSE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingApiKey => 503,
            _ => 502,
        }
    }
}

impl From<InsightError> for AppError {
    fn from(err: InsightError) -> Self {
        match err {
            InsightError::MissingApiKey => Self::Internal(err.to_string()),
            _ => Self::ExternalService(err.to_string()),
        }
    }
}
