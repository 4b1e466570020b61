//! Generative-AI collaborator.
//!
//! This crate provides:
//! - [`InsightProvider`], the seam the API talks to
//! - [`GeminiClient`], a Gemini `generateContent` implementation
//! - [`DisabledInsights`], used when no API key is configured
//!
//! Providers never fail towards the caller. Every failure is logged and
//! replaced with one of the fallback texts below.

pub mod error;
pub mod gemini;

pub use error::InsightError;
pub use gemini::GeminiClient;

use async_trait::async_trait;
use nexus_core::hr::JobDescription;
use nexus_core::insight::FinancialSummary;

/// Insight returned when no API key is configured.
pub const NO_API_KEY_INSIGHT: &str = "API Key not configured.";

/// Job description text returned when no API key is configured.
pub const NO_API_KEY_DESCRIPTION: &str = "API Key missing";

/// Insight returned when the model call fails.
pub const FAILED_INSIGHT: &str = "Failed to generate financial insights.";

/// Job description text returned when the model call fails.
pub const FAILED_DESCRIPTION: &str = "Error generating description.";

/// Insight returned when the model answers with no text.
pub const EMPTY_INSIGHT: &str = "No insights generated.";

/// Source of generated financial commentary and job descriptions.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    /// Writes a short analysis of the financial summary.
    async fn financial_insight(&self, summary: &FinancialSummary) -> String;

    /// Drafts a description and key requirements for a role.
    async fn job_description(&self, title: &str, department: &str) -> JobDescription;
}

/// Provider used when generation is not configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledInsights;

#[async_trait]
impl InsightProvider for DisabledInsights {
    async fn financial_insight(&self, _summary: &FinancialSummary) -> String {
        NO_API_KEY_INSIGHT.to_string()
    }

    async fn job_description(&self, _title: &str, _department: &str) -> JobDescription {
        JobDescription {
            description: NO_API_KEY_DESCRIPTION.to_string(),
            requirements: Vec::new(),
        }
    }
}
