//! Google Gemini client (`generateContent` API).

use std::time::Duration;

use async_trait::async_trait;
use nexus_core::hr::JobDescription;
use nexus_core::insight::{
    FinancialSummary, SYSTEM_INSTRUCTION, financial_prompt, job_description_prompt,
    job_description_schema,
};
use nexus_shared::InsightConfig;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::error::InsightError;
use crate::{
    EMPTY_INSIGHT, FAILED_DESCRIPTION, FAILED_INSIGHT, InsightProvider, NO_API_KEY_DESCRIPTION,
    NO_API_KEY_INSIGHT,
};

/// Longest error body kept in `InsightError::Api`.
const MAX_ERROR_BODY: usize = 512;

/// Gemini-backed insight provider.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl GeminiClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `InsightError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &InsightConfig) -> Result<Self, InsightError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key().map(str::to_string),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// True when an API key is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, body: &Value) -> Result<String, InsightError> {
        let api_key = self.api_key.as_deref().ok_or(InsightError::MissingApiKey)?;

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(InsightError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(InsightError::EmptyResponse);
        }
        debug!(model = %self.model, chars = text.len(), "Gemini response received");
        Ok(text)
    }

    /// Asks the model to analyse a financial summary.
    ///
    /// # Errors
    ///
    /// Returns `InsightError` on a missing key, transport failure, error
    /// status, or empty answer.
    pub async fn try_financial_insight(
        &self,
        summary: &FinancialSummary,
    ) -> Result<String, InsightError> {
        let prompt = financial_prompt(summary)?;
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "generationConfig": { "thinkingConfig": { "thinkingBudget": 0 } }
        });
        self.generate(&body).await
    }

    /// Asks the model to draft a job description as structured JSON.
    ///
    /// # Errors
    ///
    /// Returns `InsightError` on a missing key, transport failure, error
    /// status, empty answer, or an answer that is not the expected JSON.
    pub async fn try_job_description(
        &self,
        title: &str,
        department: &str,
    ) -> Result<JobDescription, InsightError> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": job_description_prompt(title, department) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": job_description_schema()
            }
        });
        let text = self.generate(&body).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl InsightProvider for GeminiClient {
    async fn financial_insight(&self, summary: &FinancialSummary) -> String {
        match self.try_financial_insight(summary).await {
            Ok(text) => text,
            Err(InsightError::MissingApiKey) => NO_API_KEY_INSIGHT.to_string(),
            Err(InsightError::EmptyResponse) => EMPTY_INSIGHT.to_string(),
            Err(e) => {
                error!(error = %e, "Gemini financial insight failed");
                FAILED_INSIGHT.to_string()
            }
        }
    }

    async fn job_description(&self, title: &str, department: &str) -> JobDescription {
        match self.try_job_description(title, department).await {
            Ok(drafted) => drafted,
            Err(InsightError::MissingApiKey) => JobDescription {
                description: NO_API_KEY_DESCRIPTION.to_string(),
                requirements: Vec::new(),
            },
            Err(e) => {
                error!(error = %e, title = %title, "Gemini job description failed");
                JobDescription {
                    description: FAILED_DESCRIPTION.to_string(),
                    requirements: Vec::new(),
                }
            }
        }
    }
}
