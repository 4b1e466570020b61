//! Candidate pipeline and hiring.

use chrono::{DateTime, Utc};
use nexus_shared::types::{CandidateId, EmployeeId};
use serde::{Deserialize, Serialize};

use super::error::HrError;
use super::types::{Candidate, CandidateStage, Employee, EmployeeStatus};
use crate::business::BusinessData;
use crate::validation::required_text;

/// Department assigned to newly hired employees.
pub const DEFAULT_DEPARTMENT: &str = "General";

/// Mail domain for generated employee addresses.
pub const EMAIL_DOMAIN: &str = "company.com";

/// Input for adding a candidate to the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCandidate {
    /// Full name (required).
    #[serde(default)]
    pub name: String,
    /// Role applied for (required).
    #[serde(default)]
    pub applying_for: String,
}

/// Result of hiring a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HireOutcome {
    /// The new employee record.
    pub employee: Employee,
    /// The candidate, now in the hired stage.
    pub candidate: Candidate,
}

/// Service for the hiring pipeline.
pub struct HiringService;

impl HiringService {
    /// Appends a candidate in the applied stage.
    ///
    /// # Errors
    ///
    /// Returns `HrError::MissingField` if name or role is missing.
    pub fn add_candidate(
        data: &mut BusinessData,
        input: NewCandidate,
    ) -> Result<Candidate, HrError> {
        let name = required_text("name", &input.name)?.to_string();
        let applying_for = required_text("applyingFor", &input.applying_for)?.to_string();

        let candidate = Candidate {
            id: CandidateId::generate(),
            name,
            applying_for,
            stage: CandidateStage::Applied,
            resume_summary: None,
            match_score: None,
        };
        data.candidates.push(candidate.clone());
        Ok(candidate)
    }

    /// Hires a candidate: appends an active employee for the role applied for
    /// and moves the candidate to the hired stage.
    ///
    /// # Errors
    ///
    /// Returns `HrError::CandidateNotFound` for an unknown id and
    /// `HrError::CandidateAlreadyHired` if the candidate was hired before.
    pub fn hire(
        data: &mut BusinessData,
        candidate_id: &CandidateId,
        now: DateTime<Utc>,
    ) -> Result<HireOutcome, HrError> {
        let candidate = data
            .candidates
            .iter_mut()
            .find(|c| &c.id == candidate_id)
            .ok_or_else(|| HrError::CandidateNotFound(candidate_id.clone()))?;

        if candidate.stage == CandidateStage::Hired {
            return Err(HrError::CandidateAlreadyHired(candidate_id.clone()));
        }

        candidate.stage = CandidateStage::Hired;
        let candidate = candidate.clone();

        let employee = Employee {
            id: EmployeeId::generate(),
            name: candidate.name.clone(),
            role: candidate.applying_for.clone(),
            department: DEFAULT_DEPARTMENT.to_string(),
            email: company_email(&candidate.name),
            start_date: now.date_naive(),
            credentials: Vec::new(),
            status: EmployeeStatus::Active,
        };
        data.employees.push(employee.clone());

        Ok(HireOutcome {
            employee,
            candidate,
        })
    }

    /// Candidates still in the pipeline (not hired), in insertion order.
    #[must_use]
    pub fn open_pipeline(candidates: &[Candidate]) -> Vec<Candidate> {
        candidates
            .iter()
            .filter(|c| c.stage != CandidateStage::Hired)
            .cloned()
            .collect()
    }
}

/// Builds `first.last@company.com` from a full name.
#[must_use]
pub fn company_email(name: &str) -> String {
    let local = name
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{local}@{EMAIL_DOMAIN}")
}
