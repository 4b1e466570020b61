//! HR domain types.

use chrono::NaiveDate;
use nexus_shared::types::{CandidateId, EmployeeId, ProformaId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    /// Currently working.
    #[default]
    Active,
    /// Temporarily away.
    #[serde(rename = "On Leave")]
    OnLeave,
    /// No longer employed.
    Terminated,
}

/// An employee directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Full name.
    pub name: String,
    /// Job title.
    pub role: String,
    /// Department.
    pub department: String,
    /// Work email.
    pub email: String,
    /// First day of employment.
    pub start_date: NaiveDate,
    /// Certifications and degrees, in the order they were added.
    pub credentials: Vec<String>,
    /// Employment status.
    pub status: EmployeeStatus,
}

/// Hiring pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStage {
    /// Application received.
    #[default]
    Applied,
    /// Interviewing.
    Interview,
    /// Offer extended.
    Offer,
    /// Hired; an employee record exists.
    Hired,
    /// Not moving forward.
    Rejected,
}

/// A hiring candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Unique identifier.
    pub id: CandidateId,
    /// Full name.
    pub name: String,
    /// Title of the role applied for.
    pub applying_for: String,
    /// Pipeline stage.
    pub stage: CandidateStage,
    /// Optional resume summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_summary: Option<String>,
    /// Optional fit score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<Decimal>,
}

/// A job requisition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProforma {
    /// Unique identifier.
    pub id: ProformaId,
    /// Role title.
    pub title: String,
    /// Role description.
    pub description: String,
    /// Key requirements.
    pub requirements: Vec<String>,
    /// Hiring department.
    pub department: String,
    /// Salary band, free text.
    pub salary_range: String,
}

/// Description and requirements drafted for a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    /// Role description.
    #[serde(default)]
    pub description: String,
    /// Key requirements.
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"On Leave\""
        );
        let stage: CandidateStage = serde_json::from_str("\"Offer\"").unwrap();
        assert_eq!(stage, CandidateStage::Offer);

        let description: JobDescription =
            serde_json::from_str(r#"{"description":"Build things"}"#).unwrap();
        assert!(description.requirements.is_empty());
    }
}
