//! Job requisitions (proformas).

use nexus_shared::types::ProformaId;
use serde::Deserialize;

use super::error::HrError;
use super::types::{JobDescription, JobProforma};
use crate::business::BusinessData;
use crate::validation::{MissingField, required_text};

/// Salary band given to generated proformas until someone sets a real one.
pub const PLACEHOLDER_SALARY_RANGE: &str = "$50,000 - $80,000";

/// Input for requesting a new proforma.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProforma {
    /// Role title (required).
    #[serde(default)]
    pub title: String,
    /// Hiring department (required).
    #[serde(default)]
    pub department: String,
}

impl NewProforma {
    /// Returns the trimmed title and department.
    ///
    /// Checked before the description is drafted so that no drafting call is
    /// made for an incomplete request.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if either is blank.
    pub fn validated(&self) -> Result<(&str, &str), MissingField> {
        Ok((
            required_text("title", &self.title)?,
            required_text("department", &self.department)?,
        ))
    }
}

/// Service for job proformas.
pub struct ProformaService;

impl ProformaService {
    /// Appends a proforma built from a drafted job description.
    ///
    /// # Errors
    ///
    /// Returns `HrError::MissingField` if title or department is missing.
    pub fn create(
        data: &mut BusinessData,
        input: &NewProforma,
        drafted: JobDescription,
    ) -> Result<JobProforma, HrError> {
        let (title, department) = input.validated()?;

        let proforma = JobProforma {
            id: ProformaId::generate(),
            title: title.to_string(),
            description: drafted.description,
            requirements: drafted.requirements,
            department: department.to_string(),
            salary_range: PLACEHOLDER_SALARY_RANGE.to_string(),
        };
        data.job_proformas.push(proforma.clone());
        Ok(proforma)
    }
}
