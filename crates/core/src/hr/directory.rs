//! Employee directory.

use nexus_shared::types::EmployeeId;

use super::error::HrError;
use super::types::{Employee, EmployeeStatus};
use crate::business::BusinessData;
use crate::validation::required_text;

/// Service for employee directory operations.
pub struct DirectoryService;

impl DirectoryService {
    /// Appends a credential to an employee's record.
    ///
    /// # Errors
    ///
    /// Returns `HrError::MissingField` for blank text and
    /// `HrError::EmployeeNotFound` for an unknown employee.
    pub fn add_credential(
        data: &mut BusinessData,
        employee_id: &EmployeeId,
        credential: &str,
    ) -> Result<Employee, HrError> {
        let credential = required_text("credential", credential)?;

        let employee = data
            .employees
            .iter_mut()
            .find(|e| &e.id == employee_id)
            .ok_or_else(|| HrError::EmployeeNotFound(employee_id.clone()))?;

        employee.credentials.push(credential.to_string());
        Ok(employee.clone())
    }

    /// Counts employees whose status is active.
    #[must_use]
    pub fn active_headcount(employees: &[Employee]) -> usize {
        employees
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count()
    }
}
