//! HR repository: directory, pipeline and proformas.

use chrono::Utc;
use nexus_core::hr::{
    Candidate, DirectoryService, Employee, HireOutcome, HiringService, HrError, JobDescription,
    JobProforma, NewCandidate, NewProforma, ProformaService,
};
use nexus_shared::types::{CandidateId, EmployeeId};
use tracing::info;

use crate::BusinessStore;

/// Repository for HR records.
#[derive(Debug, Clone)]
pub struct HrRepository {
    store: BusinessStore,
}

impl HrRepository {
    /// Creates a new HR repository.
    #[must_use]
    pub const fn new(store: BusinessStore) -> Self {
        Self { store }
    }

    /// Lists employees.
    pub async fn list_employees(&self) -> Vec<Employee> {
        self.store.read().await.employees.clone()
    }

    /// Adds a credential to an employee.
    ///
    /// # Errors
    ///
    /// Returns `HrError` for blank text or an unknown employee.
    pub async fn add_credential(
        &self,
        employee_id: &EmployeeId,
        credential: &str,
    ) -> Result<Employee, HrError> {
        let mut data = self.store.write().await;
        let employee = DirectoryService::add_credential(&mut data, employee_id, credential)?;
        info!(employee_id = %employee_id, credential = %credential.trim(), "Credential added");
        Ok(employee)
    }

    /// Lists candidates; `open_only` hides those already hired.
    pub async fn list_candidates(&self, open_only: bool) -> Vec<Candidate> {
        let data = self.store.read().await;
        if open_only {
            HiringService::open_pipeline(&data.candidates)
        } else {
            data.candidates.clone()
        }
    }

    /// Adds a candidate to the pipeline.
    ///
    /// # Errors
    ///
    /// Returns `HrError::MissingField` if a required field is absent.
    pub async fn add_candidate(&self, input: NewCandidate) -> Result<Candidate, HrError> {
        let mut data = self.store.write().await;
        let candidate = HiringService::add_candidate(&mut data, input)?;
        info!(candidate_id = %candidate.id, role = %candidate.applying_for, "Candidate added");
        Ok(candidate)
    }

    /// Hires a candidate.
    ///
    /// # Errors
    ///
    /// Returns `HrError` for an unknown or already hired candidate.
    pub async fn hire(&self, candidate_id: &CandidateId) -> Result<HireOutcome, HrError> {
        let mut data = self.store.write().await;
        let outcome = HiringService::hire(&mut data, candidate_id, Utc::now())?;
        info!(
            candidate_id = %candidate_id,
            employee_id = %outcome.employee.id,
            email = %outcome.employee.email,
            "Candidate hired"
        );
        Ok(outcome)
    }

    /// Lists job proformas.
    pub async fn list_proformas(&self) -> Vec<JobProforma> {
        self.store.read().await.job_proformas.clone()
    }

    /// Appends a proforma built from a drafted description.
    ///
    /// # Errors
    ///
    /// Returns `HrError::MissingField` if title or department is absent.
    pub async fn create_proforma(
        &self,
        input: &NewProforma,
        drafted: JobDescription,
    ) -> Result<JobProforma, HrError> {
        let mut data = self.store.write().await;
        let proforma = ProformaService::create(&mut data, input, drafted)?;
        info!(proforma_id = %proforma.id, title = %proforma.title, "Proforma created");
        Ok(proforma)
    }
}
