//! Human-resources record keeping.
//!
//! Employee directory, candidate pipeline and job requisitions. Hiring a
//! candidate is the one operation that touches two collections: it appends
//! an employee and moves the candidate to the hired stage.

pub mod directory;
pub mod error;
pub mod hiring;
pub mod proforma;
pub mod types;

pub use directory::DirectoryService;
pub use error::HrError;
pub use hiring::{HireOutcome, HiringService, NewCandidate, company_email};
pub use proforma::{NewProforma, PLACEHOLDER_SALARY_RANGE, ProformaService};
pub use types::{
    Candidate, CandidateStage, Employee, EmployeeStatus, JobDescription, JobProforma,
};
