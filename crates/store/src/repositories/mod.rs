//! Repository abstractions over the business store.
//!
//! Repositories provide a clean interface for reading and changing records,
//! hiding the locking discipline from the rest of the application. Mutating
//! methods stamp operations with the current time and log every change.

pub mod accounting;
pub mod hr;
pub mod report;

pub use accounting::AccountingRepository;
pub use hr::HrRepository;
pub use report::ReportRepository;
