//! Bookkeeping error types.

use nexus_shared::AppError;
use nexus_shared::types::{BillId, InvoiceId};
use thiserror::Error;

use crate::validation::MissingField;

/// Errors that can occur during bookkeeping operations.
#[derive(Debug, Error)]
pub enum AccountingError {
    /// A required input field was missing.
    #[error(transparent)]
    MissingField(#[from] MissingField),

    /// Invoice not found.
    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    /// Bill not found.
    #[error("Bill not found: {0}")]
    BillNotFound(BillId),

    /// An account with this code already exists.
    #[error("Account code {0} already exists")]
    DuplicateAccountCode(String),

    /// A money total fell outside the representable range.
    #[error("Amount is too large to represent")]
    AmountOverflow,
}

impl AccountingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvoiceNotFound(_) => "INVOICE_NOT_FOUND",
            Self::BillNotFound(_) => "BILL_NOT_FOUND",
            Self::DuplicateAccountCode(_) => "DUPLICATE_ACCOUNT_CODE",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MissingField(_) => 400,
            Self::InvoiceNotFound(_) | Self::BillNotFound(_) => 404,
            Self::DuplicateAccountCode(_) => 409,
            Self::AmountOverflow => 422,
        }
    }
}

impl From<AccountingError> for AppError {
    fn from(err: AccountingError) -> Self {
        match err {
            AccountingError::MissingField(_) => Self::Validation(err.to_string()),
            AccountingError::InvoiceNotFound(_) | AccountingError::BillNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            AccountingError::DuplicateAccountCode(_) => Self::Conflict(err.to_string()),
            AccountingError::AmountOverflow => Self::BusinessRule(err.to_string()),
        }
    }
}
