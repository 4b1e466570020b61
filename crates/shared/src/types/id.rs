//! Typed IDs for type-safe record references.
//!
//! Records carry string identifiers so that seeded ids such as `"101"` or
//! `"INV-2023-001"` live alongside generated ones. Wrapping them prevents
//! accidentally passing a `BillId` where an `InvoiceId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of distinct six-digit document sequence values.
const DOCUMENT_SEQUENCE_SPACE: i64 = 1_000_000;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Creates a new time-ordered ID (UUID v7).
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

typed_id!(TransactionId, "Unique identifier for a general ledger transaction.");
typed_id!(InvoiceId, "Unique identifier for an invoice (accounts receivable).");
typed_id!(BillId, "Unique identifier for a bill (accounts payable).");
typed_id!(AssetId, "Unique identifier for an asset.");
typed_id!(LiabilityId, "Unique identifier for a liability.");
typed_id!(EmployeeId, "Unique identifier for an employee.");
typed_id!(CandidateId, "Unique identifier for a hiring candidate.");
typed_id!(ProformaId, "Unique identifier for a job proforma.");

/// Builds a `{prefix}-NNNNNN` document number.
///
/// The six digits are the last six digits of `millis`; the sequence is
/// advanced (wrapping) until `is_taken` reports a free number. Falls back to a
/// UUID suffix only if every six-digit number is taken.
pub fn document_number(prefix: &str, millis: i64, is_taken: impl Fn(&str) -> bool) -> String {
    let start = millis.rem_euclid(DOCUMENT_SEQUENCE_SPACE);
    (0..DOCUMENT_SEQUENCE_SPACE)
        .map(|offset| format!("{prefix}-{:06}", (start + offset) % DOCUMENT_SEQUENCE_SPACE))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| format!("{prefix}-{}", Uuid::now_v7().simple()))
}

impl InvoiceId {
    /// Creates an `INV-NNNNNN` number not present in `existing`.
    #[must_use]
    pub fn next_document<'a>(
        millis: i64,
        existing: impl Iterator<Item = &'a Self> + Clone,
    ) -> Self {
        Self(document_number("INV", millis, |candidate| {
            existing.clone().any(|id| id.as_str() == candidate)
        }))
    }
}

impl BillId {
    /// Creates a `BILL-NNNNNN` number not present in `existing`.
    #[must_use]
    pub fn next_document<'a>(
        millis: i64,
        existing: impl Iterator<Item = &'a Self> + Clone,
    ) -> Self {
        Self(document_number("BILL", millis, |candidate| {
            existing.clone().any(|id| id.as_str() == candidate)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = TransactionId::generate();
        let b = TransactionId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_display_and_conversions() {
        let id = InvoiceId::from("INV-2023-001");
        assert_eq!(id.to_string(), "INV-2023-001");
        assert_eq!(id.as_str(), "INV-2023-001");
        assert_eq!(InvoiceId::new(String::from("x")).into_inner(), "x");
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = EmployeeId::from("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
        let back: EmployeeId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_document_number_uses_last_six_digits() {
        let number = document_number("INV", 1_699_999_123_456, |_| false);
        assert_eq!(number, "INV-123456");
    }

    #[test]
    fn test_document_number_pads_short_sequences() {
        assert_eq!(document_number("BILL", 42, |_| false), "BILL-000042");
    }

    #[test]
    fn test_document_number_skips_taken_numbers() {
        let existing = [InvoiceId::from("INV-123456"), InvoiceId::from("INV-123457")];
        let next = InvoiceId::next_document(1_700_000_123_456, existing.iter());
        assert_eq!(next.as_str(), "INV-123458");
    }

    #[test]
    fn test_document_number_wraps_around() {
        let existing = [BillId::from("BILL-999999")];
        let next = BillId::next_document(999_999, existing.iter());
        assert_eq!(next.as_str(), "BILL-000000");
    }
}
