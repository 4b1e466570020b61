//! Presence checks for operation inputs.
//!
//! Presence is the only validation the bookkeeping and HR operations apply:
//! a text field is missing when it is empty or whitespace-only, any other
//! field when it was not supplied.

use thiserror::Error;

/// A required field was not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is required")]
pub struct MissingField(pub &'static str);

/// Returns the trimmed text, or `MissingField` if it is blank.
pub fn required_text<'a>(field: &'static str, value: &'a str) -> Result<&'a str, MissingField> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(MissingField(field))
    } else {
        Ok(trimmed)
    }
}

/// Returns the value, or `MissingField` if it is absent.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, MissingField> {
    value.ok_or(MissingField(field))
}
