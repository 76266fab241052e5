//! Field validation errors.

use std::fmt;
use thiserror::Error;

/// Which contact field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
            Self::Birthday => write!(f, "birthday"),
        }
    }
}

/// A field value was rejected by its validation rule.
///
/// Carries the field, the offending value, and the rule that failed, so
/// callers can build a user-facing message without re-checking the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} '{value}': {reason}")]
pub struct InvalidFieldError {
    pub field: FieldKind,
    pub value: String,
    pub reason: String,
}

impl InvalidFieldError {
    pub fn new(field: FieldKind, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results with InvalidFieldError
pub type FieldResult<T> = Result<T, InvalidFieldError>;
