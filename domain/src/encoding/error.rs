//! Encoder error types

use thiserror::Error;

/// Errors raised while turning form input into a feature vector
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("Unknown category '{value}' for field '{field}' (expected one of: {})", allowed.join(", "))]
    UnknownCategory {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Value {value} for field '{field}' is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Field '{field}' expects a {expected} value, got '{got}'")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        got: String,
    },

    #[error("Column '{column}' derived from field '{field}' is not known to the model")]
    SchemaDrift { field: String, column: String },
}

impl EncodeError {
    /// Name of the field the error is about, if any
    pub fn field(&self) -> &str {
        match self {
            EncodeError::UnknownCategory { field, .. }
            | EncodeError::OutOfRange { field, .. }
            | EncodeError::TypeMismatch { field, .. }
            | EncodeError::SchemaDrift { field, .. } => field,
            EncodeError::UnknownField(field) => field,
        }
    }
}
