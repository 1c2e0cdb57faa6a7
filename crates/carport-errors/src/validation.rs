//! Configuration value validation errors.

use core::fmt;

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Bounds are inclusive and rendered with `Debug`.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Required field '{0}' is missing")]
    Required(String),

    /// NaN or infinite where a number was expected.
    #[error("Field '{0}' must be a finite number")]
    NotFinite(String),
}

impl ValidationError {
    /// A bad value rejects the configuration, never a running session.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required(field.into())
    }

    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite(field.into())
    }
}
