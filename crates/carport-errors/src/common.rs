//! Top-level error type and classification shared by every carport crate.

use core::fmt;

use crate::{ConfigError, ValidationError};

/// Top-level error type wrapping all carport sub-errors.
#[derive(Debug, thiserror::Error)]
pub enum CarportError {
    /// Fingerprint, variant or configuration-file errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration value validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl CarportError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            CarportError::Config(_) => ErrorCategory::Config,
            CarportError::Validation(_) => ErrorCategory::Validation,
            CarportError::Io(_) => ErrorCategory::IO,
            CarportError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CarportError::Config(e) => e.severity(),
            CarportError::Validation(e) => e.severity(),
            CarportError::Io(_) | CarportError::Other(_) => ErrorSeverity::Error,
        }
    }

    /// A session may not start (and must not emit frames) after a fatal error.
    pub fn is_fatal(&self) -> bool {
        self.severity() >= ErrorSeverity::Critical
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        CarportError::Other(msg.into())
    }
}

impl From<std::io::Error> for CarportError {
    fn from(e: std::io::Error) -> Self {
        CarportError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Fingerprint, variant and configuration-file errors
    Config = 0,
    /// Validation errors
    Validation = 1,
    /// I/O errors
    IO = 2,
    /// Other errors
    Other = 255,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Config => "Config",
            ErrorCategory::Validation => "Validation",
            ErrorCategory::IO => "IO",
            ErrorCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How bad an error is. Ordered, so `>=` comparisons work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// The operation failed; a corrected retry may succeed.
    Error = 2,
    /// No session may be started for this vehicle.
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Error => f.write_str("ERROR"),
            ErrorSeverity::Critical => f.write_str("CRITICAL"),
        }
    }
}
