//! Start-up configuration errors.
//!
//! Everything here is raised before the first control cycle. An interface
//! that fails to resolve its variant is never constructed, so no frame can
//! be emitted for an unknown vehicle.

use crate::common::ErrorSeverity;

/// Fingerprint, variant and configuration-file errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// No variant matches the observed messages
    #[error("No vehicle variant matches the fingerprint ({observed} messages observed)")]
    UnrecognizedFingerprint {
        /// Number of distinct messages in the fingerprint
        observed: usize,
    },

    /// More than one variant still matches the observed messages
    #[error("Fingerprint is ambiguous between: {}", candidates.join(", "))]
    AmbiguousFingerprint {
        /// Names of the remaining candidate variants
        candidates: Vec<String>,
    },

    /// Variant name is not part of the supported set
    #[error("Unsupported vehicle variant: {0}")]
    UnsupportedVariant(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration {source_name}: {reason}")]
    Parse {
        /// File name or other source description
        source_name: String,
        /// Parser message
        reason: String,
    },
}

impl ConfigError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::UnrecognizedFingerprint { .. } => ErrorSeverity::Critical,
            ConfigError::AmbiguousFingerprint { .. } => ErrorSeverity::Critical,
            ConfigError::UnsupportedVariant(_) => ErrorSeverity::Critical,
            ConfigError::Parse { .. } => ErrorSeverity::Error,
        }
    }

    /// Create an unsupported variant error.
    pub fn unsupported(name: impl Into<String>) -> Self {
        ConfigError::UnsupportedVariant(name.into())
    }

    /// Create a parse error.
    pub fn parse(source_name: impl Into<String>, reason: impl ToString) -> Self {
        ConfigError::Parse {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}
