//! Error types for carportctl

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid record at {source_name}:{line}: {reason}")]
    InvalidRecord {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("Unknown variant: {name}")]
    UnknownVariant {
        name: String,
        #[source]
        source: carport_errors::ConfigError,
    },

    #[error("No variant configured and no fingerprint given")]
    NoVariant,

    #[error(transparent)]
    Carport(#[from] carport_errors::CarportError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    pub fn invalid_record(source_name: impl Into<String>, line: usize, reason: impl ToString) -> Self {
        CliError::InvalidRecord {
            source_name: source_name.into(),
            line,
            reason: reason.to_string(),
        }
    }
}
