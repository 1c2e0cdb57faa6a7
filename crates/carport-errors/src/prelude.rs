//! Prelude module for convenient error handling imports.
//!
//! ```
//! use carport_errors::prelude::*;
//!
//! fn resolve(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(ValidationError::required("variant").into());
//!     }
//!     Err(ConfigError::unsupported(name).into())
//! }
//!
//! assert!(resolve("DELOREAN").is_err());
//! ```

pub use crate::{
    Result,
    common::{CarportError, ErrorCategory, ErrorSeverity},
    config::ConfigError,
    validation::ValidationError,
};
