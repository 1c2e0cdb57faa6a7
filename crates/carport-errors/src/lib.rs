//! Centralized error types for the carport vehicle interface
//!
//! The control loop itself never fails: stale input, duplicate frames and
//! fault signals are all expressed as data (validity flags, empty frame
//! lists, condition codes). The errors in this crate cover the places where
//! failing is the right answer, which is session start-up.
//!
//! - [`common`]: Top-level error type, categories and severities
//! - [`config`]: Fingerprint, variant and configuration-file errors
//! - [`validation`]: Configuration value validation errors
//!
//! # Example
//!
//! ```
//! use carport_errors::prelude::*;
//!
//! fn check_tolerance(periods: f32) -> Result<f32> {
//!     if !(1.0..=100.0).contains(&periods) {
//!         return Err(ValidationError::out_of_range("tolerance_periods", periods, 1.0, 100.0).into());
//!     }
//!     Ok(periods)
//! }
//!
//! assert!(check_tolerance(10.0).is_ok());
//! assert!(check_tolerance(0.0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod prelude;
pub mod validation;

pub use common::{CarportError, ErrorCategory, ErrorSeverity};
pub use config::ConfigError;
pub use validation::ValidationError;

/// A specialized `Result` type for carport operations.
pub type Result<T> = std::result::Result<T, CarportError>;
