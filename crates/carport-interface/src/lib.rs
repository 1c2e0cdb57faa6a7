//! Car interface for carport.
//!
//! Ties one vehicle family's decoder and encoder to the shared condition
//! aggregator and holds everything that lives for a drive session:
//!
//! - **`config`**: [`InterfaceConfig`] and [`DriverPreferences`], loaded once
//!   from YAML or JSON and validated before the session starts
//! - **`port`**: the [`CarPort`] trait the control loop drives
//! - **`chrysler`**: [`ChryslerInterface`], the Chrysler/FCA implementation
//!
//! # Example
//!
//! ```rust
//! use carport_interface::{ChryslerInterface, InterfaceConfig};
//! use can_chrysler_protocol::ChryslerVariant;
//!
//! let config = InterfaceConfig::from_yaml_str("pause_frames: 50\n")?;
//! let interface = ChryslerInterface::new(config, ChryslerVariant::Pacifica2018)?;
//! assert_eq!(interface.variant(), ChryslerVariant::Pacifica2018);
//! # Ok::<(), carport_errors::CarportError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod chrysler;
pub mod config;
pub mod port;

pub use chrysler::ChryslerInterface;
pub use config::{DriverPreferences, InterfaceConfig};
pub use port::{CarOutput, CarPort};
