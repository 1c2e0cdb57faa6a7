//! Chrysler/FCA lane-keep port.
//!
//! Covers the Pacifica 2017-2020 (including hybrids), Jeep Grand Cherokee
//! 2017-2019 and Chrysler 300 2018:
//!
//! - **`ids`** / **`signals`**: message identifiers, addresses and signal
//!   names as they appear on the powertrain and camera buses
//! - **`decoder`**: [`CarStateDecoder`] turns a signal frame into a
//!   [`VehicleState`](carport_types::VehicleState) plus counter and fault
//!   bookkeeping
//! - **`encoder`**: [`CommandEncoder`] turns actuator intent into
//!   `LKAS_COMMAND`, `LKAS_HUD` and synthesized `WHEEL_BUTTONS` frames
//! - **`variants`**: per-model parameters and fingerprint resolution
//!
//! ## Protocol Notes
//!
//! The EPS only takes a lane-keep command that tracks the forward camera's
//! own `LKAS_COMMAND` counter, and faults on torque steps larger than it
//! expects. Every command goes through
//! [`limit_steer_torque`](carport_filters::limit_steer_torque) and is
//! stamped with the camera counter observed in the same cycle.
//!
//! There is no set-speed message: the cruise set speed is moved by pressing
//! the steering-wheel speed buttons on the driver's behalf.
//!
//! Bit layouts, scaling and checksums are the transport's business; this
//! crate speaks in named signals only.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(static_mut_refs)]

pub mod decoder;
pub mod encoder;
pub mod ids;
pub mod messages;
pub mod signals;
pub mod types;
pub mod variants;

pub use decoder::{CAMERA_CHECKS, CarStateDecoder, ChryslerCarState, ChryslerFaults, POWERTRAIN_CHECKS};
pub use encoder::{CommandEncoder, EncoderConfig, EncoderInput, EncoderSession};
pub use ids::*;
pub use messages::ChryslerFrame;
pub use types::*;
pub use variants::{ChryslerVariant, Fingerprint};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown message: {0}")]
    UnknownMessage(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
