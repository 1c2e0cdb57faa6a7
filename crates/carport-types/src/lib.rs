//! Vehicle-agnostic types shared by decoders, encoders and the planner boundary
//!
//! Every vehicle family decodes into the same [`VehicleState`] and accepts the
//! same [`CarControl`]. Per-model constants live in [`VariantParams`], which a
//! vehicle crate fills from its own tables.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod control;
pub mod params;
pub mod state;
pub mod units;

pub use control::*;
pub use params::*;
pub use state::*;
