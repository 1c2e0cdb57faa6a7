//! Engagement conditions for carport.
//!
//! Turns the normalized [`VehicleState`](carport_types::VehicleState) into the
//! set of conditions the planner uses to decide whether lateral control may
//! engage or must hand back:
//!
//! - **`Condition`**: closed set of conditions with stable codes and names
//! - **`ConditionSet`**: allocation-free set of conditions for one cycle
//! - **`derive`**: level conditions of a single snapshot
//! - **`derive_transitions`**: edge conditions between two snapshots
//!
//! # Example
//!
//! ```rust
//! use carport_events::{Condition, derive_transitions};
//! use carport_types::VehicleState;
//!
//! let prev = VehicleState::default();
//! let current = VehicleState::default();
//! let set = derive_transitions(&prev, &current);
//! assert!(set.contains(Condition::PcmDisable));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_debug_implementations, rust_2018_idioms)]

pub mod condition;
pub mod derive;
pub mod prelude;
pub mod set;

pub use condition::{Condition, ConditionAction};
pub use derive::{GAS_RESUME_SPEED, MAX_CTRL_SPEED, derive, derive_transitions};
pub use set::ConditionSet;
