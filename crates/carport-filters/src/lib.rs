//! Steering torque limiting and speed filtering for carport
//!
//! Both pieces sit on the 100 Hz control path:
//! - **Torque limit**: bounds every steering command against hardware
//!   magnitude, rate and EPS error limits, and backs off under driver override
//! - **Speed**: Kalman smoothing of raw vehicle speed with an acceleration
//!   estimate
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations
//! - O(1) time complexity for all operations
//! - No syscalls or I/O
//!
//! # Example
//!
//! ```
//! use carport_filters::prelude::*;
//!
//! let limits = TorqueLimits::chrysler();
//! let mut speed = SpeedFilterState::new();
//!
//! let estimate = speed.update(20.0);
//! let result = limit_steer_torque(0.5 * limits.max as f32, 0, 0.0, &limits);
//!
//! assert!(estimate.speed > 19.0);
//! assert_eq!(result.applied, 3);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod prelude;
pub mod speed;
pub mod torque_limit;

pub use speed::{SpeedEstimate, SpeedFilterState};
pub use torque_limit::{TorqueLimitResult, TorqueLimits, limit_steer_torque};
