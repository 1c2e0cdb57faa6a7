//! Prelude for the filters crate.
//!
//! ```
//! use carport_filters::prelude::*;
//!
//! let result = limit_steer_torque(0.0, 0, 0.0, &TorqueLimits::chrysler());
//! assert_eq!(result.applied, 0);
//! ```

pub use crate::speed::{SPEED_FILTER_DT, SpeedEstimate, SpeedFilterState};
pub use crate::torque_limit::{TorqueLimitResult, TorqueLimits, limit_steer_torque};
