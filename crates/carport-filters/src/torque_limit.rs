//! Steering Torque Limiter
//!
//! Gates every steering command before it reaches the bus. The EPS faults when
//! it sees torque jumps or a command that strays too far from what its motor is
//! delivering, so the request is bounded in magnitude, kept inside a window
//! around the live motor torque and rate limited against the previous command.
//! When the driver is fighting the request the command backs off instead.

use serde::{Deserialize, Serialize};

/// Hardware torque limits for one EPS, in raw command units.
///
/// # RT Safety
///
/// - `#[repr(C)]`, `Copy`
/// - No heap allocations
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TorqueLimits {
    /// Largest command magnitude the EPS accepts.
    pub max: i32,
    /// Largest per-cycle increase in magnitude.
    pub delta_up: i32,
    /// Largest per-cycle decrease in magnitude.
    pub delta_down: i32,
    /// Allowed distance between the command and the live motor torque.
    pub error_max: i32,
    /// Live torque magnitude above which the driver counts as overriding.
    pub override_threshold: i32,
    /// Per-cycle decrease used while the driver overrides.
    pub delta_down_override: i32,
}

impl TorqueLimits {
    /// Limits accepted by the Chrysler/FCA EPS.
    ///
    /// ```
    /// use carport_filters::TorqueLimits;
    ///
    /// let limits = TorqueLimits::chrysler();
    /// assert_eq!(limits.max, 261);
    /// ```
    pub const fn chrysler() -> Self {
        Self {
            max: 261,
            delta_up: 3,
            delta_down: 3,
            error_max: 80,
            override_threshold: 120,
            delta_down_override: 6,
        }
    }

    /// Largest step the rate clamp allows without driver input.
    pub fn max_step(&self) -> i32 {
        self.delta_up.max(self.delta_down)
    }
}

impl Default for TorqueLimits {
    fn default() -> Self {
        Self::chrysler()
    }
}

/// Output of [`limit_steer_torque`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TorqueLimitResult {
    /// Torque to put on the bus.
    pub applied: i32,
    /// The applied value differs from the rounded request.
    pub rate_limited: bool,
}

/// Limit a requested steering torque.
///
/// `requested` is in raw command units (already scaled by `limits.max`),
/// `previous` is the last applied command and `live_eps` the torque the EPS
/// reports. Steps, in order:
///
/// 1. clamp to `±max`
/// 2. clamp to `live_eps ± error_max` (the window always contains
///    `±error_max`)
/// 3. rate clamp against `previous`: growth by `delta_up`, decay by
///    `delta_down`, or `delta_down_override` when the live torque opposes
///    `previous` beyond `override_threshold`
/// 4. when the live torque opposes the request beyond `override_threshold`,
///    never move toward the request: a `previous` on the request side decays
///    toward zero by `delta_down_override` and stops at zero
/// 5. round and clamp to `±max` again
///
/// A non-finite request is treated as zero.
///
/// # RT Safety
///
/// - Pure, no state
/// - No heap allocations
/// - O(1) time complexity
///
/// # Example
///
/// ```
/// use carport_filters::{TorqueLimits, limit_steer_torque};
///
/// let limits = TorqueLimits::chrysler();
/// let result = limit_steer_torque(130.0, 0, 0.0, &limits);
/// assert_eq!(result.applied, 3);
/// assert!(result.rate_limited);
/// ```
pub fn limit_steer_torque(
    requested: f32,
    previous: i32,
    live_eps: f32,
    limits: &TorqueLimits,
) -> TorqueLimitResult {
    let requested = if requested.is_finite() { requested } else { 0.0 };
    let live = if live_eps.is_finite() { live_eps } else { 0.0 };

    let max = limits.max as f32;
    let error_max = limits.error_max as f32;
    let up = limits.delta_up as f32;
    let threshold = limits.override_threshold as f32;
    let relaxed = limits.delta_down_override as f32;
    let prev = previous as f32;

    // 1. magnitude
    let mut torque = requested.max(-max).min(max);

    // 2. EPS error window
    let upper = (live + error_max).max(error_max).min(max);
    let lower = (live - error_max).min(-error_max).max(-max);
    torque = torque.max(lower).min(upper);

    // 3. rate
    let live_opposes_previous = live * prev < 0.0 && live.abs() > threshold;
    let down = if live_opposes_previous {
        relaxed
    } else {
        limits.delta_down as f32
    };
    torque = if prev > 0.0 {
        torque.max((prev - down).max(-up)).min(prev + up)
    } else {
        torque.max(prev - up).min((prev + down).min(up))
    };

    // 4. driver override
    let driver_opposes_request = live * requested < 0.0 && live.abs() > threshold;
    if driver_opposes_request {
        let sign = requested.signum();
        torque = if prev * sign > 0.0 {
            sign * (prev.abs() - relaxed).max(0.0)
        } else if sign > 0.0 {
            torque.min(prev)
        } else {
            torque.max(prev)
        };
    }

    // 5. hardware units
    let applied = (torque.round() as i32).clamp(-limits.max, limits.max);
    let rounded_request = requested.round() as i32;

    TorqueLimitResult {
        applied,
        rate_limited: applied != rounded_request,
    }
}
