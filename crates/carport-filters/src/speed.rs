//! Vehicle Speed Filter
//!
//! Steady-state Kalman filter over a constant-acceleration model. Smooths the
//! raw wheel-derived speed and estimates longitudinal acceleration from it.

/// Control period the gains were computed for, seconds.
pub const SPEED_FILTER_DT: f32 = 0.01;

/// Steady-state Kalman gain for `[speed, acceleration]`.
pub const SPEED_FILTER_GAIN: [f32; 2] = [0.122_876_73, 0.296_663_1];

/// Innovation (m/s) beyond which the filter snaps to the measurement.
pub const SPEED_FILTER_RESET: f32 = 2.0;

/// Filtered speed and acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedEstimate {
    /// m/s
    pub speed: f32,
    /// m/s²
    pub accel: f32,
}

/// State for the speed filter.
///
/// Lives as long as the decoder that owns it; there is no reset besides
/// constructing a new one.
///
/// # RT Safety
///
/// - `#[repr(C)]`, `Copy`
/// - No heap allocations
/// - O(1) time complexity
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedFilterState {
    /// Speed estimate, m/s.
    pub speed: f32,
    /// Acceleration estimate, m/s².
    pub accel: f32,
    dt: f32,
    gain: [f32; 2],
    reset_threshold: f32,
}

impl SpeedFilterState {
    /// Filter tuned for the 100 Hz control loop.
    pub fn new() -> Self {
        Self::with_gain(SPEED_FILTER_DT, SPEED_FILTER_GAIN)
    }

    /// Filter with a custom period and gain.
    pub fn with_gain(dt: f32, gain: [f32; 2]) -> Self {
        Self {
            speed: 0.0,
            accel: 0.0,
            dt,
            gain,
            reset_threshold: SPEED_FILTER_RESET,
        }
    }

    /// Feed one raw measurement and return the new estimate.
    ///
    /// A measurement further than [`SPEED_FILTER_RESET`] from the current
    /// estimate (first sample, wheel slip recovery) re-seeds the filter at
    /// `[raw, 0]`. Non-finite measurements leave the state untouched.
    pub fn update(&mut self, raw: f32) -> SpeedEstimate {
        if !raw.is_finite() {
            return self.estimate();
        }

        if (raw - self.speed).abs() > self.reset_threshold {
            self.speed = raw;
            self.accel = 0.0;
        }

        let [k_speed, k_accel] = self.gain;
        let predicted = self.speed + self.dt * self.accel;
        let innovation = raw - predicted;

        self.speed = predicted + k_speed * innovation;
        self.accel += k_accel * innovation;

        self.estimate()
    }

    /// Current estimate without feeding a sample.
    pub fn estimate(&self) -> SpeedEstimate {
        SpeedEstimate {
            speed: self.speed,
            accel: self.accel,
        }
    }
}

impl Default for SpeedFilterState {
    fn default() -> Self {
        Self::new()
    }
}
