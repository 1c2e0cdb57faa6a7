//! Immutable per-model parameter record

use carport_filters::TorqueLimits;
use serde::Serialize;

/// Lateral controller gains handed to the planner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LateralTuning {
    Pid {
        /// Speed breakpoints for `kp_v`, m/s.
        kp_bp: Vec<f32>,
        kp_v: Vec<f32>,
        /// Speed breakpoints for `ki_v`, m/s.
        ki_bp: Vec<f32>,
        ki_v: Vec<f32>,
        kf: f32,
    },
    Indi {
        inner_loop_gain: f32,
        outer_loop_gain_bp: Vec<f32>,
        outer_loop_gain_v: Vec<f32>,
        time_constant: f32,
        actuator_effectiveness: f32,
    },
}

/// Constants for one vehicle model.
///
/// Selected once at startup and shared read-only by the decoder, the encoder
/// and the condition aggregator. Behaviour that differs between models is a
/// field here, never a branch on the model name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantParams {
    pub name: &'static str,
    /// Metres.
    pub wheelbase: f32,
    pub steer_ratio: f32,
    /// Curb weight plus one occupant, kg.
    pub mass: f32,
    /// Distance from the centre of gravity to the front axle, metres.
    pub center_to_front: f32,
    /// Below this speed (m/s) the EPS refuses lane-keep torque.
    pub min_steer_speed: f32,
    /// Speed (m/s) under which the latched-fast flag is released. `None` keeps
    /// the latch for the whole drive.
    pub latch_release_speed: Option<f32>,
    pub steer_limits: TorqueLimits,
    /// Seconds.
    pub steer_actuator_delay: f32,
    pub steer_rate_cost: f32,
    /// Seconds.
    pub steer_limit_timer: f32,
    pub lateral_tuning: LateralTuning,
}

impl VariantParams {
    /// Speed at which the latched-fast flag gets set.
    pub fn latch_speed(&self) -> f32 {
        self.min_steer_speed - 0.5
    }

    pub fn has_latch_release(&self) -> bool {
        self.latch_release_speed.is_some()
    }
}
