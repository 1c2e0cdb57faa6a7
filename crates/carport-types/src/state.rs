//! Normalized vehicle state published once per decode cycle

use serde::{Deserialize, Serialize};

/// Gear selector position.
///
/// Raw selector values that a vehicle table does not know decode to
/// [`GearShifter::Unknown`]; they are never folded into park or drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GearShifter {
    Park,
    Reverse,
    Neutral,
    Drive,
    Low,
    #[default]
    Unknown,
}

impl GearShifter {
    /// Gears in which lateral control may engage.
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Drive | Self::Low)
    }

    pub fn is_park_or_reverse(&self) -> bool {
        matches!(self, Self::Park | Self::Reverse)
    }

    /// Gears in which the dash draws the lane-keep icon.
    pub fn shows_lane_icon(&self) -> bool {
        matches!(self, Self::Drive | Self::Reverse | Self::Low)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelSpeeds {
    pub fl: f32,
    pub fr: f32,
    pub rl: f32,
    pub rr: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CruiseState {
    /// Cruise is engaged (green).
    pub enabled: bool,
    /// Cruise main switch is on.
    pub available: bool,
    /// Driver set speed in m/s.
    pub speed: f32,
    /// Conventional (non-adaptive) cruise is selected.
    pub non_adaptive: bool,
    /// ACC is holding the vehicle at a stop.
    pub standstill_hold: bool,
}

/// The authoritative per-cycle view of the vehicle.
///
/// Produced by a decoder, then handed out by shared reference or clone; it is
/// never modified after publication.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleState {
    /// Every required message was fresh this cycle.
    pub can_valid: bool,

    // motion
    pub v_ego_raw: f32,
    pub v_ego: f32,
    pub a_ego: f32,
    pub wheel_speeds: WheelSpeeds,
    pub standstill: bool,

    // steering
    pub steering_angle_deg: f32,
    pub steering_rate_deg: f32,
    /// Driver input torque reported by the EPS.
    pub steering_torque: f32,
    /// Motor torque reported by the EPS.
    pub steering_torque_eps: f32,
    pub steering_pressed: bool,
    pub steer_fault: bool,
    /// The last command was altered by the torque limiter.
    pub steering_rate_limited: bool,

    // pedals
    pub brake_pressed: bool,
    pub brake: f32,
    pub brake_lights: bool,
    pub gas_pressed: bool,
    pub gas: f32,

    // body
    pub door_open: bool,
    pub seatbelt_unlatched: bool,
    pub left_blinker: bool,
    pub right_blinker: bool,
    pub gear_shifter: GearShifter,
    pub generic_toggle: bool,
    pub left_blindspot: bool,
    pub right_blindspot: bool,
    pub esp_disabled: bool,
    pub park_assist_fault: bool,

    pub cruise_state: CruiseState,
}

impl VehicleState {
    pub fn any_blinker(&self) -> bool {
        self.left_blinker || self.right_blinker
    }
}
