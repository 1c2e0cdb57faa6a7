//! Chrysler enum tables and protocol constants

use carport_types::GearShifter;
use serde::{Deserialize, Serialize};

use crate::signals::wheel_buttons;

/// Driver torque (raw units) above which the driver is steering.
pub const STEER_THRESHOLD: f32 = 120.0;

/// `LKAS_STEER_FAULT` value reported while the EPS refuses lane-keep torque.
pub const LKAS_STEER_FAULT_ACTIVE: u32 = 4;

/// `APA_STEER_FAULT` value reported on a park-assist fault.
pub const APA_STEER_FAULT_ACTIVE: u32 = 1;

/// HUD frames go out every this many accepted cycles (4 Hz at 100 Hz).
pub const HUD_PERIOD_FRAMES: u32 = 25;

/// Number of HUD frames that carry the start-up alert.
pub const HUD_STARTUP_FRAMES: u32 = 4;

/// Synthesized speed buttons are only pressed while `cc_frame % 10` is at or
/// below this value: a 40 ms pulse every 100 ms.
pub const BUTTON_DUTY_WINDOW: u32 = 3;

pub const BUTTON_DUTY_PERIOD: u32 = 10;

/// Map a raw `PRNDL` value to a gear.
///
/// ```
/// use can_chrysler_protocol::gear_from_raw;
/// use carport_types::GearShifter;
///
/// assert_eq!(gear_from_raw(4), GearShifter::Drive);
/// assert_eq!(gear_from_raw(9), GearShifter::Unknown);
/// ```
pub fn gear_from_raw(raw: u32) -> GearShifter {
    match raw {
        1 => GearShifter::Park,
        2 => GearShifter::Reverse,
        3 => GearShifter::Neutral,
        4 => GearShifter::Drive,
        5 => GearShifter::Low,
        _ => GearShifter::Unknown,
    }
}

/// Steering-wheel cruise buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CruiseButton {
    Cancel,
    Resume,
    SpeedInc,
    SpeedDec,
    FollowInc,
    FollowDec,
}

impl CruiseButton {
    pub const ALL: [CruiseButton; 6] = [
        Self::Cancel,
        Self::Resume,
        Self::SpeedInc,
        Self::SpeedDec,
        Self::FollowInc,
        Self::FollowDec,
    ];

    /// `WHEEL_BUTTONS` signal carrying this button.
    pub fn signal(&self) -> &'static str {
        match self {
            Self::Cancel => wheel_buttons::ACC_CANCEL,
            Self::Resume => wheel_buttons::ACC_RESUME,
            Self::SpeedInc => wheel_buttons::ACC_SPEED_INC,
            Self::SpeedDec => wheel_buttons::ACC_SPEED_DEC,
            Self::FollowInc => wheel_buttons::ACC_FOLLOW_INC,
            Self::FollowDec => wheel_buttons::ACC_FOLLOW_DEC,
        }
    }
}

/// Lane-keep icon colour on the dash.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LkasIconColor {
    Off = 0,
    White = 1,
    Green = 2,
}

/// Raw `LKAS_ALERTS` values.
pub mod lkas_alert {
    pub const NONE: u8 = 0;
    pub const STARTUP: u8 = 1;
    pub const STEER_REQUIRED: u8 = 3;
}
