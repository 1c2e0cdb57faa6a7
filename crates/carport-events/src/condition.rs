//! Condition identifiers, codes and engagement effects.

use core::fmt;

use serde::{Deserialize, Serialize};

/// What a condition does to engagement while it is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionAction {
    /// Engage now.
    Enable,
    /// Refuse to engage.
    NoEntry,
    /// Show a warning, keep control.
    Warning,
    /// The driver asked to disengage.
    UserDisable,
    /// Hand control back after an alert period.
    SoftDisable,
    /// Drop control this cycle.
    ImmediateDisable,
}

/// Conditions reported by the car port every cycle.
///
/// Codes and names are part of the wire format consumed by the planner and
/// must never be reused for a different condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Condition {
    /// Vehicle speed is below the minimum lane-keep speed of the variant.
    BelowSteerSpeed,
    SeatbeltNotLatched,
    DoorOpen,
    ParkOrReverseGear,
    /// The EPS refuses lane-keep torque.
    SteerFault,
    ParkAssistFault,
    /// Not in a forward gear (includes an unknown selector position).
    WrongGear,
    ReverseGear,
    EspDisabled,
    GasPressed,
    /// Conventional cruise is selected instead of adaptive.
    WrongCruiseMode,
    CruiseUnavailable,
    /// A required message is missing or stale.
    CanInvalid,
    SpeedTooHigh,
    /// Rising gas edge, or a brake press.
    PedalPressed,
    /// Cruise just engaged.
    PcmEnable,
    /// Cruise is not engaged.
    PcmDisable,
    /// The EPS status counter stopped stepping while the message kept coming.
    EpsCounterStale,
}

impl Condition {
    /// Every condition, in code order.
    pub const ALL: [Self; 18] = [
        Self::BelowSteerSpeed,
        Self::SeatbeltNotLatched,
        Self::DoorOpen,
        Self::ParkOrReverseGear,
        Self::SteerFault,
        Self::ParkAssistFault,
        Self::WrongGear,
        Self::ReverseGear,
        Self::EspDisabled,
        Self::GasPressed,
        Self::WrongCruiseMode,
        Self::CruiseUnavailable,
        Self::CanInvalid,
        Self::SpeedTooHigh,
        Self::PedalPressed,
        Self::PcmEnable,
        Self::PcmDisable,
        Self::EpsCounterStale,
    ];

    /// Stable numeric code.
    pub fn code(&self) -> u16 {
        match self {
            Self::BelowSteerSpeed => 1,
            Self::SeatbeltNotLatched => 2,
            Self::DoorOpen => 3,
            Self::ParkOrReverseGear => 4,
            Self::SteerFault => 5,
            Self::ParkAssistFault => 6,
            Self::WrongGear => 7,
            Self::ReverseGear => 8,
            Self::EspDisabled => 9,
            Self::GasPressed => 10,
            Self::WrongCruiseMode => 11,
            Self::CruiseUnavailable => 12,
            Self::CanInvalid => 13,
            Self::SpeedTooHigh => 14,
            Self::PedalPressed => 15,
            Self::PcmEnable => 16,
            Self::PcmDisable => 17,
            Self::EpsCounterStale => 18,
        }
    }

    /// Stable name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BelowSteerSpeed => "belowSteerSpeed",
            Self::SeatbeltNotLatched => "seatbeltNotLatched",
            Self::DoorOpen => "doorOpen",
            Self::ParkOrReverseGear => "parkOrReverseGear",
            Self::SteerFault => "steerFault",
            Self::ParkAssistFault => "parkAssistFault",
            Self::WrongGear => "wrongGear",
            Self::ReverseGear => "reverseGear",
            Self::EspDisabled => "espDisabled",
            Self::GasPressed => "gasPressed",
            Self::WrongCruiseMode => "wrongCruiseMode",
            Self::CruiseUnavailable => "cruiseUnavailable",
            Self::CanInvalid => "canInvalid",
            Self::SpeedTooHigh => "speedTooHigh",
            Self::PedalPressed => "pedalPressed",
            Self::PcmEnable => "pcmEnable",
            Self::PcmDisable => "pcmDisable",
            Self::EpsCounterStale => "epsCounterStale",
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|condition| condition.code() == code)
    }

    /// Engagement effects of this condition.
    pub fn actions(&self) -> &'static [ConditionAction] {
        use ConditionAction::*;

        match self {
            Self::BelowSteerSpeed => &[Warning],
            Self::SeatbeltNotLatched
            | Self::DoorOpen
            | Self::ParkOrReverseGear
            | Self::WrongGear
            | Self::EspDisabled
            | Self::SpeedTooHigh => &[NoEntry, SoftDisable],
            Self::SteerFault
            | Self::ParkAssistFault
            | Self::ReverseGear
            | Self::CruiseUnavailable
            | Self::CanInvalid
            | Self::EpsCounterStale => &[NoEntry, ImmediateDisable],
            Self::WrongCruiseMode | Self::PedalPressed => &[NoEntry, UserDisable],
            Self::GasPressed => &[NoEntry],
            Self::PcmEnable => &[Enable],
            Self::PcmDisable => &[UserDisable],
        }
    }

    pub fn has_action(&self, action: ConditionAction) -> bool {
        self.actions().contains(&action)
    }

    /// Returns true if this condition keeps the system from engaging.
    pub fn blocks_engagement(&self) -> bool {
        self.has_action(ConditionAction::NoEntry)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::BelowSteerSpeed => write!(f, "Steering unavailable below minimum speed"),
            Condition::SeatbeltNotLatched => write!(f, "Driver seatbelt unlatched"),
            Condition::DoorOpen => write!(f, "Door open"),
            Condition::ParkOrReverseGear => write!(f, "Vehicle in park or reverse"),
            Condition::SteerFault => write!(f, "Steering temporarily unavailable"),
            Condition::ParkAssistFault => write!(f, "Park assist fault"),
            Condition::WrongGear => write!(f, "Gear not in drive"),
            Condition::ReverseGear => write!(f, "Vehicle in reverse"),
            Condition::EspDisabled => write!(f, "Stability control off"),
            Condition::GasPressed => write!(f, "Gas pedal pressed"),
            Condition::WrongCruiseMode => write!(f, "Adaptive cruise not selected"),
            Condition::CruiseUnavailable => write!(f, "Cruise main switch off"),
            Condition::CanInvalid => write!(f, "CAN messages missing or stale"),
            Condition::SpeedTooHigh => write!(f, "Speed too high"),
            Condition::PedalPressed => write!(f, "Pedal pressed"),
            Condition::PcmEnable => write!(f, "Cruise engaged"),
            Condition::PcmDisable => write!(f, "Cruise disengaged"),
            Condition::EpsCounterStale => write!(f, "Steering feedback counter stale"),
        }
    }
}
