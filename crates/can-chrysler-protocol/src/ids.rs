//! Message identifiers for the Chrysler/FCA powertrain and camera buses
//!
//! The forward camera's own `LKAS_COMMAND`, `LKAS_HEARTBIT` and `LKAS_HUD`
//! are read from the camera bus; everything else, and every frame this port
//! sends, is on the powertrain bus.

use std::fmt;
use std::str::FromStr;

use carport_can_common::Bus;
use serde::{Deserialize, Serialize};

use crate::{ProtocolError, ProtocolResult};

pub const BRAKE_1_ADDR: u32 = 0x108;
pub const STEERING_ADDR: u32 = 0x122;
pub const ACCEL_GAS_134_ADDR: u32 = 0x134;
pub const BRAKE_2_ADDR: u32 = 0x140;
pub const ACC_2_ADDR: u32 = 0x1F4;
pub const GEAR_ADDR: u32 = 0x1F5;
pub const SPEED_1_ADDR: u32 = 0x202;
pub const WHEEL_SPEEDS_ADDR: u32 = 0x210;
pub const EPS_STATUS_ADDR: u32 = 0x220;
pub const ACCEL_GAS_22F_ADDR: u32 = 0x22F;
pub const WHEEL_BUTTONS_ADDR: u32 = 0x23B;
pub const LKAS_COMMAND_ADDR: u32 = 0x292;
pub const AUTO_PARK_REQUEST_ADDR: u32 = 0x2A0;
pub const LKAS_HUD_ADDR: u32 = 0x2A6;
pub const STEERING_LEVERS_ADDR: u32 = 0x2A8;
pub const HYBRID_ECU_ADDR: u32 = 0x2BD;
pub const BLIND_SPOT_WARNINGS_ADDR: u32 = 0x2D0;
pub const LKAS_HEARTBIT_ADDR: u32 = 0x2D9;
pub const SEATBELT_STATUS_ADDR: u32 = 0x2E0;
pub const DOORS_ADDR: u32 = 0x2E1;
pub const DASHBOARD_ADDR: u32 = 0x2F8;
pub const TRACTION_BUTTON_ADDR: u32 = 0x330;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MessageId {
    #[serde(rename = "BRAKE_1")]
    Brake1,
    #[serde(rename = "BRAKE_2")]
    Brake2,
    #[serde(rename = "EPS_STATUS")]
    EpsStatus,
    #[serde(rename = "SPEED_1")]
    Speed1,
    #[serde(rename = "WHEEL_SPEEDS")]
    WheelSpeeds,
    #[serde(rename = "STEERING")]
    Steering,
    #[serde(rename = "ACC_2")]
    Acc2,
    #[serde(rename = "GEAR")]
    Gear,
    #[serde(rename = "ACCEL_GAS_134")]
    AccelGas134,
    #[serde(rename = "ACCEL_GAS_22F")]
    AccelGas22F,
    #[serde(rename = "DASHBOARD")]
    Dashboard,
    #[serde(rename = "STEERING_LEVERS")]
    SteeringLevers,
    #[serde(rename = "SEATBELT_STATUS")]
    SeatbeltStatus,
    #[serde(rename = "DOORS")]
    Doors,
    #[serde(rename = "TRACTION_BUTTON")]
    TractionButton,
    #[serde(rename = "BLIND_SPOT_WARNINGS")]
    BlindSpotWarnings,
    #[serde(rename = "WHEEL_BUTTONS")]
    WheelButtons,
    #[serde(rename = "AUTO_PARK_REQUEST")]
    AutoParkRequest,
    #[serde(rename = "HYBRID_ECU")]
    HybridEcu,
    #[serde(rename = "LKAS_COMMAND")]
    LkasCommand,
    #[serde(rename = "LKAS_HEARTBIT")]
    LkasHeartbit,
    #[serde(rename = "LKAS_HUD")]
    LkasHud,
}

impl MessageId {
    pub const ALL: [MessageId; 22] = [
        Self::Brake1,
        Self::Brake2,
        Self::EpsStatus,
        Self::Speed1,
        Self::WheelSpeeds,
        Self::Steering,
        Self::Acc2,
        Self::Gear,
        Self::AccelGas134,
        Self::AccelGas22F,
        Self::Dashboard,
        Self::SteeringLevers,
        Self::SeatbeltStatus,
        Self::Doors,
        Self::TractionButton,
        Self::BlindSpotWarnings,
        Self::WheelButtons,
        Self::AutoParkRequest,
        Self::HybridEcu,
        Self::LkasCommand,
        Self::LkasHeartbit,
        Self::LkasHud,
    ];

    pub fn address(&self) -> u32 {
        match self {
            Self::Brake1 => BRAKE_1_ADDR,
            Self::Brake2 => BRAKE_2_ADDR,
            Self::EpsStatus => EPS_STATUS_ADDR,
            Self::Speed1 => SPEED_1_ADDR,
            Self::WheelSpeeds => WHEEL_SPEEDS_ADDR,
            Self::Steering => STEERING_ADDR,
            Self::Acc2 => ACC_2_ADDR,
            Self::Gear => GEAR_ADDR,
            Self::AccelGas134 => ACCEL_GAS_134_ADDR,
            Self::AccelGas22F => ACCEL_GAS_22F_ADDR,
            Self::Dashboard => DASHBOARD_ADDR,
            Self::SteeringLevers => STEERING_LEVERS_ADDR,
            Self::SeatbeltStatus => SEATBELT_STATUS_ADDR,
            Self::Doors => DOORS_ADDR,
            Self::TractionButton => TRACTION_BUTTON_ADDR,
            Self::BlindSpotWarnings => BLIND_SPOT_WARNINGS_ADDR,
            Self::WheelButtons => WHEEL_BUTTONS_ADDR,
            Self::AutoParkRequest => AUTO_PARK_REQUEST_ADDR,
            Self::HybridEcu => HYBRID_ECU_ADDR,
            Self::LkasCommand => LKAS_COMMAND_ADDR,
            Self::LkasHeartbit => LKAS_HEARTBIT_ADDR,
            Self::LkasHud => LKAS_HUD_ADDR,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Brake1 => "BRAKE_1",
            Self::Brake2 => "BRAKE_2",
            Self::EpsStatus => "EPS_STATUS",
            Self::Speed1 => "SPEED_1",
            Self::WheelSpeeds => "WHEEL_SPEEDS",
            Self::Steering => "STEERING",
            Self::Acc2 => "ACC_2",
            Self::Gear => "GEAR",
            Self::AccelGas134 => "ACCEL_GAS_134",
            Self::AccelGas22F => "ACCEL_GAS_22F",
            Self::Dashboard => "DASHBOARD",
            Self::SteeringLevers => "STEERING_LEVERS",
            Self::SeatbeltStatus => "SEATBELT_STATUS",
            Self::Doors => "DOORS",
            Self::TractionButton => "TRACTION_BUTTON",
            Self::BlindSpotWarnings => "BLIND_SPOT_WARNINGS",
            Self::WheelButtons => "WHEEL_BUTTONS",
            Self::AutoParkRequest => "AUTO_PARK_REQUEST",
            Self::HybridEcu => "HYBRID_ECU",
            Self::LkasCommand => "LKAS_COMMAND",
            Self::LkasHeartbit => "LKAS_HEARTBIT",
            Self::LkasHud => "LKAS_HUD",
        }
    }

    /// Bus the decoder reads this message from.
    pub fn inbound_bus(&self) -> Bus {
        match self {
            Self::LkasCommand | Self::LkasHeartbit | Self::LkasHud => Bus::Camera,
            _ => Bus::Powertrain,
        }
    }

    pub fn from_address(address: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.address() == address)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MessageId {
    type Err = ProtocolError;

    fn from_str(s: &str) -> ProtocolResult<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| ProtocolError::UnknownMessage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_are_unique() {
        for (i, a) in MessageId::ALL.iter().enumerate() {
            for b in MessageId::ALL.iter().skip(i + 1) {
                assert_ne!(a.address(), b.address(), "{a} and {b} share an address");
            }
        }
    }

    #[test]
    fn test_name_round_trip() -> Result<(), ProtocolError> {
        for id in MessageId::ALL {
            assert_eq!(id.name().parse::<MessageId>()?, id);
            assert_eq!(MessageId::from_address(id.address()), Some(id));
        }
        Ok(())
    }

    #[test]
    fn test_unknown_name() {
        assert!("NOT_A_MESSAGE".parse::<MessageId>().is_err());
    }

    #[test]
    fn test_camera_messages() {
        assert_eq!(MessageId::LkasCommand.inbound_bus(), Bus::Camera);
        assert_eq!(MessageId::EpsStatus.inbound_bus(), Bus::Powertrain);
    }

    #[test]
    fn test_serde_uses_bus_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&MessageId::AccelGas22F)?, "\"ACCEL_GAS_22F\"");
        let id: MessageId = serde_json::from_str("\"EPS_STATUS\"")?;
        assert_eq!(id, MessageId::EpsStatus);
        Ok(())
    }
}
