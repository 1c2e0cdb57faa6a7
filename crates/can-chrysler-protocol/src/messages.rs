//! Outgoing frame builders
//!
//! Each builder returns the complete signal set of its message; packing and
//! checksums are left to the transport.

use carport_can_common::{Bus, FrameDescriptor, nibble};
use carport_types::{GearShifter, VisualAlert};

use crate::MessageId;
use crate::signals::{lkas_command, lkas_hud, wheel_buttons};
use crate::types::{CruiseButton, HUD_STARTUP_FRAMES, LkasIconColor, lkas_alert};

pub type ChryslerFrame = FrameDescriptor<MessageId>;

/// `LKAS_COMMAND`: steering torque request.
pub fn lkas_command(torque: i32, high_torque: bool, counter: u8) -> ChryslerFrame {
    FrameDescriptor::new(MessageId::LkasCommand, Bus::Powertrain)
        .with_signal(lkas_command::LKAS_STEERING_TORQUE, torque as f32)
        .with_signal(lkas_command::LKAS_HIGH_TORQUE, f32::from(u8::from(high_torque)))
        .with_signal(lkas_command::COUNTER, f32::from(nibble(u32::from(counter))))
}

/// `LKAS_HUD`: lane-keep icon, lane lines and alert on the dash.
///
/// A steer-required alert replaces the whole frame with the fixed alert
/// layout. Otherwise the first [`HUD_STARTUP_FRAMES`] frames carry the
/// start-up alert, and in D, R or L the icon turns green with lane lines
/// while lane keeping is active.
pub fn lkas_hud(
    gear: GearShifter,
    lkas_active: bool,
    alert: VisualAlert,
    hud_count: u32,
    car_model: u8,
) -> ChryslerFrame {
    if alert == VisualAlert::SteerRequired {
        return hud_frame(LkasIconColor::Off, 0, 0, lkas_alert::STEER_REQUIRED);
    }

    let alerts = if hud_count < HUD_STARTUP_FRAMES {
        lkas_alert::STARTUP
    } else {
        lkas_alert::NONE
    };

    let (color, lines) = if gear.shows_lane_icon() && lkas_active {
        (LkasIconColor::Green, 6)
    } else {
        (LkasIconColor::White, 1)
    };

    hud_frame(color, car_model, lines, alerts)
}

fn hud_frame(color: LkasIconColor, car_model: u8, lines: u8, alerts: u8) -> ChryslerFrame {
    FrameDescriptor::new(MessageId::LkasHud, Bus::Powertrain)
        .with_signal(lkas_hud::LKAS_ICON_COLOR, f32::from(color as u8))
        .with_signal(lkas_hud::CAR_MODEL, f32::from(car_model))
        .with_signal(lkas_hud::LKAS_LANE_LINES, f32::from(lines))
        .with_signal(lkas_hud::LKAS_ALERTS, f32::from(alerts))
}

/// `WHEEL_BUTTONS`: one synthesized button press.
pub fn wheel_button(button: CruiseButton, counter: u8) -> ChryslerFrame {
    FrameDescriptor::new(MessageId::WheelButtons, Bus::Powertrain)
        .with_signal(button.signal(), 1.0)
        .with_signal(wheel_buttons::COUNTER, f32::from(nibble(u32::from(counter))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lkas_command() {
        let frame = lkas_command(-42, true, 17);
        assert_eq!(frame.id, MessageId::LkasCommand);
        assert_eq!(frame.bus, Bus::Powertrain);
        assert_eq!(frame.signal(lkas_command::LKAS_STEERING_TORQUE), Some(-42.0));
        assert_eq!(frame.signal(lkas_command::LKAS_HIGH_TORQUE), Some(1.0));
        assert_eq!(frame.signal(lkas_command::COUNTER), Some(1.0));
    }

    #[test]
    fn test_hud_steer_required_is_fixed() {
        let frame = lkas_hud(GearShifter::Drive, true, VisualAlert::SteerRequired, 40, 7);
        assert_eq!(frame.signal(lkas_hud::LKAS_ALERTS), Some(3.0));
        assert_eq!(frame.signal(lkas_hud::LKAS_ICON_COLOR), Some(0.0));
        assert_eq!(frame.signal(lkas_hud::CAR_MODEL), Some(0.0));
        assert_eq!(frame.signal(lkas_hud::LKAS_LANE_LINES), Some(0.0));
    }

    #[test]
    fn test_hud_startup_alert() {
        let first = lkas_hud(GearShifter::Park, false, VisualAlert::None, 3, 7);
        let later = lkas_hud(GearShifter::Park, false, VisualAlert::None, 4, 7);
        assert_eq!(first.signal(lkas_hud::LKAS_ALERTS), Some(1.0));
        assert_eq!(later.signal(lkas_hud::LKAS_ALERTS), Some(0.0));
        assert_eq!(later.signal(lkas_hud::CAR_MODEL), Some(7.0));
    }

    #[test]
    fn test_hud_icon() {
        let active = lkas_hud(GearShifter::Drive, true, VisualAlert::None, 10, 7);
        assert_eq!(active.signal(lkas_hud::LKAS_ICON_COLOR), Some(2.0));
        assert_eq!(active.signal(lkas_hud::LKAS_LANE_LINES), Some(6.0));

        let idle = lkas_hud(GearShifter::Drive, false, VisualAlert::None, 10, 7);
        assert_eq!(idle.signal(lkas_hud::LKAS_ICON_COLOR), Some(1.0));
        assert_eq!(idle.signal(lkas_hud::LKAS_LANE_LINES), Some(1.0));

        let parked = lkas_hud(GearShifter::Park, true, VisualAlert::None, 10, 7);
        assert_eq!(parked.signal(lkas_hud::LKAS_ICON_COLOR), Some(1.0));
    }

    #[test]
    fn test_wheel_button() {
        let frame = wheel_button(CruiseButton::Cancel, 16);
        assert_eq!(frame.signal(wheel_buttons::ACC_CANCEL), Some(1.0));
        assert_eq!(frame.signal(wheel_buttons::COUNTER), Some(0.0));
        assert_eq!(frame.signal(wheel_buttons::ACC_SPEED_INC), None);
    }
}
