//! Actuator intent flowing in from the planner

use serde::{Deserialize, Serialize};

/// Dash alert requested by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VisualAlert {
    #[default]
    None,
    Fcw,
    SteerRequired,
    BrakePressed,
    WrongGear,
    SeatbeltUnbuckled,
    SpeedTooHigh,
    Ldw,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActuatorIntent {
    /// Normalized steering torque request, -1.0 to 1.0.
    pub steer: f32,
    /// Cruise speed the planner would like the car to hold, m/s.
    pub target_speed: f32,
}

/// Everything the planner hands back for one control cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarControl {
    pub enabled: bool,
    pub actuators: ActuatorIntent,
    pub cruise_cancel: bool,
    pub hud_alert: VisualAlert,
}

impl CarControl {
    pub fn engaged(steer: f32) -> Self {
        Self {
            enabled: true,
            actuators: ActuatorIntent {
                steer,
                target_speed: 0.0,
            },
            ..Default::default()
        }
    }

    pub fn with_target_speed(mut self, speed: f32) -> Self {
        self.actuators.target_speed = speed;
        self
    }

    pub fn with_cancel(mut self) -> Self {
        self.cruise_cancel = true;
        self
    }

    pub fn with_alert(mut self, alert: VisualAlert) -> Self {
        self.hud_alert = alert;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let control = CarControl::engaged(0.5)
            .with_target_speed(25.0)
            .with_cancel()
            .with_alert(VisualAlert::SteerRequired);
        assert!(control.enabled);
        assert!(control.cruise_cancel);
        assert_eq!(control.hud_alert, VisualAlert::SteerRequired);
        assert!((control.actuators.steer - 0.5).abs() < f32::EPSILON);
        assert!((control.actuators.target_speed - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_default_is_disengaged() {
        let control = CarControl::default();
        assert!(!control.enabled);
        assert!(!control.cruise_cancel);
        assert_eq!(control.hud_alert, VisualAlert::None);
    }
}
