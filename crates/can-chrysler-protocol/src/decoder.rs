//! Vehicle state decoder
//!
//! Turns one cycle of powertrain and camera signals into a [`VehicleState`]
//! and keeps the Chrysler-specific bookkeeping the encoder needs: the EPS
//! and camera heartbeat counters, the wheel-button counter, the dash car
//! model and the raw fault flags.

use carport_can_common::{CounterCheck, FreshnessChecker, MessageCheck, SignalFrame, nibble};
use carport_filters::SpeedFilterState;
use carport_types::units::KPH_TO_MS;
use carport_types::{CruiseState, VehicleState, WheelSpeeds};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::MessageId;
use crate::signals::*;
use crate::types::{
    APA_STEER_FAULT_ACTIVE, CruiseButton, LKAS_STEER_FAULT_ACTIVE, STEER_THRESHOLD,
    gear_from_raw,
};

/// Required powertrain messages and their nominal rates.
pub const POWERTRAIN_CHECKS: [MessageCheck<MessageId>; 15] = [
    MessageCheck::new(MessageId::Brake2, 50.0),
    MessageCheck::new(MessageId::EpsStatus, 100.0),
    MessageCheck::new(MessageId::Speed1, 100.0),
    MessageCheck::new(MessageId::WheelSpeeds, 50.0),
    MessageCheck::new(MessageId::Steering, 100.0),
    MessageCheck::new(MessageId::Acc2, 50.0),
    MessageCheck::new(MessageId::Gear, 50.0),
    MessageCheck::new(MessageId::AccelGas134, 50.0),
    MessageCheck::new(MessageId::Dashboard, 15.0),
    MessageCheck::new(MessageId::SteeringLevers, 10.0),
    MessageCheck::new(MessageId::SeatbeltStatus, 2.0),
    MessageCheck::new(MessageId::Doors, 1.0),
    MessageCheck::new(MessageId::TractionButton, 1.0),
    MessageCheck::new(MessageId::BlindSpotWarnings, 2.0),
    MessageCheck::new(MessageId::Brake1, 50.0),
];

/// Required camera messages and their nominal rates.
pub const CAMERA_CHECKS: [MessageCheck<MessageId>; 3] = [
    MessageCheck::new(MessageId::LkasCommand, 100.0),
    MessageCheck::new(MessageId::LkasHeartbit, 10.0),
    MessageCheck::new(MessageId::LkasHud, 4.0),
];

/// Raw fault and override flags.
///
/// Recomputed every cycle: a signal flag holds exactly as long as the ECU
/// keeps reporting it, the counter flag as long as the counter keeps
/// failing to step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChryslerFaults {
    /// EPS refuses lane-keep torque.
    pub steer_fault: bool,
    pub apa_fault: bool,
    /// EPS reports park assist steering.
    pub apa_active: bool,
    /// Park assist module requests steering.
    pub apa_steer_status: bool,
    pub traction_off: bool,
    /// `EPS_STATUS` keeps arriving but its counter does not step by one.
    pub eps_counter_stale: bool,
}

/// Chrysler bookkeeping that does not belong in the shared snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChryslerCarState {
    /// `EPS_STATUS` counter, `None` until the EPS has been heard.
    pub eps_counter: Option<u8>,
    /// Camera `LKAS_COMMAND` counter, `None` until the camera has been heard.
    pub lkas_counter: Option<u8>,
    /// `WHEEL_BUTTONS` counter, `None` until the buttons have been heard.
    pub wheel_button_counter: Option<u8>,
    /// The driver is holding any cruise button.
    pub acc_button_pressed: bool,
    /// Lane-keep button LED on the camera heartbeat.
    pub lkas_button_led: bool,
    /// Dash model byte from the camera HUD, `None` until seen.
    pub lkas_car_model: Option<u8>,
    pub acc_hold: bool,
    pub veh_on: bool,
    pub lead_dist: f32,
    pub faults: ChryslerFaults,
}

/// Stateful decoder for one drive session.
#[derive(Debug, Clone)]
pub struct CarStateDecoder {
    powertrain: FreshnessChecker<MessageId>,
    camera: FreshnessChecker<MessageId>,
    speed: SpeedFilterState,
    eps_counter: CounterCheck,
    car_state: ChryslerCarState,
}

impl CarStateDecoder {
    pub fn new(tolerance_periods: f32) -> Self {
        Self {
            powertrain: FreshnessChecker::new(POWERTRAIN_CHECKS).with_tolerance(tolerance_periods),
            camera: FreshnessChecker::new(CAMERA_CHECKS).with_tolerance(tolerance_periods),
            speed: SpeedFilterState::new(),
            eps_counter: CounterCheck::new(),
            car_state: ChryslerCarState::default(),
        }
    }

    /// Bookkeeping from the most recent [`decode`](Self::decode).
    pub fn car_state(&self) -> &ChryslerCarState {
        &self.car_state
    }

    pub fn decode(&mut self, frame: &SignalFrame<MessageId>) -> VehicleState {
        let powertrain_valid = self.powertrain.is_valid(frame);
        let camera_valid = self.camera.is_valid(frame);
        if !(powertrain_valid && camera_valid) {
            debug!(powertrain_valid, camera_valid, "signal frame not valid");
        }

        let v_ego_raw = frame.value(MessageId::Brake1, brake_1::VEHICLE_SPEED_KPH) * KPH_TO_MS;
        let estimate = self.speed.update(v_ego_raw);

        let steering_torque = frame.value(MessageId::EpsStatus, eps_status::TORQUE_DRIVER);
        let turn_signals = frame.raw(MessageId::SteeringLevers, steering_levers::TURN_SIGNALS);
        let cruise_state = frame.raw(MessageId::Dashboard, dashboard::CRUISE_STATE);

        let eps_counter = counter(frame, MessageId::EpsStatus, eps_status::COUNTER);
        if let Some(sample) = frame.sample(MessageId::EpsStatus) {
            self.eps_counter.observe(eps_counter, sample.updated_ns);
        }

        let faults = ChryslerFaults {
            steer_fault: frame.raw(MessageId::EpsStatus, eps_status::LKAS_STEER_FAULT)
                == LKAS_STEER_FAULT_ACTIVE,
            apa_fault: frame.raw(MessageId::EpsStatus, eps_status::APA_STEER_FAULT)
                == APA_STEER_FAULT_ACTIVE,
            apa_active: frame.raw(MessageId::EpsStatus, eps_status::APA_ACTIVE) == 1,
            apa_steer_status: frame.raw(MessageId::AutoParkRequest, auto_park_request::APA_ACTIVE)
                == 1,
            traction_off: frame.raw(MessageId::TractionButton, traction_button::TRACTION_OFF) == 1,
            eps_counter_stale: self.eps_counter.is_faulted(),
        };

        let state = VehicleState {
            can_valid: powertrain_valid && camera_valid,

            v_ego_raw,
            v_ego: estimate.speed,
            a_ego: estimate.accel,
            wheel_speeds: WheelSpeeds {
                fl: frame.value(MessageId::WheelSpeeds, wheel_speeds::WHEEL_SPEED_FL),
                fr: frame.value(MessageId::WheelSpeeds, wheel_speeds::WHEEL_SPEED_FR),
                rl: frame.value(MessageId::WheelSpeeds, wheel_speeds::WHEEL_SPEED_RL),
                rr: frame.value(MessageId::WheelSpeeds, wheel_speeds::WHEEL_SPEED_RR),
            },
            standstill: frame.flag(MessageId::Brake1, brake_1::STANDSTILL),

            steering_angle_deg: frame.value(MessageId::Steering, steering::STEER_ANGLE),
            steering_rate_deg: frame.value(MessageId::Steering, steering::STEERING_RATE),
            steering_torque,
            steering_torque_eps: frame.value(MessageId::EpsStatus, eps_status::TORQUE_MOTOR),
            steering_pressed: steering_torque.abs() > STEER_THRESHOLD,
            steer_fault: faults.steer_fault,
            steering_rate_limited: false,

            brake_pressed: frame.raw(MessageId::Brake2, brake_2::BRAKE_PEDAL) == 1,
            brake: frame.value(MessageId::Brake1, brake_1::BRAKE_VAL_TOTAL),
            brake_lights: frame.flag(MessageId::Brake2, brake_2::BRAKE_LIGHT),
            gas: frame.value(MessageId::AccelGas22F, accel_gas_22f::GAS_PEDAL_POS),
            gas_pressed: frame.value(MessageId::AccelGas22F, accel_gas_22f::GAS_PEDAL_POS) > 1e-5,

            door_open: doors::ALL
                .iter()
                .any(|door| frame.flag(MessageId::Doors, door)),
            seatbelt_unlatched: frame.raw(
                MessageId::SeatbeltStatus,
                seatbelt_status::SEATBELT_DRIVER_UNLATCHED,
            ) == 1,
            left_blinker: turn_signals == 1,
            right_blinker: turn_signals == 2,
            gear_shifter: gear_from_raw(frame.raw(MessageId::Gear, gear::PRNDL)),
            generic_toggle: frame.flag(MessageId::SteeringLevers, steering_levers::HIGH_BEAM_FLASH),
            left_blindspot: blind_spot_active(frame, blind_spot_warnings::BLIND_SPOT_LEFT),
            right_blindspot: blind_spot_active(frame, blind_spot_warnings::BLIND_SPOT_RIGHT),
            esp_disabled: faults.traction_off,
            park_assist_fault: faults.apa_fault,

            cruise_state: CruiseState {
                enabled: frame.flag(MessageId::Acc2, acc_2::ACC_ENABLED),
                available: frame.flag(MessageId::Acc2, acc_2::ACC_AVAILABLE),
                speed: frame.value(MessageId::Dashboard, dashboard::ACC_SPEED_CONFIG_KPH)
                    * KPH_TO_MS,
                non_adaptive: matches!(cruise_state, 1 | 2),
                standstill_hold: frame.flag(MessageId::Acc2, acc_2::ACC_STOP),
            },
        };

        self.car_state = ChryslerCarState {
            eps_counter,
            lkas_counter: counter(frame, MessageId::LkasCommand, lkas_command::COUNTER),
            wheel_button_counter: counter(frame, MessageId::WheelButtons, wheel_buttons::COUNTER),
            acc_button_pressed: CruiseButton::ALL
                .iter()
                .any(|button| frame.flag(MessageId::WheelButtons, button.signal())),
            lkas_button_led: frame.flag(MessageId::LkasHeartbit, lkas_heartbit::LKAS_BUTTON_LED),
            lkas_car_model: frame
                .signal(MessageId::LkasHud, lkas_hud::CAR_MODEL)
                .filter(|model| model.is_finite() && *model >= 0.0)
                .map(|model| model.round().min(f32::from(u8::MAX)) as u8),
            acc_hold: state.cruise_state.standstill_hold,
            veh_on: frame.raw(MessageId::HybridEcu, hybrid_ecu::VEH_ON) == 1,
            lead_dist: frame.value(MessageId::Dashboard, dashboard::LEAD_DIST),
            faults,
        };

        state
    }
}

fn blind_spot_active(frame: &SignalFrame<MessageId>, signal: &str) -> bool {
    let raw = frame.raw(MessageId::BlindSpotWarnings, signal);
    raw > 0 && raw < 7
}

fn counter(frame: &SignalFrame<MessageId>, id: MessageId, signal: &str) -> Option<u8> {
    frame
        .signal(id, signal)
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|_| nibble(frame.raw(id, signal)))
}
