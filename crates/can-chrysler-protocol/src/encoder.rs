//! Command encoder
//!
//! Runs once per camera heartbeat. The EPS only accepts a lane-keep command
//! that follows the camera's own `LKAS_COMMAND` counter, so a cycle whose
//! camera counter has not moved emits nothing and leaves the session as it
//! was.
//!
//! The cruise set speed has no direct channel. It is nudged by synthesizing
//! `WHEEL_BUTTONS` presses on the back of the real button frames:
//!
//! - a driver press of any cruise button pauses synthesized presses for
//!   `pause_frames` accepted cycles
//! - nothing is synthesized until a real `WHEEL_BUTTONS` frame has been heard
//! - a new wheel-button counter is recorded as seen whether or not a press is
//!   sent for it
//! - a press is only sent while the pause has run out *and* the accepted-cycle
//!   index is inside the 40 ms duty window of each 100 ms
//! - a cancel request sends the cancel button and skips the speed logic for
//!   that cycle

use carport_can_common::nibble;
use carport_filters::limit_steer_torque;
use carport_types::units::MS_TO_MPH;
use carport_types::{ActuatorIntent, VariantParams, VehicleState, VisualAlert};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::decoder::ChryslerCarState;
use crate::messages::{ChryslerFrame, lkas_command, lkas_hud, wheel_button};
use crate::types::{BUTTON_DUTY_PERIOD, BUTTON_DUTY_WINDOW, CruiseButton, HUD_PERIOD_FRAMES};

/// Accepted cycles during which synthesized presses stay paused after the
/// driver touched a cruise button (one second at 100 Hz).
pub const DEFAULT_PAUSE_FRAMES: u32 = 100;

/// Set speed (mph) at or below which no decrease press is sent.
pub const DEFAULT_MIN_ACC_SPEED_MPH: f32 = 20.0;

/// Button synthesis tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub pause_frames: u32,
    pub min_acc_speed_mph: f32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            pause_frames: DEFAULT_PAUSE_FRAMES,
            min_acc_speed_mph: DEFAULT_MIN_ACC_SPEED_MPH,
        }
    }
}

/// Everything the encoder carries from one accepted cycle to the next.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncoderSession {
    /// Last torque put on the bus.
    pub apply_steer_last: i32,
    /// Speed has passed the lane-keep threshold this drive.
    pub gone_fast_yet: bool,
    /// The limiter altered the last request.
    pub steer_rate_limited: bool,
    pub hud_count: u32,
    pub pause_control_until_frame: u32,
    pub last_button_counter: Option<u8>,
    /// Accepted cycles so far.
    pub cc_frame: u32,
    pub prev_lkas_counter: Option<u8>,
}

/// Inputs of one encode call.
#[derive(Debug, Clone, Copy)]
pub struct EncoderInput<'a> {
    pub enabled: bool,
    pub state: &'a VehicleState,
    pub car_state: &'a ChryslerCarState,
    pub actuators: ActuatorIntent,
    pub cancel_requested: bool,
    pub hud_alert: VisualAlert,
    /// Driver preferences allow steering this cycle.
    pub steer_allowed: bool,
}

impl<'a> EncoderInput<'a> {
    pub fn new(state: &'a VehicleState, car_state: &'a ChryslerCarState) -> Self {
        Self {
            enabled: false,
            state,
            car_state,
            actuators: ActuatorIntent::default(),
            cancel_requested: false,
            hud_alert: VisualAlert::None,
            steer_allowed: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_actuators(mut self, actuators: ActuatorIntent) -> Self {
        self.actuators = actuators;
        self
    }

    pub fn with_cancel(mut self, cancel_requested: bool) -> Self {
        self.cancel_requested = cancel_requested;
        self
    }

    pub fn with_alert(mut self, hud_alert: VisualAlert) -> Self {
        self.hud_alert = hud_alert;
        self
    }

    pub fn with_steer_allowed(mut self, steer_allowed: bool) -> Self {
        self.steer_allowed = steer_allowed;
        self
    }
}

/// Stateful command encoder for one drive session.
#[derive(Debug, Clone)]
pub struct CommandEncoder {
    params: VariantParams,
    config: EncoderConfig,
    session: EncoderSession,
}

impl CommandEncoder {
    pub fn new(params: VariantParams, config: EncoderConfig) -> Self {
        Self {
            params,
            config,
            session: EncoderSession::default(),
        }
    }

    pub fn session(&self) -> &EncoderSession {
        &self.session
    }

    pub fn params(&self) -> &VariantParams {
        &self.params
    }

    /// Frames for this cycle, in send order: button press (if any), HUD (if
    /// due), steering command.
    pub fn encode(&mut self, input: &EncoderInput<'_>) -> Vec<ChryslerFrame> {
        let Some(lkas_counter) = input.car_state.lkas_counter else {
            trace!("no camera heartbeat yet");
            return Vec::new();
        };
        if self.session.prev_lkas_counter == Some(lkas_counter) {
            debug!(lkas_counter, "duplicate camera heartbeat, skipping cycle");
            return Vec::new();
        }

        let state = input.state;
        let limits = &self.params.steer_limits;
        let session = &mut self.session;

        // steering
        let requested = input.actuators.steer * limits.max as f32;
        let limited = limit_steer_torque(
            requested,
            session.apply_steer_last,
            state.steering_torque_eps,
            limits,
        );
        session.steer_rate_limited = limited.rate_limited;

        if state.v_ego > self.params.latch_speed() {
            session.gone_fast_yet = true;
        } else if let Some(release) = self.params.latch_release_speed
            && state.v_ego < release
        {
            session.gone_fast_yet = false;
        }

        let lkas_active = input.enabled && session.gone_fast_yet && input.steer_allowed;
        let apply_steer = if lkas_active { limited.applied } else { 0 };
        session.apply_steer_last = apply_steer;

        let mut frames = Vec::with_capacity(3);

        // cruise buttons
        let car_state = input.car_state;
        if car_state.acc_button_pressed {
            session.pause_control_until_frame =
                session.cc_frame.saturating_add(self.config.pause_frames);
        }

        let heard = car_state.wheel_button_counter;
        let button_counter = nibble(heard.map_or(0, u32::from) + 1);
        if input.cancel_requested {
            frames.push(wheel_button(CruiseButton::Cancel, button_counter));
        } else if input.enabled
            && let Some(heard) = heard
            && session.last_button_counter != Some(heard)
        {
            session.last_button_counter = Some(heard);

            let in_duty_window = session.cc_frame % BUTTON_DUTY_PERIOD <= BUTTON_DUTY_WINDOW;
            if session.cc_frame >= session.pause_control_until_frame && in_duty_window {
                let current = (state.cruise_state.speed * MS_TO_MPH).round();
                let target = (input.actuators.target_speed * MS_TO_MPH).round();

                let button = if target < current && current > self.config.min_acc_speed_mph {
                    Some(CruiseButton::SpeedDec)
                } else if target > current {
                    Some(CruiseButton::SpeedInc)
                } else {
                    None
                };

                if let Some(button) = button {
                    debug!(?button, current, target, "synthesizing cruise button");
                    frames.push(wheel_button(button, button_counter));
                }
            }
        }

        // HUD
        if session.cc_frame % HUD_PERIOD_FRAMES == 0
            && let Some(car_model) = car_state.lkas_car_model
        {
            frames.push(lkas_hud(
                state.gear_shifter,
                lkas_active,
                input.hud_alert,
                session.hud_count,
                car_model,
            ));
            session.hud_count = session.hud_count.wrapping_add(1);
        }

        frames.push(lkas_command(apply_steer, session.gone_fast_yet, lkas_counter));

        session.cc_frame = session.cc_frame.wrapping_add(1);
        session.prev_lkas_counter = Some(lkas_counter);

        frames
    }
}
