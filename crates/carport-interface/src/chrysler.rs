//! Chrysler/FCA interface

use std::str::FromStr;

use can_chrysler_protocol::{
    CarStateDecoder, ChryslerCarState, ChryslerFrame, ChryslerVariant, CommandEncoder,
    EncoderInput, EncoderSession, Fingerprint, MessageId,
};
use carport_can_common::SignalFrame;
use carport_errors::Result;
use carport_events::{Condition, derive, derive_transitions};
use carport_types::{CarControl, VariantParams, VehicleState};
use tracing::{debug, info, trace, warn};

use crate::config::InterfaceConfig;
use crate::port::{CarOutput, CarPort};

/// One drive session on a Chrysler/FCA vehicle.
#[derive(Debug, Clone)]
pub struct ChryslerInterface {
    config: InterfaceConfig,
    variant: ChryslerVariant,
    params: VariantParams,
    decoder: CarStateDecoder,
    encoder: CommandEncoder,
    /// Snapshot of the latest update.
    current: VehicleState,
    /// Snapshot of the update before that, for edge conditions.
    previous: VehicleState,
    last_good: Option<VehicleState>,
}

impl ChryslerInterface {
    pub fn new(config: InterfaceConfig, variant: ChryslerVariant) -> Result<Self> {
        config.validate()?;

        let params = variant.params();
        info!(
            variant = variant.name(),
            min_steer_speed = params.min_steer_speed,
            latch_release = ?params.latch_release_speed,
            "starting car interface session"
        );

        Ok(Self {
            decoder: CarStateDecoder::new(config.tolerance_periods),
            encoder: CommandEncoder::new(params.clone(), config.encoder_config()),
            config,
            variant,
            params,
            current: VehicleState::default(),
            previous: VehicleState::default(),
            last_good: None,
        })
    }

    /// Start a session for whatever vehicle produced `fingerprint`.
    ///
    /// A variant named in the configuration wins over the fingerprint.
    pub fn from_fingerprint(config: InterfaceConfig, fingerprint: &Fingerprint) -> Result<Self> {
        let variant = match config.variant.as_deref() {
            Some(name) => {
                let variant = ChryslerVariant::from_str(name)?;
                info!(variant = variant.name(), "variant set by configuration, fingerprint ignored");
                variant
            }
            None => ChryslerVariant::from_fingerprint(fingerprint)?,
        };
        Self::new(config, variant)
    }

    pub fn variant(&self) -> ChryslerVariant {
        self.variant
    }

    pub fn config(&self) -> &InterfaceConfig {
        &self.config
    }

    pub fn car_state(&self) -> &ChryslerCarState {
        self.decoder.car_state()
    }

    pub fn encoder_session(&self) -> &EncoderSession {
        self.encoder.session()
    }

    /// The most recent snapshot that had every required message.
    pub fn last_good_state(&self) -> Option<&VehicleState> {
        self.last_good.as_ref()
    }

    pub fn update(&mut self, frame: &SignalFrame<MessageId>) -> CarOutput {
        let was_stale = self.decoder.car_state().faults.eps_counter_stale;
        let mut state = self.decoder.decode(frame);
        state.steering_rate_limited = self.encoder.session().steer_rate_limited;

        let eps_counter_stale = self.decoder.car_state().faults.eps_counter_stale;
        if eps_counter_stale && !was_stale {
            warn!("EPS status counter stopped stepping, steering commands held");
        }

        let mut conditions = derive(&state, &self.params)
            .union(&derive_transitions(&self.current, &state));
        conditions.set(Condition::EpsCounterStale, eps_counter_stale);

        if state.can_valid {
            self.last_good = Some(state.clone());
        } else if self.current.can_valid {
            warn!("required messages missing or stale, holding last good snapshot");
        } else {
            trace!("snapshot still invalid");
        }

        self.previous = std::mem::replace(&mut self.current, state.clone());

        CarOutput { state, conditions }
    }

    pub fn apply(&mut self, control: &CarControl) -> Vec<ChryslerFrame> {
        if self.decoder.car_state().eps_counter.is_none() {
            trace!("no EPS status yet, nothing to command");
            return Vec::new();
        }
        if !self.current.can_valid {
            debug!("snapshot invalid, nothing to command");
            return Vec::new();
        }
        if self.decoder.car_state().faults.eps_counter_stale {
            debug!("EPS status counter stale, nothing to command");
            return Vec::new();
        }

        let steer_allowed = self
            .config
            .preferences
            .allows_steering(self.current.any_blinker());

        let input = EncoderInput::new(&self.current, self.decoder.car_state())
            .enabled(control.enabled)
            .with_actuators(control.actuators)
            .with_cancel(control.cruise_cancel)
            .with_alert(control.hud_alert)
            .with_steer_allowed(steer_allowed);

        self.encoder.encode(&input)
    }

    /// Snapshot from the update before the latest one.
    pub fn previous_state(&self) -> &VehicleState {
        &self.previous
    }
}

impl CarPort for ChryslerInterface {
    type MessageId = MessageId;

    fn update(&mut self, frame: &SignalFrame<MessageId>) -> CarOutput {
        ChryslerInterface::update(self, frame)
    }

    fn apply(&mut self, control: &CarControl) -> Vec<ChryslerFrame> {
        ChryslerInterface::apply(self, control)
    }

    fn variant_params(&self) -> &VariantParams {
        &self.params
    }
}
