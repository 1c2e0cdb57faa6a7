//! Vehicle variant table and fingerprint resolution
//!
//! Each model resolves to an immutable [`VariantParams`] record. Model
//! specific behaviour is carried as data in that record; the decoder and
//! encoder never branch on the model itself.
//!
//! Fingerprint tables list, per model, the powertrain messages it broadcasts
//! below [`FINGERPRINT_ADDRESS_LIMIT`] and their payload lengths: the messages
//! this port decodes, plus the family and model messages that tell the models
//! apart.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use carport_errors::ConfigError;
use carport_filters::TorqueLimits;
use carport_types::units::STD_CARGO_KG;
use carport_types::{LateralTuning, VariantParams};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ids::*;

/// Addresses at or above this value are diagnostic traffic and are ignored
/// when matching a fingerprint.
pub const FINGERPRINT_ADDRESS_LIMIT: u32 = 0x800;

/// Lane-keep cutoff for the models that refuse torque at low speed, m/s.
pub const HIGH_MIN_STEER_SPEED: f32 = 17.5;

/// Lane-keep cutoff for the remaining models, m/s.
pub const LOW_MIN_STEER_SPEED: f32 = 3.8;

const PID_SCALE: f32 = 0.145;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChryslerVariant {
    #[serde(rename = "PACIFICA_2017_HYBRID")]
    Pacifica2017Hybrid,
    #[serde(rename = "PACIFICA_2018")]
    Pacifica2018,
    #[serde(rename = "PACIFICA_2018_HYBRID")]
    Pacifica2018Hybrid,
    #[serde(rename = "PACIFICA_2019_HYBRID")]
    Pacifica2019Hybrid,
    #[serde(rename = "PACIFICA_2020")]
    Pacifica2020,
    #[serde(rename = "JEEP_CHEROKEE_2017")]
    JeepCherokee2017,
    #[serde(rename = "JEEP_CHEROKEE_2018")]
    JeepCherokee2018,
    #[serde(rename = "JEEP_CHEROKEE_2019")]
    JeepCherokee2019,
    #[serde(rename = "CHRYSLER_300_2018")]
    Chrysler300_2018,
}

impl ChryslerVariant {
    pub const ALL: [ChryslerVariant; 9] = [
        Self::Pacifica2017Hybrid,
        Self::Pacifica2018,
        Self::Pacifica2018Hybrid,
        Self::Pacifica2019Hybrid,
        Self::Pacifica2020,
        Self::JeepCherokee2017,
        Self::JeepCherokee2018,
        Self::JeepCherokee2019,
        Self::Chrysler300_2018,
    ];

    /// Configuration name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pacifica2017Hybrid => "PACIFICA_2017_HYBRID",
            Self::Pacifica2018 => "PACIFICA_2018",
            Self::Pacifica2018Hybrid => "PACIFICA_2018_HYBRID",
            Self::Pacifica2019Hybrid => "PACIFICA_2019_HYBRID",
            Self::Pacifica2020 => "PACIFICA_2020",
            Self::JeepCherokee2017 => "JEEP_CHEROKEE_2017",
            Self::JeepCherokee2018 => "JEEP_CHEROKEE_2018",
            Self::JeepCherokee2019 => "JEEP_CHEROKEE_2019",
            Self::Chrysler300_2018 => "CHRYSLER_300_2018",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Pacifica2017Hybrid => "Chrysler Pacifica Hybrid 2017",
            Self::Pacifica2018 => "Chrysler Pacifica 2017-2018",
            Self::Pacifica2018Hybrid => "Chrysler Pacifica Hybrid 2018",
            Self::Pacifica2019Hybrid => "Chrysler Pacifica Hybrid 2019-2020",
            Self::Pacifica2020 => "Chrysler Pacifica 2020",
            Self::JeepCherokee2017 => "Jeep Grand Cherokee 2017",
            Self::JeepCherokee2018 => "Jeep Grand Cherokee 2018",
            Self::JeepCherokee2019 => "Jeep Grand Cherokee 2019",
            Self::Chrysler300_2018 => "Chrysler 300 2018",
        }
    }

    fn is_jeep(&self) -> bool {
        matches!(
            self,
            Self::JeepCherokee2017 | Self::JeepCherokee2018 | Self::JeepCherokee2019
        )
    }

    fn has_high_min_steer_speed(&self) -> bool {
        matches!(
            self,
            Self::Pacifica2019Hybrid | Self::Pacifica2020 | Self::JeepCherokee2019
        )
    }

    /// Models whose EPS drops the high-torque bit again at low speed.
    fn releases_latch(&self) -> bool {
        matches!(self, Self::Pacifica2019Hybrid | Self::JeepCherokee2019)
    }

    /// Parameter record for this model.
    pub fn params(&self) -> VariantParams {
        let mut wheelbase = 3.089;
        let mut steer_ratio = 16.2;
        let mut mass = 1964.0 + STD_CARGO_KG;
        let mut steer_actuator_delay = 0.02;
        let mut lateral_tuning = LateralTuning::Pid {
            kp_bp: vec![9.0, 20.0],
            kp_v: vec![0.15 * PID_SCALE, 0.30 * PID_SCALE],
            ki_bp: vec![9.0, 20.0],
            ki_v: vec![0.03 * PID_SCALE, 0.05 * PID_SCALE],
            kf: 0.00006 * PID_SCALE,
        };

        if self.is_jeep() {
            wheelbase = 2.91;
            steer_ratio = 12.7;
            steer_actuator_delay = 0.2;
        }

        // taken from the base wheelbase, before the 300 override below
        let center_to_front = wheelbase * 0.44;

        if *self == Self::Chrysler300_2018 {
            wheelbase = 3.05308;
            steer_ratio = 15.5;
            mass = 1828.0 + STD_CARGO_KG;
            steer_actuator_delay = 0.38;
            lateral_tuning = LateralTuning::Indi {
                inner_loop_gain: 2.65,
                outer_loop_gain_bp: vec![0.0, 45.0 * 0.45, 65.0 * 0.45, 85.0 * 0.45],
                outer_loop_gain_v: vec![0.55, 0.73, 1.58, 1.95],
                time_constant: 10.0,
                actuator_effectiveness: 1.55,
            };
        }

        let min_steer_speed = if self.has_high_min_steer_speed() {
            HIGH_MIN_STEER_SPEED
        } else {
            LOW_MIN_STEER_SPEED
        };

        VariantParams {
            name: self.name(),
            wheelbase,
            steer_ratio,
            mass,
            center_to_front,
            min_steer_speed,
            latch_release_speed: self.releases_latch().then_some(min_steer_speed - 3.0),
            steer_limits: TorqueLimits::chrysler(),
            steer_actuator_delay,
            steer_rate_cost: 0.10,
            steer_limit_timer: 0.8,
            lateral_tuning,
        }
    }

    fn fingerprint_tables(&self) -> [&'static [(u32, u8)]; 3] {
        let family: &'static [(u32, u8)] = match self {
            Self::Pacifica2018 | Self::Pacifica2020 => PACIFICA_MESSAGES,
            Self::Pacifica2017Hybrid | Self::Pacifica2018Hybrid | Self::Pacifica2019Hybrid => {
                PACIFICA_HYBRID_MESSAGES
            }
            Self::JeepCherokee2017 | Self::JeepCherokee2018 | Self::JeepCherokee2019 => {
                CHEROKEE_MESSAGES
            }
            Self::Chrysler300_2018 => CHRYSLER_300_MESSAGES,
        };
        let model: &'static [(u32, u8)] = match self {
            Self::Pacifica2017Hybrid => &[(0x601, 8)],
            Self::Pacifica2018 => &[(0x44C, 8)],
            Self::Pacifica2018Hybrid => &[(0x43A, 8)],
            Self::Pacifica2019Hybrid => &[(0x43B, 8)],
            Self::Pacifica2020 => &[(0x41A, 8)],
            Self::JeepCherokee2017 => &[(0x423, 8)],
            Self::JeepCherokee2018 => &[(0x402, 8)],
            Self::JeepCherokee2019 => &[(0x409, 8)],
            Self::Chrysler300_2018 => &[(0x407, 8)],
        };
        [CORE_MESSAGES, family, model]
    }

    /// Payload length this model broadcasts at `address`, if it does.
    pub fn fingerprint_len(&self, address: u32) -> Option<u8> {
        self.fingerprint_tables()
            .into_iter()
            .flatten()
            .find(|(addr, _)| *addr == address)
            .map(|(_, len)| *len)
    }

    /// Whole fingerprint table of this model.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint_tables().into_iter().flatten().copied().collect()
    }

    /// Whether `observed` could have come from this model.
    pub fn matches(&self, observed: &Fingerprint) -> bool {
        observed
            .messages
            .iter()
            .filter(|(address, _)| **address < FINGERPRINT_ADDRESS_LIMIT)
            .all(|(address, len)| self.fingerprint_len(*address) == Some(*len))
    }

    /// Resolve exactly one model from observed traffic.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnrecognizedFingerprint`] when no model matches and
    /// [`ConfigError::AmbiguousFingerprint`] when more than one does.
    pub fn from_fingerprint(observed: &Fingerprint) -> Result<Self, ConfigError> {
        let candidates: Vec<ChryslerVariant> = Self::ALL
            .into_iter()
            .filter(|variant| variant.matches(observed))
            .collect();

        debug!(observed = observed.len(), candidates = ?candidates, "fingerprint candidates");

        match candidates.as_slice() {
            [variant] => {
                info!(variant = variant.name(), "vehicle fingerprinted");
                Ok(*variant)
            }
            [] => Err(ConfigError::UnrecognizedFingerprint {
                observed: observed.len(),
            }),
            many => Err(ConfigError::AmbiguousFingerprint {
                candidates: many.iter().map(|v| v.name().to_string()).collect(),
            }),
        }
    }
}

impl fmt::Display for ChryslerVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChryslerVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::unsupported(s))
    }
}

/// Observed `(address -> payload length)` on the powertrain bus.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint {
    pub messages: BTreeMap<u32, u8>,
}

impl Fingerprint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, address: u32, len: u8) {
        self.messages.insert(address, len);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<(u32, u8)> for Fingerprint {
    fn from_iter<I: IntoIterator<Item = (u32, u8)>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// Messages every supported model broadcasts.
const CORE_MESSAGES: &[(u32, u8)] = &[
    (BRAKE_1_ADDR, 8),
    (STEERING_ADDR, 6),
    (ACCEL_GAS_134_ADDR, 8),
    (BRAKE_2_ADDR, 8),
    (ACC_2_ADDR, 8),
    (GEAR_ADDR, 8),
    (SPEED_1_ADDR, 8),
    (WHEEL_SPEEDS_ADDR, 8),
    (EPS_STATUS_ADDR, 8),
    (ACCEL_GAS_22F_ADDR, 8),
    (WHEEL_BUTTONS_ADDR, 3),
    (LKAS_COMMAND_ADDR, 6),
    (AUTO_PARK_REQUEST_ADDR, 8),
    (LKAS_HUD_ADDR, 8),
    (STEERING_LEVERS_ADDR, 8),
    (BLIND_SPOT_WARNINGS_ADDR, 6),
    (LKAS_HEARTBIT_ADDR, 5),
    (SEATBELT_STATUS_ADDR, 8),
    (DOORS_ADDR, 8),
    (DASHBOARD_ADDR, 8),
    (TRACTION_BUTTON_ADDR, 8),
];

const PACIFICA_MESSAGES: &[(u32, u8)] = &[(0x101, 5), (0x102, 8), (0x10C, 8)];

const PACIFICA_HYBRID_MESSAGES: &[(u32, u8)] = &[
    (0x101, 5),
    (0x102, 8),
    (0x10C, 8),
    (0x10E, 8),
    (0x112, 2),
    (HYBRID_ECU_ADDR, 8),
];

const CHEROKEE_MESSAGES: &[(u32, u8)] = &[(0x100, 4), (0x107, 8), (0x117, 8)];

const CHRYSLER_300_MESSAGES: &[(u32, u8)] = &[(0x106, 8), (0x109, 8)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_resolves_from_its_own_table() -> Result<(), ConfigError> {
        for variant in ChryslerVariant::ALL {
            assert_eq!(ChryslerVariant::from_fingerprint(&variant.fingerprint())?, variant);
        }
        Ok(())
    }

    #[test]
    fn test_diagnostic_addresses_ignored() -> Result<(), ConfigError> {
        let mut observed = ChryslerVariant::Pacifica2020.fingerprint();
        observed.insert(0x7E8, 8);
        observed.insert(0x18DA_F1_10, 8);
        assert_eq!(
            ChryslerVariant::from_fingerprint(&observed)?,
            ChryslerVariant::Pacifica2020
        );
        Ok(())
    }

    #[test]
    fn test_unknown_message_is_unrecognized() {
        let mut observed = ChryslerVariant::Pacifica2020.fingerprint();
        observed.insert(0x7AA, 8);
        assert_eq!(
            ChryslerVariant::from_fingerprint(&observed),
            Err(ConfigError::UnrecognizedFingerprint { observed: observed.len() })
        );
    }

    #[test]
    fn test_length_mismatch_is_unrecognized() {
        let mut observed = ChryslerVariant::JeepCherokee2019.fingerprint();
        observed.insert(EPS_STATUS_ADDR, 4);
        assert!(matches!(
            ChryslerVariant::from_fingerprint(&observed),
            Err(ConfigError::UnrecognizedFingerprint { .. })
        ));
    }

    #[test]
    fn test_shared_messages_are_ambiguous() -> Result<(), String> {
        let observed: Fingerprint = CORE_MESSAGES.iter().copied().collect();
        let result = ChryslerVariant::from_fingerprint(&observed);
        let Err(ConfigError::AmbiguousFingerprint { candidates }) = result else {
            return Err(format!("expected ambiguity, got {result:?}"));
        };
        assert_eq!(candidates.len(), ChryslerVariant::ALL.len());
        Ok(())
    }

    #[test]
    fn test_from_str() -> Result<(), ConfigError> {
        assert_eq!(
            "PACIFICA_2019_HYBRID".parse::<ChryslerVariant>()?,
            ChryslerVariant::Pacifica2019Hybrid
        );
        assert_eq!(
            "chrysler_300_2018".parse::<ChryslerVariant>()?,
            ChryslerVariant::Chrysler300_2018
        );
        assert_eq!(
            "MUSTANG".parse::<ChryslerVariant>(),
            Err(ConfigError::UnsupportedVariant("MUSTANG".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_min_steer_speed_and_latch_release() {
        let hybrid_2019 = ChryslerVariant::Pacifica2019Hybrid.params();
        assert!((hybrid_2019.min_steer_speed - 17.5).abs() < 1e-6);
        assert_eq!(hybrid_2019.latch_release_speed, Some(14.5));

        let pacifica_2020 = ChryslerVariant::Pacifica2020.params();
        assert!((pacifica_2020.min_steer_speed - 17.5).abs() < 1e-6);
        assert_eq!(pacifica_2020.latch_release_speed, None);

        let hybrid_2017 = ChryslerVariant::Pacifica2017Hybrid.params();
        assert!((hybrid_2017.min_steer_speed - 3.8).abs() < 1e-6);
        assert_eq!(hybrid_2017.latch_release_speed, None);
    }

    #[test]
    fn test_geometry() {
        let jeep = ChryslerVariant::JeepCherokee2018.params();
        assert!((jeep.wheelbase - 2.91).abs() < 1e-6);
        assert!((jeep.steer_ratio - 12.7).abs() < 1e-6);
        assert!((jeep.center_to_front - 2.91 * 0.44).abs() < 1e-5);

        let c300 = ChryslerVariant::Chrysler300_2018.params();
        assert!((c300.wheelbase - 3.05308).abs() < 1e-6);
        assert!((c300.center_to_front - 3.089 * 0.44).abs() < 1e-5);
        assert!((c300.mass - 1964.0).abs() < 1e-3);
        assert!(matches!(c300.lateral_tuning, LateralTuning::Indi { .. }));

        let pacifica = ChryslerVariant::Pacifica2018.params();
        assert!((pacifica.mass - 2100.0).abs() < 1e-3);
        assert!(matches!(pacifica.lateral_tuning, LateralTuning::Pid { .. }));
    }

    #[test]
    fn test_variant_serializes_as_name() -> Result<(), serde_json::Error> {
        for variant in ChryslerVariant::ALL {
            let json = serde_json::to_string(&variant)?;
            assert_eq!(json, format!("\"{}\"", variant.name()));
            assert_eq!(serde_json::from_str::<ChryslerVariant>(&json)?, variant);
        }
        Ok(())
    }

    #[test]
    fn test_fingerprint_serde() -> Result<(), serde_json::Error> {
        let fp: Fingerprint = serde_json::from_str(r#"{"544": 8, "658": 6}"#)?;
        assert_eq!(fp.len(), 2);
        assert_eq!(fp.messages.get(&0x220), Some(&8));
        Ok(())
    }
}
