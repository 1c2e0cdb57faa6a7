//! Session configuration
//!
//! Read once when a session starts and never re-read: preferences changed
//! mid-drive take effect on the next session.

use std::path::Path;
use std::str::FromStr;

use can_chrysler_protocol::{ChryslerVariant, EncoderConfig};
use can_chrysler_protocol::encoder::{DEFAULT_MIN_ACC_SPEED_MPH, DEFAULT_PAUSE_FRAMES};
use carport_can_common::DEFAULT_TOLERANCE_PERIODS;
use carport_errors::{ConfigError, Result, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Driver-facing toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverPreferences {
    /// `false` never puts steering torque on the bus.
    pub lateral_control: bool,
    /// Hold zero torque while a turn signal is on.
    pub pause_steering_on_blinker: bool,
}

impl Default for DriverPreferences {
    fn default() -> Self {
        Self {
            lateral_control: true,
            pause_steering_on_blinker: false,
        }
    }
}

impl DriverPreferences {
    /// Whether steering torque may be applied for the given blinker state.
    pub fn allows_steering(&self, blinker_on: bool) -> bool {
        self.lateral_control && !(self.pause_steering_on_blinker && blinker_on)
    }
}

/// Configuration of one interface session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Variant name; when set it takes precedence over fingerprinting.
    pub variant: Option<String>,
    /// Refresh periods a required message may miss before it counts as stale.
    pub tolerance_periods: f32,
    /// Accepted cycles to hold off synthesized buttons after a driver press.
    pub pause_frames: u32,
    /// Set speed (mph) at or below which no decrease press is sent.
    pub min_acc_speed_mph: f32,
    pub preferences: DriverPreferences,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        Self {
            variant: None,
            tolerance_periods: DEFAULT_TOLERANCE_PERIODS,
            pause_frames: DEFAULT_PAUSE_FRAMES,
            min_acc_speed_mph: DEFAULT_MIN_ACC_SPEED_MPH,
            preferences: DriverPreferences::default(),
        }
    }
}

impl InterfaceConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(source).map_err(|e| ConfigError::parse("YAML", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(source).map_err(|e| ConfigError::parse("JSON", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file. `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        debug!(path = %path.display(), is_json, "loading interface configuration");

        let parsed: std::result::Result<Self, String> = if is_json {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        };
        let config = parsed.map_err(|reason| ConfigError::parse(path.display().to_string(), reason))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value once, before the session starts.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance_periods.is_finite() {
            return Err(ValidationError::not_finite("tolerance_periods").into());
        }
        if !(1.0..=1000.0).contains(&self.tolerance_periods) {
            return Err(ValidationError::out_of_range(
                "tolerance_periods",
                self.tolerance_periods,
                1.0,
                1000.0,
            )
            .into());
        }
        if self.pause_frames > 60_000 {
            return Err(
                ValidationError::out_of_range("pause_frames", self.pause_frames, 0, 60_000).into(),
            );
        }
        if !self.min_acc_speed_mph.is_finite() {
            return Err(ValidationError::not_finite("min_acc_speed_mph").into());
        }
        if !(0.0..=100.0).contains(&self.min_acc_speed_mph) {
            return Err(ValidationError::out_of_range(
                "min_acc_speed_mph",
                self.min_acc_speed_mph,
                0.0,
                100.0,
            )
            .into());
        }
        if let Some(name) = &self.variant {
            ChryslerVariant::from_str(name)?;
        }
        Ok(())
    }

    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            pause_frames: self.pause_frames,
            min_acc_speed_mph: self.min_acc_speed_mph,
        }
    }
}
