//! Outgoing frame descriptors

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical bus a frame is sent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bus {
    /// Powertrain bus (bus 0).
    Powertrain,
    /// Chassis bus (bus 1).
    Chassis,
    /// Forward camera bus (bus 2).
    Camera,
}

impl Bus {
    pub fn number(&self) -> u8 {
        match self {
            Self::Powertrain => 0,
            Self::Chassis => 1,
            Self::Camera => 2,
        }
    }
}

impl fmt::Display for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One frame to be packed and sent by the transport: message id, bus and the
/// full set of signal values, ordered by signal name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameDescriptor<M> {
    pub id: M,
    pub bus: Bus,
    pub signals: BTreeMap<&'static str, f32>,
}

impl<M> FrameDescriptor<M> {
    pub fn new(id: M, bus: Bus) -> Self {
        Self {
            id,
            bus,
            signals: BTreeMap::new(),
        }
    }

    pub fn with_signal(mut self, name: &'static str, value: f32) -> Self {
        self.signals.insert(name, value);
        self
    }

    pub fn signal(&self, name: &str) -> Option<f32> {
        self.signals.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_numbers() {
        assert_eq!(Bus::Powertrain.number(), 0);
        assert_eq!(Bus::Camera.to_string(), "2");
    }

    #[test]
    fn test_descriptor_signals_are_ordered() {
        let frame = FrameDescriptor::new(0x292u32, Bus::Powertrain)
            .with_signal("Z", 1.0)
            .with_signal("A", 2.0);
        let names: Vec<_> = frame.signals.keys().copied().collect();
        assert_eq!(names, vec!["A", "Z"]);
        assert_eq!(frame.signal("A"), Some(2.0));
        assert_eq!(frame.signal("B"), None);
    }

    #[test]
    fn test_descriptor_serializes() -> Result<(), serde_json::Error> {
        let frame = FrameDescriptor::new("LKAS_COMMAND", Bus::Powertrain).with_signal("COUNTER", 3.0);
        let json = serde_json::to_value(&frame)?;
        assert_eq!(json["bus"], "powertrain");
        assert_eq!(json["signals"]["COUNTER"], 3.0);
        Ok(())
    }
}
