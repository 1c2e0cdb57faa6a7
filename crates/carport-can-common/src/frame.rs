//! Inbound signal frames

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Latest unpacked values of one message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageSample {
    pub signals: BTreeMap<String, f32>,
    /// Monotonic receive time of the last update, nanoseconds.
    pub updated_ns: u64,
}

impl MessageSample {
    pub fn new(updated_ns: u64) -> Self {
        Self {
            signals: BTreeMap::new(),
            updated_ns,
        }
    }

    pub fn with_signal(mut self, name: impl Into<String>, value: f32) -> Self {
        self.signals.insert(name.into(), value);
        self
    }

    pub fn signal(&self, name: &str) -> Option<f32> {
        self.signals.get(name).copied()
    }
}

/// The signal view of the bus at one control cycle, keyed by message id.
///
/// A message that was never received is simply absent. Signals that are
/// absent read as `0.0` through [`SignalFrame::value`], matching what a
/// parser reports before the first frame arrives.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalFrame<M> {
    /// Monotonic time of this cycle, nanoseconds.
    pub now_ns: u64,
    pub messages: BTreeMap<M, MessageSample>,
}

impl<M: Ord + Copy> SignalFrame<M> {
    pub fn new(now_ns: u64) -> Self {
        Self {
            now_ns,
            messages: BTreeMap::new(),
        }
    }

    pub fn with_message(mut self, id: M, sample: MessageSample) -> Self {
        self.messages.insert(id, sample);
        self
    }

    pub fn insert(&mut self, id: M, sample: MessageSample) {
        self.messages.insert(id, sample);
    }

    pub fn sample(&self, id: M) -> Option<&MessageSample> {
        self.messages.get(&id)
    }

    pub fn contains(&self, id: M) -> bool {
        self.messages.contains_key(&id)
    }

    /// Signal value if the message and the signal were both received.
    pub fn signal(&self, id: M, name: &str) -> Option<f32> {
        self.sample(id).and_then(|sample| sample.signal(name))
    }

    /// Signal value, `0.0` when unknown.
    pub fn value(&self, id: M, name: &str) -> f32 {
        self.signal(id, name).unwrap_or(0.0)
    }

    /// Signal read as a flag: any non-zero value is set.
    pub fn flag(&self, id: M, name: &str) -> bool {
        self.value(id, name).abs() > f32::EPSILON
    }

    /// Signal read as a small unsigned enum or counter.
    ///
    /// Negative and non-finite values read as `0`.
    pub fn raw(&self, id: M, name: &str) -> u32 {
        let value = self.value(id, name);
        if value.is_finite() && value > 0.0 {
            value.round() as u32
        } else {
            0
        }
    }
}
