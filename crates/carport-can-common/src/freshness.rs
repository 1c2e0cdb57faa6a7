//! Per-message freshness checks
//!
//! Every required message is declared with its nominal rate. A message is
//! stale once it has gone `tolerance_periods` periods without an update, or if
//! it was never received at all.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Missed periods tolerated before a message counts as stale.
pub const DEFAULT_TOLERANCE_PERIODS: f32 = 10.0;

/// A required message and its nominal rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MessageCheck<M> {
    pub id: M,
    pub frequency_hz: f32,
}

impl<M> MessageCheck<M> {
    pub const fn new(id: M, frequency_hz: f32) -> Self {
        Self { id, frequency_hz }
    }

    /// Longest acceptable gap between updates, nanoseconds.
    pub fn timeout_ns(&self, tolerance_periods: f32) -> u64 {
        if self.frequency_hz <= 0.0 {
            return u64::MAX;
        }
        let seconds = f64::from(tolerance_periods) / f64::from(self.frequency_hz);
        (seconds * 1e9) as u64
    }
}

/// Outcome of a freshness pass over one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FreshnessReport<M> {
    pub stale: Vec<M>,
}

impl<M> FreshnessReport<M> {
    pub fn is_valid(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Freshness checker for one bus.
#[derive(Debug, Clone)]
pub struct FreshnessChecker<M> {
    checks: Vec<MessageCheck<M>>,
    tolerance_periods: f32,
}

impl<M: Ord + Copy + std::fmt::Debug> FreshnessChecker<M> {
    pub fn new(checks: impl Into<Vec<MessageCheck<M>>>) -> Self {
        Self {
            checks: checks.into(),
            tolerance_periods: DEFAULT_TOLERANCE_PERIODS,
        }
    }

    pub fn with_tolerance(mut self, tolerance_periods: f32) -> Self {
        self.tolerance_periods = tolerance_periods;
        self
    }

    pub fn checks(&self) -> &[MessageCheck<M>] {
        &self.checks
    }

    pub fn tolerance_periods(&self) -> f32 {
        self.tolerance_periods
    }

    pub fn check(&self, frame: &crate::SignalFrame<M>) -> FreshnessReport<M> {
        let stale: Vec<M> = self
            .checks
            .iter()
            .filter(|check| self.is_stale(frame, check))
            .map(|check| check.id)
            .collect();

        if !stale.is_empty() {
            debug!(stale = ?stale, now_ns = frame.now_ns, "required messages stale");
        }

        FreshnessReport { stale }
    }

    pub fn is_valid(&self, frame: &crate::SignalFrame<M>) -> bool {
        self.check(frame).is_valid()
    }

    fn is_stale(&self, frame: &crate::SignalFrame<M>, check: &MessageCheck<M>) -> bool {
        match frame.sample(check.id) {
            None => true,
            Some(sample) => {
                let age = frame.now_ns.saturating_sub(sample.updated_ns);
                age > check.timeout_ns(self.tolerance_periods)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MessageSample, SignalFrame};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Msg {
        Fast,
        Slow,
    }

    fn checker() -> FreshnessChecker<Msg> {
        FreshnessChecker::new(vec![
            MessageCheck::new(Msg::Fast, 100.0),
            MessageCheck::new(Msg::Slow, 1.0),
        ])
    }

    #[test]
    fn test_timeout() {
        // 10 periods at 100 Hz
        assert_eq!(MessageCheck::new(Msg::Fast, 100.0).timeout_ns(10.0), 100_000_000);
        assert_eq!(MessageCheck::new(Msg::Slow, 0.0).timeout_ns(10.0), u64::MAX);
    }

    #[test]
    fn test_never_seen_is_stale() {
        let frame = SignalFrame::new(0).with_message(Msg::Fast, MessageSample::new(0));
        let report = checker().check(&frame);
        assert_eq!(report.stale, vec![Msg::Slow]);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_fresh_within_tolerance() {
        let now = 5_000_000_000;
        let frame = SignalFrame::new(now)
            .with_message(Msg::Fast, MessageSample::new(now - 90_000_000))
            .with_message(Msg::Slow, MessageSample::new(now - 9_000_000_000));
        assert!(checker().is_valid(&frame));
    }

    #[test]
    fn test_stale_past_tolerance() {
        let now = 5_000_000_000;
        let frame = SignalFrame::new(now)
            .with_message(Msg::Fast, MessageSample::new(now - 110_000_000))
            .with_message(Msg::Slow, MessageSample::new(now));
        assert_eq!(checker().check(&frame).stale, vec![Msg::Fast]);
    }

    #[test]
    fn test_custom_tolerance() {
        let now = 1_000_000_000;
        let frame = SignalFrame::new(now)
            .with_message(Msg::Fast, MessageSample::new(now - 30_000_000))
            .with_message(Msg::Slow, MessageSample::new(now));
        assert!(checker().is_valid(&frame));
        assert!(!checker().with_tolerance(2.0).is_valid(&frame));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let frame = SignalFrame::new(0)
            .with_message(Msg::Fast, MessageSample::new(50))
            .with_message(Msg::Slow, MessageSample::new(50));
        assert!(checker().is_valid(&frame));
    }
}
