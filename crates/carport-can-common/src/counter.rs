//! Rolling counter checks
//!
//! A sender that keeps transmitting with a counter that does not step by one
//! is as untrustworthy as one that went quiet. Each new message instance
//! (a sample with a new `updated_ns`) is compared with the last one: a wrong
//! step adds a failure, a correct step removes one. The message counts as
//! faulted while failures sit at [`MAX_BAD_COUNTER`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::nibble;

/// Failures at which a counter is considered faulted.
pub const MAX_BAD_COUNTER: u8 = 5;

/// Counter history of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterCheck {
    last: Option<u8>,
    last_updated_ns: Option<u64>,
    failures: u8,
}

impl CounterCheck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. `None` means the message has not been heard
    /// and leaves the history alone, as does a sample already seen.
    pub fn observe(&mut self, counter: Option<u8>, updated_ns: u64) {
        let Some(counter) = counter else {
            return;
        };
        if self.last.is_some() && self.last_updated_ns == Some(updated_ns) {
            return;
        }

        if let Some(last) = self.last {
            if nibble(u32::from(last) + 1) == counter {
                self.failures = self.failures.saturating_sub(1);
            } else {
                self.failures = self.failures.saturating_add(1).min(MAX_BAD_COUNTER);
                debug!(last, counter, failures = self.failures, "counter mismatch");
            }
        }

        self.last = Some(counter);
        self.last_updated_ns = Some(updated_ns);
    }

    pub fn failures(&self) -> u8 {
        self.failures
    }

    pub fn is_faulted(&self) -> bool {
        self.failures >= MAX_BAD_COUNTER
    }
}
