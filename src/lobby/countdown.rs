//! Display-only question countdown shown while playing.

use std::time::Duration;

use tracing::{debug, instrument};

/// Seconds on the clock for each question when nothing else is configured.
pub const DEFAULT_QUESTION_SECONDS: u64 = 30;

/// Counts whole seconds down to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u64,
    carry: Duration,
}

impl Countdown {
    /// Starts a countdown at `seconds`.
    #[instrument]
    pub fn new(seconds: u64) -> Self {
        Self {
            remaining: seconds,
            carry: Duration::ZERO,
        }
    }

    /// Seconds left on the clock.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// True once the clock has reached zero.
    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    /// Text for the timer widget, e.g. `"30s"`.
    pub fn label(&self) -> String {
        format!("{}s", self.remaining)
    }

    /// Advances the clock. Partial seconds accumulate across calls.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.expired() {
            return;
        }
        self.carry += elapsed;
        let whole = self.carry.as_secs();
        if whole == 0 {
            return;
        }
        self.carry -= Duration::from_secs(whole);
        self.remaining = self.remaining.saturating_sub(whole);
        if self.expired() {
            debug!("Countdown expired");
            self.carry = Duration::ZERO;
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION_SECONDS)
    }
}
