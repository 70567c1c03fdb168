//! Coalescing of rapid resize notifications.
//!
//! Container-resize events arrive in bursts while the user drags;
//! relayout should run once per burst, after a quiet period. Data
//! changes are never debounced — layout correctness must reflect the
//! latest data immediately, so those recompute directly.
//!
//! The debouncer is pure over `Instant`s the caller supplies: no
//! timers, no threads. The caller signals each notification and polls
//! on its own cadence (typically its render tick).

use std::time::{Duration, Instant};

/// Coalesces a burst of signals into one firing after a quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    last_signal: Option<Instant>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_signal: None,
        }
    }

    /// Records a notification at `now`. Restarts the quiet period.
    pub fn signal(&mut self, now: Instant) {
        self.last_signal = Some(now);
    }

    /// Whether a signal is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.last_signal.is_some()
    }

    /// Fires if the quiet period has elapsed since the last signal.
    ///
    /// Returns `true` at most once per burst; firing clears the
    /// pending state.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_signal {
            Some(last) if now.saturating_duration_since(last) >= self.delay => {
                self.last_signal = None;
                true
            }
            _ => false,
        }
    }
}
