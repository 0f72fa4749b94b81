//! Countdown timer - the per-level time budget
//!
//! The engine has no clock of its own; a driver (UI event loop or the
//! `engine::clock` ticker thread) calls `tick` once per second. Expiry is
//! the game-over condition and is reported exactly once.

use crate::types::TickOutcome;

/// Seconds-granularity countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    expired_reported: bool,
}

impl Countdown {
    /// Arm the countdown with a fresh budget
    pub fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            expired_reported: false,
        }
    }

    /// Re-arm with a new budget (level advance); clears any expiry state
    pub fn reset(&mut self, secs: u32) {
        self.remaining = secs;
        self.expired_reported = false;
    }

    /// Advance one second.
    ///
    /// After expiry has been reported once, further ticks are inert:
    /// time stays at zero and `expired` is never raised again.
    pub fn tick(&mut self) -> TickOutcome {
        if self.expired_reported {
            return TickOutcome {
                time_remaining: 0,
                expired: false,
            };
        }

        self.remaining = self.remaining.saturating_sub(1);
        let expired = self.remaining == 0;
        if expired {
            self.expired_reported = true;
        }

        TickOutcome {
            time_remaining: self.remaining,
            expired,
        }
    }

    /// Seconds left on the clock
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the budget has run out
    pub fn is_expired(&self) -> bool {
        self.expired_reported
    }
}
