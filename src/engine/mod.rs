//! Engine module - real-time plumbing around the pure core
//!
//! Owns the concurrency story: one lock around the session, one ticker
//! thread producing countdown events. UI input handling stays on the
//! caller's side of the lock.

pub mod clock;

pub use clock::{Clock, ClockEvent, TICK_PERIOD};
