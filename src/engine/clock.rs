//! Wall-clock driver for the session countdown
//!
//! The core is single-threaded by contract; the one asynchronous input
//! is time. `Clock` runs a dedicated ticker thread that calls
//! `Session::on_tick` once per period while holding the shared lock, so
//! timer ticks and UI-thread `select`/`shuffle` calls never interleave
//! on session state. Events go out over a channel; the thread stops
//! after delivering expiry, or when the clock is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::warn;

use crate::core::Session;

/// Tick period for real gameplay
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Events emitted by the ticker thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    /// One second elapsed
    Tick { remaining: u32 },
    /// The time budget ran out; sent exactly once, then the thread stops
    Expired,
}

/// Handle to the ticker thread. Dropping it stops the thread.
#[derive(Debug)]
pub struct Clock {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Clock {
    /// Spawn a ticker over a shared session.
    ///
    /// `period` is injectable so tests can run the clock fast; gameplay
    /// uses [`TICK_PERIOD`]. A level advance simply refills the budget
    /// under the same thread; only expiry (or drop) stops it.
    pub fn spawn(
        session: Arc<Mutex<Session>>,
        period: Duration,
        events: Sender<ClockEvent>,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::spawn(move || loop {
            thread::sleep(period);
            if thread_stop.load(Ordering::Relaxed) {
                break;
            }

            let outcome = match session.lock() {
                Ok(mut session) => session.on_tick(),
                Err(_) => {
                    warn!("session lock poisoned, stopping clock");
                    break;
                }
            };

            if events
                .send(ClockEvent::Tick {
                    remaining: outcome.time_remaining,
                })
                .is_err()
            {
                // Receiver gone; nobody is listening anymore.
                break;
            }

            if outcome.expired {
                let _ = events.send(ClockEvent::Expired);
                break;
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the ticker and wait for the thread to finish
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Clock {
    fn drop(&mut self) {
        self.shutdown();
    }
}
