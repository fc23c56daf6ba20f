//! Capture session controller
//!
//! [`Sniffer`] owns the one possible capture session and serializes every
//! state transition under a single lock. `start` blocks the calling thread
//! inside the engine's capture loop for the session's entire lifetime;
//! `stop` and `is_active` are short calls intended for other threads.
//!
//! The lock is held only for state inspection and mutation, never across
//! the blocking loop, so `stop` and `is_active` stay responsive while a
//! capture is in progress. Handle teardown is the exclusive responsibility
//! of the thread running `start`: `stop` only signals cancellation, and the
//! handle is dropped after the loop returns, so no second thread can race a
//! close against the loop.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use sniffer_core::{validate_device, validate_packet_length, Error, Result};

use crate::engine::{CaptureConfig, Engine, EngineHandle, LoopBreaker, LoopExit};
use crate::pcap_engine::PcapEngine;
use crate::stats::{SnifferStats, StatsRecorder};

type BreakerOf<E> = <<E as Engine>::Handle as EngineHandle>::Breaker;

/// Shared state for an active session: present iff a thread is blocked in
/// the capture loop. Holds the cancel signal for that loop.
struct Session<B> {
    breaker: B,
}

/// Thread-safe controller for a single capture session.
///
/// At most one session is active per `Sniffer` at any time. All lifecycle
/// operations take `&self`, so the controller can be shared across threads
/// (typically via `Arc`): one thread calls [`Sniffer::start`] and blocks for
/// the session's duration, any other thread calls [`Sniffer::stop`] or
/// [`Sniffer::is_active`].
pub struct Sniffer<E: Engine = PcapEngine> {
    engine: E,
    config: CaptureConfig,
    session: Mutex<Option<Session<BreakerOf<E>>>>,
    stats: StatsRecorder,
}

impl Sniffer<PcapEngine> {
    /// Create a controller backed by the live pcap engine
    pub fn new() -> Self {
        Self::with_engine(PcapEngine::new())
    }
}

impl Default for Sniffer<PcapEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Sniffer<E> {
    /// Create a controller over a specific engine with default configuration
    pub fn with_engine(engine: E) -> Self {
        Self::with_config(engine, CaptureConfig::default())
    }

    /// Create a controller over a specific engine and configuration
    pub fn with_config(engine: E, config: CaptureConfig) -> Self {
        Self {
            engine,
            config,
            session: Mutex::new(None),
            stats: StatsRecorder::new(),
        }
    }

    /// Start capturing on `device`, delivering each accepted frame to
    /// `handler`.
    ///
    /// Blocks the calling thread until the session ends: via [`Sniffer::stop`]
    /// from another thread, exhaustion of the packet source, or an engine
    /// failure. The handler receives a view over the frame bytes, sliced to
    /// the actually captured length; the view is only valid for the duration
    /// of the call.
    ///
    /// Frames whose claimed length is zero or above
    /// [`sniffer_core::MAX_PACKET_SIZE`] are dropped without reaching the
    /// handler and counted in [`Sniffer::stats`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDevice`] before any state change if the device name
    ///   fails validation
    /// - [`Error::AlreadyRunning`] if a session is active (no side effects)
    /// - [`Error::Open`] if the engine cannot open the device
    /// - [`Error::Capture`] if the loop fails after starting
    pub fn start<F>(&self, device: &str, mut handler: F) -> Result<()>
    where
        F: FnMut(&[u8]),
    {
        validate_device(device)?;

        // Claim the session and open the engine under the lock, so a racing
        // stop() waits here and can never target a half-established handle.
        let mut handle = {
            let mut session = self.session.lock();
            if session.is_some() {
                return Err(Error::AlreadyRunning);
            }

            let handle = self.engine.open(device, &self.config)?;
            *session = Some(Session {
                breaker: handle.breaker(),
            });
            handle
        };

        info!(device, "capture session started");

        let stats = &self.stats;
        let exit = handle.dispatch(&mut |header, data| {
            let claimed = header.len as usize;
            if validate_packet_length(claimed).is_err() {
                warn!(
                    claimed,
                    captured = header.caplen,
                    "dropping frame with out-of-range length"
                );
                stats.record_dropped();
                return;
            }

            // Deliver the captured length, never the claimed length: the
            // header may report more bytes than the buffer holds.
            let caplen = (header.caplen as usize).min(data.len());
            if caplen < claimed {
                debug!(claimed, caplen, "frame truncated by engine");
            }

            stats.record_delivered(caplen);
            handler(&data[..caplen]);
        });

        let result = match exit {
            LoopExit::Finished | LoopExit::Cancelled => Ok(()),
            LoopExit::Error => Err(Error::capture(handle.last_error())),
        };

        // Teardown happens here and only here, on the loop thread, after the
        // loop has returned.
        {
            let mut session = self.session.lock();
            drop(handle);
            *session = None;
        }

        info!(device, ?exit, "capture session ended");
        result
    }

    /// Request that the active capture loop exit.
    ///
    /// Returns immediately after signalling; does not wait for the loop
    /// thread to observe the cancel and does not touch the engine handle.
    /// How quickly the signal takes effect depends on the engine's
    /// acquisition timeout.
    ///
    /// # Errors
    ///
    /// [`Error::NotRunning`] if no session is active.
    pub fn stop(&self) -> Result<()> {
        let session = self.session.lock();
        match session.as_ref() {
            None => Err(Error::NotRunning),
            Some(active) => {
                info!("capture stop requested");
                active.breaker.break_loop();
                Ok(())
            }
        }
    }

    /// Is a capture session currently active?
    pub fn is_active(&self) -> bool {
        self.session.lock().is_some()
    }

    /// Snapshot of delivery statistics for this controller
    pub fn stats(&self) -> SnifferStats {
        self.stats.snapshot()
    }

    /// Reset delivery statistics
    pub fn reset_stats(&self) {
        self.stats.reset();
    }
}
