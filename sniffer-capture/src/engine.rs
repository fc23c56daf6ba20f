//! Capture engine abstraction
//!
//! The controller treats frame acquisition as a black box behind these
//! traits: [`Engine::open`] produces a handle, [`EngineHandle::dispatch`] is
//! the blocking capture loop, and [`LoopBreaker`] is the asynchronous,
//! thread-safe cancel signal a different thread can hold while the loop is
//! running. Closing the engine is `Drop` — because the handle is consumed on
//! the thread that runs the loop, teardown can only ever happen there.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sniffer_core::{PacketHeader, Result};

/// Default snapshot length (maximum bytes per packet)
pub const DEFAULT_SNAPLEN: i32 = 65535;

/// Default acquisition timeout (milliseconds)
pub const DEFAULT_TIMEOUT_MS: i32 = 1000;

/// Configuration for opening a capture engine
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Maximum bytes to capture per packet
    pub snaplen: i32,
    /// Acquisition timeout in milliseconds; also bounds how quickly a
    /// cancel request takes effect
    pub timeout_ms: i32,
    /// Enable promiscuous mode
    pub promiscuous: bool,
    /// Enable immediate mode (deliver packets immediately)
    pub immediate_mode: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            snaplen: DEFAULT_SNAPLEN,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            promiscuous: true,
            immediate_mode: true,
        }
    }
}

/// Why the capture loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The engine ran out of packets (end of a finite source)
    Finished,
    /// A cancel signal was observed
    Cancelled,
    /// The loop failed internally; details via `last_error`
    Error,
}

/// Asynchronous cancel signal for a running capture loop.
///
/// Cheap to clone; safe to trigger from any thread while another thread is
/// blocked inside `dispatch`. Triggering is idempotent.
pub trait LoopBreaker: Clone + Send + Sync {
    /// Request that the capture loop exit at its next opportunity
    fn break_loop(&self);
}

/// An open capture session on a device.
///
/// Dropping the handle closes the underlying engine.
pub trait EngineHandle: Send {
    /// Cancel signal type paired with this handle
    type Breaker: LoopBreaker;

    /// Get a cancel signal usable by other threads
    fn breaker(&self) -> Self::Breaker;

    /// Run the blocking capture loop, invoking `on_packet` once per frame.
    ///
    /// Returns only when the loop is cancelled, the source is exhausted, or
    /// the engine fails.
    fn dispatch(&mut self, on_packet: &mut dyn FnMut(&PacketHeader, &[u8])) -> LoopExit;

    /// Human-readable description of the last loop failure
    fn last_error(&self) -> String;
}

/// A capture engine that can open sessions on named devices
pub trait Engine {
    /// Handle type produced by a successful open
    type Handle: EngineHandle;

    /// Open the device for capture
    fn open(&self, device: &str, config: &CaptureConfig) -> Result<Self::Handle>;
}

/// Shared-flag cancel signal.
///
/// The loop polls [`FlagBreaker::is_set`] between acquisition attempts; the
/// engine's read timeout guarantees the flag is observed even on a silent
/// interface.
#[derive(Debug, Clone, Default)]
pub struct FlagBreaker(Arc<AtomicBool>);

impl FlagBreaker {
    /// Create an unset breaker
    pub fn new() -> Self {
        Self::default()
    }

    /// Has a cancel been requested?
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl LoopBreaker for FlagBreaker {
    fn break_loop(&self) {
        self.0.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_capture_config_default() {
        let config = CaptureConfig::default();
        assert_eq!(config.snaplen, DEFAULT_SNAPLEN);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.promiscuous);
        assert!(config.immediate_mode);
    }

    #[test]
    fn test_flag_breaker_starts_unset() {
        let breaker = FlagBreaker::new();
        assert!(!breaker.is_set());
    }

    #[test]
    fn test_flag_breaker_cross_thread() {
        let breaker = FlagBreaker::new();
        let remote = breaker.clone();

        let handle = thread::spawn(move || {
            remote.break_loop();
        });
        handle.join().unwrap();

        assert!(breaker.is_set());

        // Idempotent
        breaker.break_loop();
        assert!(breaker.is_set());
    }
}
