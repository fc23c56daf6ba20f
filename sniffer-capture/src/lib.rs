//! Thread-safe capture session control for Sniffer-RS
//!
//! This crate wraps a blocking, callback-driven capture engine (pcap by
//! default) in a small lifecycle API with a strict concurrency discipline:
//!
//! - **One session**: at most one capture session per [`Sniffer`], guarded
//!   by a single lock.
//! - **Blocking start**: [`Sniffer::start`] validates its inputs, claims the
//!   session, then blocks inside the capture loop for the session's
//!   lifetime, invoking the handler once per accepted frame.
//! - **Non-blocking stop**: [`Sniffer::stop`] signals cancellation from any
//!   other thread and returns immediately; engine teardown stays with the
//!   thread running the loop, so the two can never race a close.
//! - **Input gates**: device names and per-frame lengths are validated
//!   before any state change or delivery; out-of-range frames are dropped
//!   and counted, never surfaced as errors.
//!
//! ## Example
//!
//! ```no_run
//! use sniffer_capture::Sniffer;
//! use std::sync::Arc;
//! use std::thread;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sniffer = Arc::new(Sniffer::new());
//!
//! // start() blocks for the session's lifetime; run it on its own thread
//! let worker = {
//!     let sniffer = Arc::clone(&sniffer);
//!     thread::spawn(move || {
//!         sniffer.start("eth0", |frame| {
//!             println!("Got frame: {} bytes", frame.len());
//!         })
//!     })
//! };
//!
//! // Later, from any other thread
//! sniffer.stop()?;
//! worker.join().unwrap()?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod interface;
pub mod pcap_engine;
pub mod sniffer;
pub mod stats;

// Re-export main types
pub use engine::{CaptureConfig, Engine, EngineHandle, FlagBreaker, LoopBreaker, LoopExit};
pub use interface::{default_device, get_device, list_devices, DeviceInfo};
pub use pcap_engine::PcapEngine;
pub use sniffer::Sniffer;
pub use stats::{SnifferStats, StatsRecorder};
