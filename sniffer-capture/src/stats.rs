//! Delivery statistics

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Snapshot of delivery statistics for a controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnifferStats {
    /// Frames delivered to the handler
    pub delivered: u64,
    /// Frames dropped by the length gate
    pub dropped: u64,
    /// Total bytes delivered to the handler
    pub bytes: u64,
}

/// Thread-safe statistics accumulator shared between the loop thread and
/// readers on other threads
#[derive(Debug, Clone, Default)]
pub struct StatsRecorder {
    delivered: Arc<AtomicU64>,
    dropped: Arc<AtomicU64>,
    bytes: Arc<AtomicU64>,
}

impl StatsRecorder {
    /// Create a zeroed recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame delivered to the handler
    pub fn record_delivered(&self, len: usize) {
        self.delivered.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(len as u64, Ordering::Relaxed);
    }

    /// Record a frame dropped by the length gate
    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a point-in-time snapshot
    pub fn snapshot(&self) -> SnifferStats {
        SnifferStats {
            delivered: self.delivered.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            bytes: self.bytes.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.delivered.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
        self.bytes.store(0, Ordering::Relaxed);
    }
}
