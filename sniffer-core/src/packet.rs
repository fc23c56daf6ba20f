//! Packet header types

use std::time::SystemTime;

/// Per-frame header reported by the capture engine.
///
/// `len` is the length the frame claims on the wire; `caplen` is the number
/// of bytes actually captured into the buffer. Only `caplen` is safe to
/// index the frame buffer with — a misbehaving upstream can claim a `len`
/// larger than what was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    /// When the frame was captured
    pub timestamp: SystemTime,
    /// Claimed on-the-wire length
    pub len: u32,
    /// Actually captured length
    pub caplen: u32,
}

impl PacketHeader {
    /// Create a header stamped with the current time
    pub fn new(len: u32, caplen: u32) -> Self {
        Self {
            timestamp: SystemTime::now(),
            len,
            caplen,
        }
    }

    /// True when fewer bytes were captured than the frame claims
    pub fn is_truncated(&self) -> bool {
        self.caplen < self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_detection() {
        assert!(PacketHeader::new(1500, 64).is_truncated());
        assert!(!PacketHeader::new(64, 64).is_truncated());
    }
}
