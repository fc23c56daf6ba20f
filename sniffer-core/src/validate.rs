//! Input validation gates
//!
//! Pure functions applied before any capture state changes or engine calls.
//! Safe to call from any thread without synchronization.

use crate::error::{Error, Result};

/// Maximum packet length accepted for delivery (64 KiB)
pub const MAX_PACKET_SIZE: usize = 64 * 1024;

/// Maximum device name length in bytes
pub const MAX_DEVICE_NAME_LEN: usize = 64;

/// Validate a capture device name.
///
/// Accepts 1 to 64 characters from `[A-Za-z0-9._-]`. The restricted charset
/// keeps a device name from being interpretable as anything other than an
/// interface token if it is ever handed to a shell or an opaque API.
pub fn validate_device(name: &str) -> Result<()> {
    if name.is_empty() || name.len() > MAX_DEVICE_NAME_LEN {
        return Err(Error::InvalidDevice(name.to_string()));
    }

    let allowed = |c: u8| c.is_ascii_alphanumeric() || matches!(c, b'.' | b'-' | b'_');
    if !name.bytes().all(allowed) {
        return Err(Error::InvalidDevice(name.to_string()));
    }

    Ok(())
}

/// Validate a per-packet length against the accepted range.
///
/// Applied per event in the frame-delivery path, not at session start.
pub fn validate_packet_length(len: usize) -> Result<()> {
    if len == 0 || len > MAX_PACKET_SIZE {
        return Err(Error::InvalidLength(len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_device_names() {
        assert!(validate_device("en0").is_ok());
        assert!(validate_device("eth0").is_ok());
        assert!(validate_device("wlan0").is_ok());
        assert!(validate_device("lo").is_ok());
        assert!(validate_device("veth-a1_b2.3").is_ok());
        assert!(validate_device(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_empty_device_rejected() {
        assert!(matches!(
            validate_device(""),
            Err(Error::InvalidDevice(_))
        ));
    }

    #[test]
    fn test_overlong_device_rejected() {
        let name = "a".repeat(65);
        assert!(matches!(
            validate_device(&name),
            Err(Error::InvalidDevice(_))
        ));
    }

    #[test]
    fn test_injection_attempt_rejected() {
        assert!(validate_device("eth0; rm -rf").is_err());
        assert!(validate_device("eth0 ").is_err());
        assert!(validate_device("eth0|cat").is_err());
        assert!(validate_device("eth0\n").is_err());
        assert!(validate_device("eth0$HOME").is_err());
    }

    #[test]
    fn test_non_ascii_device_rejected() {
        assert!(validate_device("ethø").is_err());
    }

    #[test]
    fn test_packet_length_bounds() {
        assert!(validate_packet_length(0).is_err());
        assert!(validate_packet_length(1).is_ok());
        assert!(validate_packet_length(1500).is_ok());
        assert!(validate_packet_length(MAX_PACKET_SIZE).is_ok());
        assert!(matches!(
            validate_packet_length(MAX_PACKET_SIZE + 1),
            Err(Error::InvalidLength(_))
        ));
    }
}
