//! Sniffer-RS Core Library
//!
//! This crate provides the fundamental types, input validation, and error
//! handling shared by the sniffer-rs capture crates. It is a leaf crate with
//! no capture-engine dependency, so validation can be unit tested anywhere.

pub mod error;
pub mod packet;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use packet::PacketHeader;
pub use validate::{
    validate_device, validate_packet_length, MAX_DEVICE_NAME_LEN, MAX_PACKET_SIZE,
};
