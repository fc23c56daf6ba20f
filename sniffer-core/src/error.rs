//! Error types for Sniffer-RS

use thiserror::Error;

/// Result type alias for sniffer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Sniffer-RS
#[derive(Error, Debug)]
pub enum Error {
    /// Network I/O error
    #[error("Network I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Device name failed validation (empty, too long, or bad characters)
    #[error("Invalid device name: '{0}'")]
    InvalidDevice(String),

    /// Packet length outside the accepted range
    #[error("Packet length {0} out of range")]
    InvalidLength(usize),

    /// A capture session is already active
    #[error("Capture already running")]
    AlreadyRunning,

    /// No capture session is active
    #[error("Capture not running")]
    NotRunning,

    /// The capture engine could not be opened on the device
    #[error("Failed to open capture device: {0}")]
    Open(String),

    /// The capture loop failed internally
    #[error("Packet capture error: {0}")]
    Capture(String),

    /// Interface enumeration error
    #[error("Interface error: {0}")]
    Interface(String),
}

impl Error {
    /// Create an open error with a custom message
    pub fn open<S: Into<String>>(msg: S) -> Self {
        Error::Open(msg.into())
    }

    /// Create a capture error with a custom message
    pub fn capture<S: Into<String>>(msg: S) -> Self {
        Error::Capture(msg.into())
    }

    /// Create an interface error with a custom message
    pub fn interface<S: Into<String>>(msg: S) -> Self {
        Error::Interface(msg.into())
    }
}
