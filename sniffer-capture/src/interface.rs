//! Capture device enumeration

use pcap::Device;
use std::net::IpAddr;

use sniffer_core::{Error, Result};

/// Information about a capture-capable device
#[derive(Debug, Clone)]
pub struct DeviceInfo {
    /// Device name (e.g., "eth0", "en0")
    pub name: String,
    /// Human-readable description, when the platform provides one
    pub description: Option<String>,
    /// Addresses assigned to the device
    pub addresses: Vec<IpAddr>,
    /// Whether the device is up
    pub is_up: bool,
    /// Whether the device is a loopback
    pub is_loopback: bool,
}

impl From<&Device> for DeviceInfo {
    fn from(device: &Device) -> Self {
        DeviceInfo {
            name: device.name.clone(),
            description: device.desc.clone(),
            addresses: device.addresses.iter().map(|a| a.addr).collect(),
            is_up: device.flags.is_up(),
            is_loopback: device.flags.is_loopback(),
        }
    }
}

impl DeviceInfo {
    /// Check if the device is suitable for live capture
    pub fn is_capture_capable(&self) -> bool {
        self.is_up && !self.is_loopback
    }
}

/// List all devices the capture engine can see
pub fn list_devices() -> Result<Vec<DeviceInfo>> {
    let devices = Device::list().map_err(|e| Error::interface(e.to_string()))?;

    if devices.is_empty() {
        return Err(Error::interface(
            "No capture devices found. Are you running with sufficient privileges?",
        ));
    }

    Ok(devices.iter().map(DeviceInfo::from).collect())
}

/// Get information about a specific device by name
pub fn get_device(name: &str) -> Result<DeviceInfo> {
    let devices = Device::list().map_err(|e| Error::interface(e.to_string()))?;

    devices
        .iter()
        .find(|d| d.name == name)
        .map(DeviceInfo::from)
        .ok_or_else(|| Error::interface(format!("Device '{name}' not found")))
}

/// Find the default capture device (first up, non-loopback device)
pub fn default_device() -> Result<DeviceInfo> {
    list_devices()?
        .into_iter()
        .find(DeviceInfo::is_capture_capable)
        .ok_or_else(|| Error::interface("No suitable default device found"))
}
