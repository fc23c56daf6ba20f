//! pcap-backed capture engine

use pcap::{Active, Capture, Device};
use tracing::{debug, error};

use sniffer_core::{Error, PacketHeader, Result};

use crate::engine::{CaptureConfig, Engine, EngineHandle, FlagBreaker, LoopExit};

/// Live capture engine over libpcap
#[derive(Debug, Clone, Copy, Default)]
pub struct PcapEngine;

impl PcapEngine {
    /// Create a pcap engine
    pub fn new() -> Self {
        Self
    }
}

/// An open pcap capture on a device
pub struct PcapHandle {
    capture: Capture<Active>,
    stop: FlagBreaker,
    last_error: String,
}

impl Engine for PcapEngine {
    type Handle = PcapHandle;

    fn open(&self, device: &str, config: &CaptureConfig) -> Result<PcapHandle> {
        debug!(device, "opening pcap capture");

        let capture = Capture::from_device(Device::from(device))
            .map_err(|e| Error::open(format!("{device}: {e}")))?
            .promisc(config.promiscuous)
            .snaplen(config.snaplen)
            .timeout(config.timeout_ms)
            .immediate_mode(config.immediate_mode)
            .open()
            .map_err(|e| Error::open(format!("{device}: {e}")))?;

        Ok(PcapHandle {
            capture,
            stop: FlagBreaker::new(),
            last_error: String::new(),
        })
    }
}

impl EngineHandle for PcapHandle {
    type Breaker = FlagBreaker;

    fn breaker(&self) -> FlagBreaker {
        self.stop.clone()
    }

    fn dispatch(&mut self, on_packet: &mut dyn FnMut(&PacketHeader, &[u8])) -> LoopExit {
        loop {
            if self.stop.is_set() {
                debug!("capture loop observed cancel signal");
                return LoopExit::Cancelled;
            }

            match self.capture.next_packet() {
                Ok(packet) => {
                    let header = PacketHeader::new(packet.header.len, packet.header.caplen);
                    on_packet(&header, packet.data);
                }
                // The read timeout doubles as the cancel poll interval
                Err(pcap::Error::TimeoutExpired) => continue,
                Err(pcap::Error::NoMorePackets) => return LoopExit::Finished,
                Err(e) => {
                    error!("packet capture error: {e}");
                    self.last_error = e.to_string();
                    return LoopExit::Error;
                }
            }
        }
    }

    fn last_error(&self) -> String {
        self.last_error.clone()
    }
}
