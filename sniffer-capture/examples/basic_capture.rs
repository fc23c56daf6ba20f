//! Example: basic live capture
//!
//! Captures on the default device for up to 10 seconds or 20 packets.
//! Note: Requires root/administrator privileges to run.
//!
//! Run with: sudo cargo run --example basic_capture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use sniffer_capture::{default_device, Sniffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let device = default_device()?;
    println!(
        "Capturing on: {} ({})",
        device.name,
        device.description.as_deref().unwrap_or("no description")
    );

    let sniffer = Arc::new(Sniffer::new());
    let count = Arc::new(AtomicUsize::new(0));

    // start() blocks for the session's lifetime, so it gets its own thread
    let worker = {
        let sniffer = Arc::clone(&sniffer);
        let count = Arc::clone(&count);
        let name = device.name.clone();
        thread::spawn(move || {
            sniffer.start(&name, move |frame| {
                let n = count.fetch_add(1, Ordering::SeqCst) + 1;
                println!("[{}] Packet: {} bytes", n, frame.len());
            })
        })
    };

    // Capture for 10 seconds or 20 packets
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(10) {
        thread::sleep(Duration::from_millis(100));
        if count.load(Ordering::SeqCst) >= 20 {
            break;
        }
    }

    if sniffer.is_active() {
        sniffer.stop()?;
    }
    worker.join().expect("capture thread panicked")?;

    let stats = sniffer.stats();
    println!("\n=== Final Statistics ===");
    println!("Delivered: {} packets ({} bytes)", stats.delivered, stats.bytes);
    println!("Dropped (length gate): {}", stats.dropped);

    Ok(())
}
