//! Replay a captured display byte log through the decode pipeline

use chrono::Local;
use tokio::sync::mpsc;

use n3link::DisplayAdapter;

/// Captured from a Neptune 3 Pro session: home all, nozzle temp 210,
/// a stray unmapped button and some line noise in between.
const CAPTURE: &[u8] = &[
    // noise before the first frame
    0x00, 0x13, 0x37, //
    // AXIS_PAGE_SELECT word 4: home all axes
    0x5A, 0xA5, 0x06, 0x83, 0x10, 0x46, 0x01, 0x00, 0x04, //
    // HEATER_0_TEMP_ENTER raw word 0xD200: operator typed 210
    0x5A, 0xA5, 0x06, 0x83, 0x10, 0x34, 0x01, 0xD2, 0x00, //
    // AXIS_PAGE_SELECT word 99: unmapped, gets dropped
    0x5A, 0xA5, 0x06, 0x83, 0x10, 0x46, 0x01, 0x00, 0x63, //
    // FILAMENT_LOAD word 2: load filament
    0x5A, 0xA5, 0x06, 0x83, 0x10, 0x56, 0x01, 0x00, 0x02,
];

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let (tx, rx) = mpsc::channel::<u8>(256);
    let mut display = DisplayAdapter::new(rx);

    for &byte in CAPTURE {
        tx.send(byte).await.expect("pipeline alive");
    }
    drop(tx);

    while let Some(action) = display.next_action().await {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        println!("[{now}] [FROM DISPLAY] {action}");
    }

    println!("Replay complete");
}
