//! Encode outgoing page-switch commands and show the framed bytes

use tokio::sync::mpsc;

use n3link::{DisplayCommand, DisplayPage, MainboardAdapter};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let (_unused_tx, source_rx) = mpsc::channel::<u8>(16);
    let (sink_tx, mut sink_rx) = mpsc::channel::<u8>(1024);

    let mut mainboard = MainboardAdapter::new(source_rx, sink_tx);

    for command in [
        DisplayCommand::page(DisplayPage::Boot),
        DisplayCommand::page(DisplayPage::Main),
        DisplayCommand::raw("sleep=0"),
    ] {
        mainboard.send(&command).await.expect("sink alive");

        let mut framed = Vec::new();
        while let Ok(byte) = sink_rx.try_recv() {
            framed.push(byte);
        }

        println!("{command} -> {}", hex::encode(&framed));
    }
}
