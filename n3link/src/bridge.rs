//! High-level bridge over both sides of the link

use tracing::{debug, info};

use n3link_core::Action;
use n3link_transport::{ByteSink, ByteSource, DisplayAdapter, MainboardAdapter};
use n3link_types::DisplayCommand;

use crate::error::Result;

/// Bridge between the touch display and the mainboard link
///
/// Owns the display read pipeline and the text-line adapter. The
/// physical serial port stays with the caller: the bridge only consumes
/// ordered byte channels and produces semantic streams.
///
/// # Examples
///
/// ```no_run
/// use tokio::sync::mpsc;
/// use n3link::{Bridge, DisplayCommand, DisplayPage};
///
/// # async fn run() -> n3link::Result<()> {
/// let (_display_tx, display_rx) = mpsc::channel::<u8>(256);
/// let (_mainboard_tx, mainboard_rx) = mpsc::channel::<u8>(256);
/// let (write_tx, _write_rx) = mpsc::channel::<u8>(256);
///
/// let mut bridge = Bridge::new(display_rx, mainboard_rx, write_tx);
///
/// bridge.send(DisplayPage::Main).await?;
///
/// if let Some(action) = bridge.next_action().await {
///     println!("operator pressed: {action}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct Bridge {
    display: DisplayAdapter,
    mainboard: MainboardAdapter,
}

impl Bridge {
    /// Build a bridge over caller-supplied byte channels
    ///
    /// `display_bytes` carries the display's telegram stream,
    /// `mainboard_bytes` the incoming text stream, and `write_sink`
    /// the outgoing text direction. Must be called within a tokio
    /// runtime.
    pub fn new(
        display_bytes: impl ByteSource + 'static,
        mainboard_bytes: impl ByteSource + 'static,
        write_sink: impl ByteSink + 'static,
    ) -> Self {
        info!("Starting display and mainboard adapters");

        Self {
            display: DisplayAdapter::new(display_bytes),
            mainboard: MainboardAdapter::new(mainboard_bytes, write_sink),
        }
    }

    /// Receive the next decoded display action
    pub async fn next_action(&mut self) -> Option<Action> {
        self.display.next_action().await
    }

    /// Receive the next text line from the mainboard side
    pub async fn next_line(&mut self) -> Option<String> {
        self.mainboard.next_line().await
    }

    /// Send a text command over the link
    pub async fn send(&mut self, command: impl Into<DisplayCommand>) -> Result<()> {
        let command = command.into();
        debug!(%command, "Bridge sending command");
        self.mainboard.send(&command).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use n3link_types::DisplayPage;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_bridge_decodes_and_sends() {
        let (display_tx, display_rx) = mpsc::channel::<u8>(64);
        let (_mainboard_tx, mainboard_rx) = mpsc::channel::<u8>(64);
        let (write_tx, mut write_rx) = mpsc::channel::<u8>(64);

        let mut bridge = Bridge::new(display_rx, mainboard_rx, write_tx);

        // Display presses "preheat PLA"
        for byte in [0x5A, 0xA5, 0x06, 0x83, 0x10, 0x32, 0x01, 0x00, 0x09] {
            display_tx.send(byte).await.unwrap();
        }
        assert_eq!(bridge.next_action().await, Some(Action::PreheatPla));

        // Bridge answers with a page switch
        bridge.send(DisplayPage::Preheat).await.unwrap();

        let mut written = Vec::new();
        while let Ok(byte) = write_rx.try_recv() {
            written.push(byte);
        }
        assert_eq!(&written[..12], b"page pretemp");
        assert_eq!(&written[12..], &[0xFF, 0xFF, 0xFF]);
    }

    #[tokio::test]
    async fn test_bridge_reads_mainboard_lines() {
        let (_display_tx, display_rx) = mpsc::channel::<u8>(64);
        let (mainboard_tx, mainboard_rx) = mpsc::channel::<u8>(64);
        let (write_tx, _write_rx) = mpsc::channel::<u8>(64);

        let mut bridge = Bridge::new(display_rx, mainboard_rx, write_tx);

        for &byte in b"wait\xFF\xFF\xFF" {
            mainboard_tx.send(byte).await.unwrap();
        }

        assert_eq!(bridge.next_line().await, Some("wait".to_string()));
    }
}
