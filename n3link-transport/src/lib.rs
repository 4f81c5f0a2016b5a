//! Byte-stream adapters for the display and mainboard links
//!
//! The physical serial port lives outside this crate. Collaborators
//! hand in ordered byte channels (a port reader task, a test fixture,
//! a replay log) through the [`ByteSource`] / [`ByteSink`] traits and
//! get back semantic streams: decoded display [`Action`]s on one side,
//! terminator-framed text lines on the other.
//!
//! [`Action`]: n3link_core::Action

pub mod display;
pub mod error;
pub mod mainboard;

pub use display::DisplayAdapter;
pub use error::{Error, Result};
pub use mainboard::MainboardAdapter;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// An ordered source of bytes
///
/// Arrival order must be preserved; the adapters assume no byte is
/// dropped, duplicated, or reordered before reaching them.
#[async_trait]
pub trait ByteSource: Send {
    /// Receive the next byte, or `None` once the stream is closed
    async fn next_byte(&mut self) -> Option<u8>;
}

/// An ordered sink of bytes
#[async_trait]
pub trait ByteSink: Send {
    /// Write one byte
    async fn send_byte(&mut self, byte: u8) -> Result<()>;
}

#[async_trait]
impl ByteSource for mpsc::Receiver<u8> {
    async fn next_byte(&mut self) -> Option<u8> {
        self.recv().await
    }
}

#[async_trait]
impl ByteSink for mpsc::Sender<u8> {
    async fn send_byte(&mut self, byte: u8) -> Result<()> {
        self.send(byte).await.map_err(|_| Error::ChannelClosed)
    }
}
