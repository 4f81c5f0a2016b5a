//! Mainboard text link
//!
//! The text side of the link is line oriented: each command or report
//! ends with the three-byte `FF FF FF` terminator. Reads assemble
//! terminator-delimited lines; writes append the terminator to the
//! command text.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use n3link_types::DisplayCommand;

use crate::error::Result;
use crate::{ByteSink, ByteSource};

/// Line terminator of the text protocol
pub const LINE_TERMINATOR: [u8; 3] = [0xFF, 0xFF, 0xFF];

/// Capacity of the received-line channel
pub const LINE_QUEUE_DEPTH: usize = 32;

/// Reads and writes the text side of the link
pub struct MainboardAdapter {
    lines: mpsc::Receiver<String>,
    sink: Box<dyn ByteSink>,
    task: JoinHandle<()>,
}

impl MainboardAdapter {
    /// Spawn the line assembler over a byte source, keeping the sink
    /// for outgoing commands
    ///
    /// Must be called within a tokio runtime.
    pub fn new(source: impl ByteSource + 'static, sink: impl ByteSink + 'static) -> Self {
        let (tx, rx) = mpsc::channel(LINE_QUEUE_DEPTH);
        let task = tokio::spawn(read_loop(source, tx));

        Self {
            lines: rx,
            sink: Box::new(sink),
            task,
        }
    }

    /// Receive the next terminator-delimited line, without terminator
    ///
    /// Returns `None` once the byte source closes and the queue drains.
    pub async fn next_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }

    /// Send a command, appending the line terminator
    pub async fn send(&mut self, command: &DisplayCommand) -> Result<()> {
        trace!(%command, "Sending command");

        for &byte in command.as_str().as_bytes() {
            self.sink.send_byte(byte).await?;
        }
        for byte in LINE_TERMINATOR {
            self.sink.send_byte(byte).await?;
        }

        Ok(())
    }
}

impl Drop for MainboardAdapter {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn read_loop(mut source: impl ByteSource, lines: mpsc::Sender<String>) {
    let mut buffer: Vec<u8> = Vec::new();

    while let Some(byte) = source.next_byte().await {
        buffer.push(byte);

        if buffer.ends_with(&LINE_TERMINATOR) {
            buffer.truncate(buffer.len() - LINE_TERMINATOR.len());
            let line = String::from_utf8_lossy(&buffer).into_owned();
            buffer.clear();

            if lines.send(line).await.is_err() {
                debug!("Line receiver dropped, stopping mainboard read loop");
                return;
            }
        }
    }

    debug!("Mainboard byte stream closed");
}
