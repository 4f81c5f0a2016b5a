//! Display read pipeline
//!
//! Folds the display's byte stream into telegrams and classifies them
//! into [`Action`]s on a dedicated task. The framer is exclusively
//! owned by that task: framing state depends on every prior byte, so
//! the fold must stay sequential.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use n3link_core::{classify, Action, TelegramFramer};

use crate::ByteSource;

/// Capacity of the decoded-action channel
pub const ACTION_QUEUE_DEPTH: usize = 32;

/// Reads the display side of the link
///
/// Dropping the adapter tears the pipeline down; an in-flight partial
/// frame is simply discarded.
///
/// # Examples
///
/// ```no_run
/// use tokio::sync::mpsc;
/// use n3link_transport::DisplayAdapter;
///
/// # async fn run() {
/// let (bytes_tx, bytes_rx) = mpsc::channel::<u8>(256);
/// // hand bytes_tx to the serial port reader...
///
/// let mut display = DisplayAdapter::new(bytes_rx);
/// while let Some(action) = display.next_action().await {
///     println!("operator pressed: {action}");
/// }
/// # }
/// ```
pub struct DisplayAdapter {
    actions: mpsc::Receiver<Action>,
    task: JoinHandle<()>,
}

impl DisplayAdapter {
    /// Spawn the read pipeline over a byte source
    ///
    /// Must be called within a tokio runtime.
    pub fn new(source: impl ByteSource + 'static) -> Self {
        let (tx, rx) = mpsc::channel(ACTION_QUEUE_DEPTH);
        let task = tokio::spawn(read_loop(source, tx));

        Self { actions: rx, task }
    }

    /// Receive the next decoded action
    ///
    /// Actions come out in frame-completion order. Returns `None` once
    /// the byte source closes and the queue drains. Dropped telegrams
    /// produce no emission, so the sink sees strictly fewer items than
    /// the number of complete frames whenever malformed or unknown ones
    /// occur.
    pub async fn next_action(&mut self) -> Option<Action> {
        self.actions.recv().await
    }
}

impl Drop for DisplayAdapter {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn read_loop(mut source: impl ByteSource, actions: mpsc::Sender<Action>) {
    let mut framer = TelegramFramer::new();

    while let Some(byte) = source.next_byte().await {
        let Some(telegram) = framer.push_byte(byte) else {
            continue;
        };

        match classify(&telegram) {
            Ok(action) => {
                debug!(%action, "Decoded display action");
                if actions.send(action).await.is_err() {
                    debug!("Action receiver dropped, stopping display read loop");
                    return;
                }
            }
            // Rejections stay local: log and keep scanning.
            Err(error) => warn!(%telegram, %error, "Dropping telegram"),
        }
    }

    debug!("Display byte stream closed");
}
