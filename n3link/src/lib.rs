//! # n3link
//!
//! Serial bridge library for the Elegoo Neptune 3 Pro: decodes the
//! touch display's binary telegrams into semantic actions and frames
//! text commands for the other side of the link.
//!
//! ## Features
//!
//! - Type-safe display protocol implementation
//! - Async pipeline API using Tokio
//! - Resilient framing: malformed telegrams are dropped, never fatal
//! - Complete action table of the stock display firmware
//!
//! ## Quick Start
//!
//! ```no_run
//! use tokio::sync::mpsc;
//! use n3link::Bridge;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Byte channels come from the serial port collaborator
//!     let (_display_tx, display_rx) = mpsc::channel::<u8>(256);
//!     let (_mainboard_tx, mainboard_rx) = mpsc::channel::<u8>(256);
//!     let (write_tx, _write_rx) = mpsc::channel::<u8>(256);
//!
//!     let mut bridge = Bridge::new(display_rx, mainboard_rx, write_tx);
//!
//!     while let Some(action) = bridge.next_action().await {
//!         println!("[FROM DISPLAY] {action}");
//!     }
//! }
//! ```

pub mod bridge;
pub mod error;

// Re-exports
pub use bridge::Bridge;
pub use error::{Error, Result};

// Re-export types
pub use n3link_core::{classify, Action, AddressKey, Command, Telegram, TelegramFramer};
pub use n3link_transport::{ByteSink, ByteSource, DisplayAdapter, MainboardAdapter};
pub use n3link_types::{DisplayCommand, DisplayPage};
