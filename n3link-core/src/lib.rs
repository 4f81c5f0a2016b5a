//! # n3link-core
//!
//! Protocol implementation for the Elegoo Neptune 3 Pro touch display
//! (TJC serial screen, DGUS-style binary telegrams).
//!
//! This crate provides the low-level protocol primitives:
//! - Telegram framing (byte-at-a-time state machine)
//! - Datagram decoding (command, address, data words)
//! - Action classification (telegram to semantic UI event)
//! - Command and address definitions

pub mod action;
pub mod address;
pub mod command;
pub mod constants;
pub mod error;
pub mod framer;
pub mod registry;
pub mod telegram;

pub use action::Action;
pub use address::AddressKey;
pub use command::Command;
pub use error::{Error, Result};
pub use framer::{ReadState, TelegramFramer};
pub use registry::classify;
pub use telegram::Telegram;

/// Protocol version information
pub const PROTOCOL_VERSION: &str = "1.0";

/// Header size (two header bytes plus the length byte)
pub const HEADER_SIZE: usize = 3;
