//! Protocol constants

/// First telegram header byte
pub const HEADER_1: u8 = 0x5A;

/// Second telegram header byte
pub const HEADER_2: u8 = 0xA5;

/// Minimum value of the length-in-words byte
///
/// A telegram carries at least the command byte plus one address/data
/// word pair, so the display never sends a length below 3.
pub const MIN_LENGTH_WORDS: u8 = 3;

/// Maximum assembled frame size in bytes
///
/// The length byte caps out at 255 words: 3 + (255 - 3) * 2 = 507.
pub const MAX_FRAME_SIZE: usize = 512;

/// Default baud rate of the display serial link
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
