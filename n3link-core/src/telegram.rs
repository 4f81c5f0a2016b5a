//! Telegram structure and frame decoding

use byteorder::{BigEndian, ByteOrder};
use std::fmt;

/// One complete framed message from the display
///
/// # Frame layout
///
/// ```text
/// ┌──────────┬──────────┬──────────┬──────────┬──────────┬──────────┬──────────────┐
/// │ Header 1 │ Header 2 │  Length  │ Command  │ Address  │ ByteLen  │  Data words  │
/// │   0x5A   │   0xA5   │ (words)  │  1 byte  │ BE u16   │  1 byte  │  BE u16 each │
/// └──────────┴──────────┴──────────┴──────────┴──────────┴──────────┴──────────────┘
///  offset 0    offset 1   offset 2   offset 3  offsets 4-5  offset 6   offset 7..
/// ```
///
/// The length byte counts 16-bit words; the frame ends after
/// `3 + (length - 3) * 2` bytes. The byte-length field at offset 6 is
/// carried on the wire but the stock firmware never cross-checks it
/// against the payload, so neither does this decoder.
///
/// A `Telegram` holds the raw command and address bytes. Whether they
/// name a known command or address is the classifier's business, not
/// the decoder's.
///
/// # Examples
///
/// ```
/// use n3link_core::Telegram;
///
/// // "home all axes" press: VAR_ADDR_READ of 0x1046, one data word
/// let frame = [0x5A, 0xA5, 0x06, 0x83, 0x10, 0x46, 0x01, 0x00, 0x04];
/// let telegram = Telegram::from_frame(&frame);
///
/// assert_eq!(telegram.command, 0x83);
/// assert_eq!(telegram.address, 0x1046);
/// assert_eq!(telegram.data, vec![0x0004]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Telegram {
    /// Raw command byte
    pub command: u8,

    /// Raw 16-bit protocol address
    pub address: u16,

    /// Payload data words, in stream order
    pub data: Vec<u16>,
}

impl Telegram {
    /// Offset of the command byte within a frame
    pub const COMMAND_OFFSET: usize = 3;

    /// Offset of the first data word within a frame
    pub const DATA_OFFSET: usize = 7;

    /// Decode a complete frame, header bytes included
    ///
    /// The framer only hands over buffers whose size matches the length
    /// byte, so this never fails. Frames too short to carry data words
    /// decode with an empty data sequence.
    pub fn from_frame(frame: &[u8]) -> Self {
        let command = frame[Self::COMMAND_OFFSET];
        // A length byte of 4 completes a five-byte frame that truncates
        // the address field. Such a frame decodes to address 0 and falls
        // out at classification.
        let address = frame.get(4..6).map(BigEndian::read_u16).unwrap_or_default();

        let data = if frame.len() > Self::DATA_OFFSET {
            frame[Self::DATA_OFFSET..]
                .chunks_exact(2)
                .map(BigEndian::read_u16)
                .collect()
        } else {
            Vec::new()
        };

        Self {
            command,
            address,
            data,
        }
    }
}

impl fmt::Debug for Telegram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Telegram")
            .field("command", &format!("0x{:02X}", self.command))
            .field("address", &format!("0x{:04X}", self.address))
            .field("data", &format!("{:04X?}", self.data))
            .finish()
    }
}

impl fmt::Display for Telegram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Telegram[cmd=0x{:02X}, addr=0x{:04X}, words={}]",
            self.command,
            self.address,
            self.data.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_single_word() {
        let frame = [0x5A, 0xA5, 0x06, 0x83, 0x10, 0x46, 0x01, 0x00, 0x04];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(telegram.command, 0x83);
        assert_eq!(telegram.address, 0x1046);
        assert_eq!(telegram.data, vec![0x0004]);
    }

    #[test]
    fn test_decode_multi_word() {
        // Two data words, big-endian pairs in stream order
        let frame = [
            0x5A, 0xA5, 0x07, 0x83, 0x10, 0x40, 0x02, 0x00, 0x07, 0x01, 0x2C,
        ];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(telegram.address, 0x1040);
        assert_eq!(telegram.data, vec![0x0007, 0x012C]);
    }

    #[test]
    fn test_decode_empty_data() {
        // Length 5: command + address word + byte-length word, no data
        let frame = [0x5A, 0xA5, 0x05, 0x82, 0x4F, 0x4B, 0x00];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(telegram.command, 0x82);
        assert_eq!(telegram.address, 0x4F4B);
        assert!(telegram.data.is_empty());
    }

    #[test]
    fn test_byte_length_field_not_validated() {
        // Offset 6 claims 0xFF bytes of data; the single word decodes anyway
        let frame = [0x5A, 0xA5, 0x06, 0x83, 0x10, 0x34, 0xFF, 0x0A, 0x00];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(telegram.data, vec![0x0A00]);
    }

    #[test]
    fn test_truncated_address_decodes_to_zero() {
        // Length byte 4 completes a five-byte frame with no full
        // address field; decoding stays total.
        let frame = [0x5A, 0xA5, 0x04, 0x83, 0xFF];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(telegram.command, 0x83);
        assert_eq!(telegram.address, 0);
        assert!(telegram.data.is_empty());
    }

    #[test]
    fn test_address_is_big_endian() {
        let frame = [0x5A, 0xA5, 0x06, 0x83, 0x21, 0x98, 0x01, 0x00, 0x01];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(telegram.address, 0x2198);
    }

    #[test]
    fn test_decode_keeps_raw_command() {
        // Decoder does not judge command legality
        let frame = [0x5A, 0xA5, 0x06, 0x7F, 0x10, 0x02, 0x01, 0x00, 0x01];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(telegram.command, 0x7F);
    }

    #[test]
    fn test_display() {
        let frame = [0x5A, 0xA5, 0x06, 0x83, 0x10, 0x46, 0x01, 0x00, 0x04];
        let telegram = Telegram::from_frame(&frame);

        assert_eq!(
            telegram.to_string(),
            "Telegram[cmd=0x83, addr=0x1046, words=1]"
        );
    }
}
