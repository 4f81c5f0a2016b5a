//! Byte-at-a-time telegram framing
//!
//! The display shares a noisy serial line and the scanner may come up
//! mid-transmission, so framing never errors: anything that does not
//! look like a telegram resets the scanner and the search for the next
//! `5A A5` header continues from the following byte.

use bytes::BytesMut;
use tracing::trace;

use crate::constants::{HEADER_1, HEADER_2, MAX_FRAME_SIZE, MIN_LENGTH_WORDS};
use crate::telegram::Telegram;

/// Scanner state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReadState {
    /// Searching for the first header byte
    Idle,

    /// Got 0x5A, expecting 0xA5
    Header1Seen,

    /// Got both header bytes, expecting the length byte
    Header2Seen,

    /// Accumulating the telegram body
    WaitTelegram,
}

/// Assembles complete telegrams from an ordered byte stream
///
/// Feed bytes one at a time with [`push_byte`](Self::push_byte); each
/// call returns at most one completed telegram. The internal buffer is
/// cleared between frames, not reallocated, so a long-running pipeline
/// does not churn allocations.
///
/// A framer is exclusively owned by one consumer: state depends on
/// every prior byte, so the fold over the stream must stay sequential.
///
/// # Examples
///
/// ```
/// use n3link_core::TelegramFramer;
///
/// let mut framer = TelegramFramer::new();
/// let frame = [0x5A, 0xA5, 0x06, 0x83, 0x10, 0x46, 0x01, 0x00, 0x04];
///
/// let mut decoded = None;
/// for byte in frame {
///     if let Some(telegram) = framer.push_byte(byte) {
///         decoded = Some(telegram);
///     }
/// }
/// assert_eq!(decoded.unwrap().address, 0x1046);
/// ```
#[derive(Debug)]
pub struct TelegramFramer {
    state: ReadState,
    buffer: BytesMut,
}

impl TelegramFramer {
    /// Create a new framer in the idle state
    pub fn new() -> Self {
        Self {
            state: ReadState::Idle,
            buffer: BytesMut::with_capacity(MAX_FRAME_SIZE),
        }
    }

    /// Get current scanner state
    pub fn state(&self) -> ReadState {
        self.state
    }

    /// Number of bytes buffered for the frame in progress
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Discard any partial frame and return to idle
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = ReadState::Idle;
    }

    /// Consume one byte, returning a telegram when a frame completes
    ///
    /// Invalid header bytes and undersized length bytes silently reset
    /// the scanner. A byte that breaks a partial header is discarded,
    /// not reconsidered as the start of a new header.
    pub fn push_byte(&mut self, byte: u8) -> Option<Telegram> {
        match self.state {
            ReadState::Idle => {
                if byte == HEADER_1 {
                    self.state = ReadState::Header1Seen;
                    self.buffer.extend_from_slice(&[byte]);
                }
                None
            }

            ReadState::Header1Seen => {
                if byte == HEADER_2 {
                    self.state = ReadState::Header2Seen;
                    self.buffer.extend_from_slice(&[byte]);
                } else {
                    trace!(byte = format!("0x{byte:02X}"), "Bad second header byte, resync");
                    self.reset();
                }
                None
            }

            ReadState::Header2Seen => {
                // The length byte counts words: command plus at least one
                // address/data word pair, so anything below 3 is noise.
                if byte >= MIN_LENGTH_WORDS {
                    self.state = ReadState::WaitTelegram;
                    self.buffer.extend_from_slice(&[byte]);
                } else {
                    trace!(length = byte, "Length byte below minimum, resync");
                    self.reset();
                }
                None
            }

            ReadState::WaitTelegram => {
                self.buffer.extend_from_slice(&[byte]);

                let length_words = self.buffer[2] as usize;
                let target_len = 3 + (length_words - 3) * 2;
                if self.buffer.len() == target_len {
                    trace!(frame = hex::encode(&self.buffer), "Telegram complete");
                    let telegram = Telegram::from_frame(&self.buffer);
                    self.reset();
                    return Some(telegram);
                }
                // A length byte of 3 puts the completion size below what
                // is already buffered; resync instead of growing forever.
                if self.buffer.len() >= MAX_FRAME_SIZE {
                    trace!(length = length_words, "Frame overran maximum size, resync");
                    self.reset();
                }
                None
            }
        }
    }

    /// Consume a slice of bytes, collecting every completed telegram
    ///
    /// Convenience over [`push_byte`](Self::push_byte) for replay logs
    /// and tests; telegrams come out in frame-completion order.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Vec<Telegram> {
        bytes
            .iter()
            .filter_map(|&byte| self.push_byte(byte))
            .collect()
    }
}

impl Default for TelegramFramer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    /// Build a conformant frame from command, address and data words
    fn build_frame(command: u8, address: u16, data: &[u16]) -> Vec<u8> {
        let length_words = 5 + data.len() as u8;
        let mut frame = vec![
            HEADER_1,
            HEADER_2,
            length_words,
            command,
            (address >> 8) as u8,
            (address & 0xFF) as u8,
            (data.len() * 2) as u8,
        ];
        for word in data {
            frame.extend_from_slice(&word.to_be_bytes());
        }
        frame
    }

    #[test]
    fn test_single_frame() {
        let mut framer = TelegramFramer::new();
        let frame = build_frame(0x83, 0x1046, &[0x0004]);

        let telegrams = framer.push_bytes(&frame);

        assert_eq!(telegrams.len(), 1);
        assert_eq!(telegrams[0].command, 0x83);
        assert_eq!(telegrams[0].address, 0x1046);
        assert_eq!(telegrams[0].data, vec![0x0004]);
        assert_eq!(framer.state(), ReadState::Idle);
        assert_eq!(framer.buffered_len(), 0);
    }

    #[test]
    fn test_leading_noise_is_skipped() {
        let mut framer = TelegramFramer::new();
        let mut stream = vec![0x00, 0x13, 0x37, 0xA5];
        stream.extend(build_frame(0x83, 0x1034, &[0x0A00]));

        let telegrams = framer.push_bytes(&stream);

        assert_eq!(telegrams.len(), 1);
        assert_eq!(telegrams[0].address, 0x1034);
    }

    #[test]
    fn test_bad_second_header_resets() {
        let mut framer = TelegramFramer::new();

        assert!(framer.push_byte(HEADER_1).is_none());
        assert_eq!(framer.state(), ReadState::Header1Seen);

        // Not 0xA5: back to idle, buffer emptied
        assert!(framer.push_byte(0x42).is_none());
        assert_eq!(framer.state(), ReadState::Idle);
        assert_eq!(framer.buffered_len(), 0);
    }

    #[test]
    fn test_broken_header_byte_is_not_reconsidered() {
        let mut framer = TelegramFramer::new();

        // 5A 5A: the second 0x5A kills the partial header and is itself
        // discarded, it does not restart a header.
        framer.push_byte(HEADER_1);
        framer.push_byte(HEADER_1);
        assert_eq!(framer.state(), ReadState::Idle);

        // The stream needs a fresh 5A A5 to frame again
        let telegrams = framer.push_bytes(&build_frame(0x83, 0x1046, &[0x0004]));
        assert_eq!(telegrams.len(), 1);
    }

    #[test]
    fn test_short_length_byte_resets() {
        let mut framer = TelegramFramer::new();

        framer.push_byte(HEADER_1);
        framer.push_byte(HEADER_2);
        assert_eq!(framer.state(), ReadState::Header2Seen);

        assert!(framer.push_byte(2).is_none());
        assert_eq!(framer.state(), ReadState::Idle);
        assert_eq!(framer.buffered_len(), 0);

        // Scanner keeps working afterwards
        let telegrams = framer.push_bytes(&build_frame(0x83, 0x1046, &[0x0004]));
        assert_eq!(telegrams.len(), 1);
    }

    #[test]
    fn test_back_to_back_frames_no_state_leak() {
        let mut framer = TelegramFramer::new();
        let mut stream = build_frame(0x83, 0x1046, &[0x0004]);
        stream.extend(build_frame(0x83, 0x1048, &[0x0001]));

        let telegrams = framer.push_bytes(&stream);

        assert_eq!(telegrams.len(), 2);
        assert_eq!(telegrams[0].address, 0x1046);
        assert_eq!(telegrams[1].address, 0x1048);
        assert_eq!(framer.state(), ReadState::Idle);
        assert_eq!(framer.buffered_len(), 0);
    }

    #[test]
    fn test_reset_discards_partial_frame() {
        let mut framer = TelegramFramer::new();

        framer.push_bytes(&[HEADER_1, HEADER_2, 0x06, 0x83]);
        assert_eq!(framer.state(), ReadState::WaitTelegram);

        framer.reset();
        assert_eq!(framer.state(), ReadState::Idle);
        assert_eq!(framer.buffered_len(), 0);
    }

    #[test]
    fn test_length_three_cannot_complete() {
        let mut framer = TelegramFramer::new();
        framer.push_bytes(&[HEADER_1, HEADER_2, 0x03]);
        assert_eq!(framer.state(), ReadState::WaitTelegram);

        // Completion size (3) is already below the buffered count; the
        // scanner resyncs at the size cap and keeps decoding afterwards.
        let telegrams = framer.push_bytes(&vec![0xEE; MAX_FRAME_SIZE]);
        assert!(telegrams.is_empty());
        assert_eq!(framer.state(), ReadState::Idle);

        let telegrams = framer.push_bytes(&build_frame(0x83, 0x1046, &[0x0004]));
        assert_eq!(telegrams.len(), 1);
    }

    #[test]
    fn test_header_bytes_inside_payload() {
        // A payload word of 0x5AA5 must not confuse the scanner
        let mut framer = TelegramFramer::new();
        let frame = build_frame(0x83, 0x1040, &[0x5AA5]);

        let telegrams = framer.push_bytes(&frame);

        assert_eq!(telegrams.len(), 1);
        assert_eq!(telegrams[0].data, vec![0x5AA5]);
    }

    proptest! {
        #[test]
        fn prop_no_header_no_telegram(stream in proptest::collection::vec(
            (0u8..=0xFF).prop_filter("no header-1 byte", |b| *b != HEADER_1),
            0..256,
        )) {
            let mut framer = TelegramFramer::new();
            let telegrams = framer.push_bytes(&stream);

            prop_assert!(telegrams.is_empty());
            prop_assert_eq!(framer.state(), ReadState::Idle);
        }

        #[test]
        fn prop_round_trip(
            command in prop_oneof![Just(0x80u8), Just(0x81), Just(0x82), Just(0x83)],
            address in any::<u16>(),
            data in proptest::collection::vec(any::<u16>(), 1..8),
        ) {
            let mut framer = TelegramFramer::new();
            let frame = build_frame(command, address, &data);

            let telegrams = framer.push_bytes(&frame);

            prop_assert_eq!(telegrams.len(), 1);
            prop_assert_eq!(telegrams[0].command, command);
            prop_assert_eq!(telegrams[0].address, address);
            prop_assert_eq!(&telegrams[0].data, &data);
        }
    }
}
