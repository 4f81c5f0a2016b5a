//! Error types for n3link-core

/// Result type alias for core protocol operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core protocol errors
///
/// Every variant here describes a telegram that could not be turned
/// into an action. None of them is fatal: the read pipeline logs the
/// rejection and keeps scanning the byte stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Unknown command byte
    #[error("Unknown command byte: 0x{0:02X}")]
    UnknownCommand(u8),

    /// Valid command, but not one that produces incoming actions
    #[error("Only VAR_ADDR_READ produces incoming actions, got {command}")]
    UnsupportedCommand {
        command: crate::command::Command,
    },

    /// Unknown protocol address
    #[error("Unknown address: 0x{0:04X}")]
    UnknownAddress(u16),

    /// Telegram carried no data words
    #[error("Telegram for address 0x{address:04X} has no data")]
    EmptyData {
        address: u16,
    },

    /// No action registered for this address/data combination
    #[error("No action found for address={address}, data={data:04X?}")]
    Unrecognized {
        address: crate::address::AddressKey,
        data: Vec<u16>,
    },
}

impl Error {
    /// Check if this rejection came from an unmapped but well-formed telegram
    ///
    /// True for telegrams the display legitimately sends but the registry
    /// does not map, as opposed to command/address values outside the
    /// protocol tables.
    pub fn is_unmapped(&self) -> bool {
        matches!(self, Self::Unrecognized { .. } | Self::UnsupportedCommand { .. })
    }
}
