//! Display protocol command definitions

use std::fmt;

use crate::error::{Error, Result};

/// Telegram command codes
///
/// The command byte sits at offset 3 of every frame. The display only
/// ever originates `VarAddrRead` telegrams; the register commands and
/// `VarAddrWrite` show up in the write direction (the mainboard's
/// firmware answers writes to 0x4F4B, ASCII "OK", with a no-op) but are
/// still accepted as well-formed telegrams when read.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Write to a display register
    RegAddrWrite = 0x80,

    /// Read from a display register
    RegAddrRead = 0x81,

    /// Write to a variable address
    VarAddrWrite = 0x82,

    /// Read of a variable address (the only actionable incoming command)
    VarAddrRead = 0x83,
}

impl Command {
    /// Check if telegrams with this command produce incoming actions
    pub fn is_actionable(self) -> bool {
        matches!(self, Self::VarAddrRead)
    }

    /// Get command name
    pub fn name(self) -> &'static str {
        match self {
            Self::RegAddrWrite => "REG_ADDR_WRITE",
            Self::RegAddrRead => "REG_ADDR_READ",
            Self::VarAddrWrite => "VAR_ADDR_WRITE",
            Self::VarAddrRead => "VAR_ADDR_READ",
        }
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd as u8
    }
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x80 => Ok(Self::RegAddrWrite),
            0x81 => Ok(Self::RegAddrRead),
            0x82 => Ok(Self::VarAddrWrite),
            0x83 => Ok(Self::VarAddrRead),
            _ => Err(Error::UnknownCommand(value)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), *self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_conversion() {
        assert_eq!(u8::from(Command::VarAddrRead), 0x83);
        assert_eq!(Command::try_from(0x83).unwrap(), Command::VarAddrRead);
        assert_eq!(Command::try_from(0x80).unwrap(), Command::RegAddrWrite);
    }

    #[test]
    fn test_command_is_actionable() {
        assert!(Command::VarAddrRead.is_actionable());
        assert!(!Command::VarAddrWrite.is_actionable());
        assert!(!Command::RegAddrRead.is_actionable());
        assert!(!Command::RegAddrWrite.is_actionable());
    }

    #[test]
    fn test_unknown_command() {
        let result = Command::try_from(0x84);
        assert_eq!(result, Err(Error::UnknownCommand(0x84)));
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::VarAddrRead.to_string(), "VAR_ADDR_READ(0x83)");
    }
}
