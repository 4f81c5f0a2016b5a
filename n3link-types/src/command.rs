//! Outgoing display commands
//!
//! The text side of the link takes terminator-delimited command lines.
//! `DisplayCommand` holds the line without the terminator; the
//! transport appends it on write.

use std::fmt;

use crate::page::DisplayPage;

/// One outgoing text command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCommand(String);

impl DisplayCommand {
    /// Wrap a raw command line
    pub fn raw(command: impl Into<String>) -> Self {
        Self(command.into())
    }

    /// Command switching the display to a page
    pub fn page(page: DisplayPage) -> Self {
        Self(format!("page {}", page.name()))
    }

    /// Command text without the terminator
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<DisplayPage> for DisplayCommand {
    fn from(page: DisplayPage) -> Self {
        Self::page(page)
    }
}

impl fmt::Display for DisplayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
