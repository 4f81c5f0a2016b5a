//! Transport errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Byte channel closed")]
    ChannelClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
