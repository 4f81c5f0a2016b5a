//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core protocol error: {0}")]
    Core(#[from] n3link_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] n3link_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] n3link_types::Error),
}
