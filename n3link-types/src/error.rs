pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown display page: {0}")]
    UnknownPage(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
