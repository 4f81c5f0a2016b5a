//! Type definitions for n3link

pub mod command;
pub mod error;
pub mod page;

pub use command::DisplayCommand;
pub use error::{Error, Result};
pub use page::DisplayPage;
