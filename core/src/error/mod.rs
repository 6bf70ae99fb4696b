#[allow(clippy::module_inception)]
pub mod error;

pub use error::{AppearanceError, CliError, ParsePreferenceError, SessionError, StorageError};
