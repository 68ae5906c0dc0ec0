#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use paramstyle_core::StyleError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Input was not valid JSON.
    #[display("Invalid JSON input: {}", _0)]
    Json(serde_json::Error),

    /// The value could not be styled.
    #[display("Styling failed: {}", _0)]
    Style(StyleError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// `General(String)` holds no error to expose as a source.
impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Style(e) => Some(e),
            CliError::General(_) => None,
        }
    }
}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
