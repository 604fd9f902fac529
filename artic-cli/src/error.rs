//! CLI error type.

use artic_lib::error::ApiError;
use artic_lib::error::FetchError;

/// Errors that end the program.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("client setup failed: {0}")]
    Client(#[from] ApiError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
