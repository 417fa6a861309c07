//! Error types for the `myapp` demonstration.

use flag_sections::FlagSectionsError;
use thiserror::Error;

/// Errors raised by the demonstration binary.
#[derive(Debug, Error)]
pub enum MyAppError {
    /// The command line was rejected or help output could not be written.
    #[error(transparent)]
    Flags(#[from] FlagSectionsError),
    /// Writing the report to stdout failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for the demonstration.
pub type Result<T, E = MyAppError> = std::result::Result<T, E>;
