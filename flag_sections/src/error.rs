//! Error types produced while parsing arguments and writing help output.
//!
//! Rendering itself never fails; only the parse step and the final write to
//! the output sink can.

use clap::error::{Error as ClapError, ErrorKind};
use thiserror::Error;

/// Errors surfaced by [`Program`](crate::Program) and [`ValueKind`](crate::ValueKind) parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlagSectionsError {
    /// The built-in help flag was given on the command line.
    ///
    /// Not a true failure: callers print the help text and exit successfully.
    #[error("help requested")]
    HelpRequested,

    /// Command-line arguments were rejected by the parser.
    #[error("{message}")]
    Parse {
        /// First line of the parser diagnostic, without its `error: ` prefix.
        message: String,
        /// Underlying parser error, including the usage tail.
        #[source]
        source: Box<ClapError>,
    },

    /// Writing help text to the output sink failed.
    #[error("failed to write help output: {0}")]
    Io(#[from] std::io::Error),

    /// A value-kind tag did not name a known kind.
    #[error("unknown value kind '{0}'")]
    UnknownValueKind(String),
}

impl FlagSectionsError {
    /// Returns `true` when the error is a request for help rather than a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use flag_sections::FlagSectionsError;
    ///
    /// assert!(FlagSectionsError::HelpRequested.is_help_request());
    /// assert!(!FlagSectionsError::UnknownValueKind("x".to_owned()).is_help_request());
    /// ```
    #[must_use]
    pub const fn is_help_request(&self) -> bool {
        matches!(self, Self::HelpRequested)
    }

    /// Classifies a parser error, splitting help requests from real failures.
    #[must_use]
    pub fn from_clap(error: ClapError) -> Self {
        if matches!(
            error.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            return Self::HelpRequested;
        }
        let rendered = error.to_string();
        let first_line = rendered.lines().next().unwrap_or_default();
        let message = first_line
            .strip_prefix("error: ")
            .unwrap_or(first_line)
            .to_owned();
        Self::Parse {
            message,
            source: Box::new(error),
        }
    }
}

impl From<ClapError> for FlagSectionsError {
    fn from(error: ClapError) -> Self {
        Self::from_clap(error)
    }
}

/// Convenience alias for results carrying [`FlagSectionsError`].
pub type Result<T, E = FlagSectionsError> = std::result::Result<T, E>;
