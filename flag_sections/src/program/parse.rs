//! Argument parsing over the union of every section's flags.
//!
//! Each call builds a fresh [`clap::Command`]; nothing is registered
//! globally.

use std::collections::HashSet;
use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, value_parser};
use tracing::debug;

use super::Program;
use crate::error::{FlagSectionsError, Result};
use crate::flag::FlagDescriptor;
use crate::matches::{Matches, POSITIONAL_ID};

/// Name of the built-in help flag.
pub const HELP_FLAG: &str = "help";

impl Program {
    /// Builds the parser command for the current set of flags.
    ///
    /// `clap`'s own help and version flags are disabled. A `--help` flag is
    /// added unless a section already registers one, and it takes `-h` when
    /// no registered flag claims that shorthand.
    ///
    /// When several sections register the same name, the first registration
    /// wins and later ones are left out of the parser. A shorthand already
    /// taken by an earlier flag is dropped from the later flag, which stays
    /// reachable through its long name.
    #[must_use]
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.name.clone())
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            .args_override_self(true);

        let mut names: HashSet<&str> = HashSet::new();
        let mut shorts: HashSet<char> = HashSet::new();
        for flag in self.sections.iter().flat_map(|section| section.flags()) {
            if !names.insert(flag.name()) {
                debug!(flag = flag.name(), "ignoring repeated flag name");
                continue;
            }
            let arg = flag.to_arg();
            command = command.arg(match flag.shorthand() {
                Some(short) if !shorts.insert(short) => {
                    debug!(flag = flag.name(), %short, "ignoring repeated shorthand");
                    arg.short(None)
                }
                _ => arg,
            });
        }
        let short_h_claimed = shorts.contains(&'h');

        if !names.contains(HELP_FLAG) {
            let help = Arg::new(HELP_FLAG)
                .long(HELP_FLAG)
                .action(ArgAction::Help)
                .help("Print help");
            command = command.arg(if short_h_claimed {
                help
            } else {
                help.short('h')
            });
        }

        command.arg(
            Arg::new(POSITIONAL_ID)
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .hide(true),
        )
    }

    /// Parses `args` (without the program name).
    ///
    /// # Errors
    ///
    /// Returns [`FlagSectionsError::HelpRequested`] when the help flag is
    /// given and [`FlagSectionsError::Parse`] for any other rejection.
    pub fn try_parse_from<I, T>(&self, args: I) -> Result<Matches>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.command().try_get_matches_from(args) {
            Ok(matches) => {
                let parsed = Matches::new(matches);
                debug!(positional = parsed.narg(), "parsed command line");
                Ok(parsed)
            }
            Err(err) => {
                let error = FlagSectionsError::from_clap(err);
                debug!(%error, "command line rejected");
                Err(error)
            }
        }
    }

    /// Parses `args` (without the program name), handling help requests.
    ///
    /// On a help request the help document is written to the configured sink
    /// and the process exits with status 0.
    ///
    /// # Errors
    ///
    /// Returns [`FlagSectionsError::Parse`] when the arguments are rejected,
    /// or [`FlagSectionsError::Io`] when help output cannot be written.
    pub fn parse_from<I, T>(&mut self, args: I) -> Result<Matches>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.try_parse_from(args) {
            Err(FlagSectionsError::HelpRequested) => {
                self.usage()?;
                std::process::exit(0);
            }
            outcome => outcome,
        }
    }

    /// Parses the process arguments, handling help requests like
    /// [`Self::parse_from`].
    ///
    /// # Errors
    ///
    /// See [`Self::parse_from`].
    pub fn parse(&mut self) -> Result<Matches> {
        self.parse_from(std::env::args_os().skip(1))
    }
}
