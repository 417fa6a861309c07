//! Grouped, column-aligned help text for command-line flags.
//!
//! A [`Program`] owns an ordered list of [`Section`]s. Each section is a named
//! group of flags with optional description and footer text. When help is
//! rendered, the program measures the longest visible flag name (across every
//! section, or per section, depending on [`Alignment`]) and lines up the usage
//! text of every flag in a single column.
//!
//! Parsing is delegated to `clap`: [`Program::try_parse_from`] builds a
//! transient [`clap::Command`] from the registered flags and returns typed
//! [`Matches`].
//!
//! ```
//! use flag_sections::{FlagSectionsError, Program};
//!
//! let mut program = Program::new().name("myapp").version("v1.0.0");
//! program
//!     .new_section("General Options")
//!     .bool_p("verbose", 'v', false, "Enable verbose output")
//!     .string_p("config", 'c', "", "Path to configuration file");
//!
//! let matches = program.try_parse_from(["-v", "input.txt"])?;
//! assert_eq!(matches.get_bool("verbose"), Some(true));
//! assert_eq!(matches.arg(0), Some("input.txt"));
//!
//! let help = program.render_help();
//! assert!(help.contains("  -v, --verbose    Enable verbose output\n"));
//! # Ok::<(), FlagSectionsError>(())
//! ```

mod config;
mod error;
mod flag;
mod kind;
mod matches;
mod program;
mod section;

pub use config::{
    Alignment, DEFAULT_ALIGNMENT, DEFAULT_INDENTATION, DEFAULT_PADDING, DEFAULT_SORT_FLAGS, Layout,
};
pub use error::{FlagSectionsError, Result};
pub use flag::{Flag, FlagDescriptor};
pub use kind::{
    DefaultPolicy, EMPTY_LIST, KindRule, Quoting, ValueKind, format_default, kind_table,
    should_print_default,
};
pub use matches::Matches;
pub use program::{HELP_FLAG, Program};
pub use section::Section;
pub use section::layout::{LONG_PREFIX_WIDTH, SHORTHAND_WIDTH, column_width, write_flag_line};
