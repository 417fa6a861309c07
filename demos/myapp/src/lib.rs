//! Demonstration of grouped flag help for an imaginary database client.
//!
//! [`build_program`] assembles the sections; [`Settings`] collects the parsed
//! values the binary reports on.

pub mod error;

use std::io::{self, Write};

use flag_sections::{Matches, Program};
use tracing::debug;

/// Program name written in the help header.
pub const NAME: &str = "myapp";

/// Version written after the program name.
pub const VERSION: &str = "v1.0.0";

const DESCRIPTION: &str = "A demonstration of grouped flag help.\n\
This program shows how to organize flags into logical groups.";

const EXAMPLES: &str = "# Basic usage with verbose mode
myapp --verbose

# Specifying database connection parameters
myapp --db-host db.example.com --db-port 3306 --db-user admin --db-password secret --db-ssl

# Using output options with tags
myapp -f json -o output.json --tags frontend,backend,testing

# Dry run with advanced options
myapp --dry-run --timeout 30 --retry 5 --factor 2.0

# Using a configuration file
myapp -c /etc/myapp/config.yaml";

/// Builds the demonstration program with all of its sections.
#[must_use]
pub fn build_program() -> Program {
    let mut program = Program::new()
        .name(NAME)
        .version(VERSION)
        .description(DESCRIPTION);

    let general = program.new_section("General Options");
    general.description = "This is a description for the General Options group.".to_owned();
    general
        .bool_p("verbose", 'v', false, "Enable verbose output")
        .string_p("config", 'c', "", "Path to configuration file")
        .bool("dry-run", false, "Perform a trial run with no changes made");

    program
        .new_section("Database Options")
        .string("db-host", "localhost", "Database server hostname")
        .int("db-port", 5432, "Database server port")
        .string("db-user", "postgres", "Database username")
        .string("db-password", "", "Database password")
        .string("db-name", "myapp", "Database name")
        .bool("db-ssl", false, "Use SSL for database connection");

    program
        .new_section("Output Options")
        .string_p("format", 'f', "text", "Output format (text, json, yaml)")
        .string_p("output", 'o', "-", "Output file (- for stdout)")
        .bool("color", true, "Enable colorized output")
        .int("indent", 2, "Indentation level for structured output");

    let advanced = program.new_section("Advanced Options");
    advanced.sort_flags = true;
    advanced.footer = "The previous flags are sorted alphabetically.".to_owned();
    advanced
        .float("timeout", 0.0, "Operation timeout in seconds (0 for no timeout)")
        .int("retry", 3, "Number of retry attempts")
        .float("factor", 1.5, "Exponential backoff factor")
        .string_list("tags", &[], "List of tags to apply");

    let debugging = program.new_section("Debug");
    debugging.bool("trace", false, "Enable tracing");
    if let Some(trace) = debugging.lookup_mut("trace") {
        trace.set_hidden(true);
    }

    program.new_section("Examples").footer = EXAMPLES.to_owned();
    program
}

/// Values the binary reports after a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `--verbose` was given.
    pub verbose: bool,
    /// Configuration file path, when one was given.
    pub config: Option<String>,
    /// Database host.
    pub db_host: String,
    /// Database port.
    pub db_port: i64,
    /// Database user.
    pub db_user: String,
    /// Database password, when one was given.
    pub db_password: Option<String>,
    /// Database name.
    pub db_name: String,
    /// Whether SSL is requested.
    pub db_ssl: bool,
}

impl Settings {
    /// Reads the reported values out of parsed matches.
    #[must_use]
    pub fn from_matches(matches: &Matches) -> Self {
        let text = |name: &str| matches.get_string(name).unwrap_or_default().to_owned();
        let settings = Self {
            verbose: matches.get_bool("verbose").unwrap_or(false),
            config: matches
                .get_string("config")
                .filter(|path| !path.is_empty())
                .map(str::to_owned),
            db_host: text("db-host"),
            db_port: matches.get_int("db-port").unwrap_or_default(),
            db_user: text("db-user"),
            db_password: matches
                .get_string("db-password")
                .filter(|secret| !secret.is_empty())
                .map(str::to_owned),
            db_name: text("db-name"),
            db_ssl: matches.get_bool("db-ssl").unwrap_or(false),
        };
        debug!(positional = matches.narg(), "collected settings");
        settings
    }
}

/// Writes the human-readable report for `settings`.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_report<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    if settings.verbose {
        writeln!(out, "Verbose mode enabled")?;
    }
    if let Some(config) = &settings.config {
        writeln!(out, "Using configuration file: {config}")?;
    }
    writeln!(
        out,
        "Database connection: {}@{}:{}/{} (SSL: {})",
        settings.db_user, settings.db_host, settings.db_port, settings.db_name, settings.db_ssl
    )?;
    if settings.db_password.is_some() {
        writeln!(out, "Database password is set")?;
    } else {
        writeln!(out, "No database password provided")?;
    }
    Ok(())
}
