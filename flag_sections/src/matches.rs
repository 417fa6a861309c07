//! Typed access to parsed flag values and positional arguments.

use std::any::Any;

use clap::ArgMatches;
use clap::parser::ValueSource;

/// Identifier under which positional arguments are collected.
pub(crate) const POSITIONAL_ID: &str = "__positional";

/// Result of a successful parse.
///
/// Lookups return the registered default when a flag was not given, and
/// `None` (or an empty list) when the name is unknown, the type does not
/// match the flag's kind, or the flag has no default.
#[derive(Debug, Clone)]
pub struct Matches {
    inner: ArgMatches,
}

impl Matches {
    pub(crate) const fn new(inner: ArgMatches) -> Self {
        Self { inner }
    }

    fn one<T: Any + Clone + Send + Sync + 'static>(&self, name: &str) -> Option<&T> {
        self.inner.try_get_one::<T>(name).ok().flatten()
    }

    fn many<T: Any + Clone + Send + Sync + 'static>(&self, name: &str) -> Vec<T> {
        self.inner
            .try_get_many::<T>(name)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }

    /// Value of a boolean flag.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.one::<bool>(name).copied()
    }

    /// Value of a string flag.
    #[must_use]
    pub fn get_string(&self, name: &str) -> Option<&str> {
        self.one::<String>(name).map(String::as_str)
    }

    /// Value of a signed integer flag.
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.one::<i64>(name).copied()
    }

    /// Value of an unsigned integer flag.
    #[must_use]
    pub fn get_uint(&self, name: &str) -> Option<u64> {
        self.one::<u64>(name).copied()
    }

    /// Value of a floating point flag.
    #[must_use]
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.one::<f64>(name).copied()
    }

    /// Values of a string list flag.
    #[must_use]
    pub fn get_string_list(&self, name: &str) -> Vec<String> {
        self.many(name)
    }

    /// Values of a signed integer list flag.
    #[must_use]
    pub fn get_int_list(&self, name: &str) -> Vec<i64> {
        self.many(name)
    }

    /// Values of an unsigned integer list flag.
    #[must_use]
    pub fn get_uint_list(&self, name: &str) -> Vec<u64> {
        self.many(name)
    }

    /// Values of a boolean list flag.
    #[must_use]
    pub fn get_bool_list(&self, name: &str) -> Vec<bool> {
        self.many(name)
    }

    /// Returns `true` when the flag was given on the command line.
    #[must_use]
    pub fn is_present(&self, name: &str) -> bool {
        matches!(
            self.inner.value_source(name),
            Some(ValueSource::CommandLine)
        )
    }

    /// Positional arguments left after flag processing.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.inner
            .try_get_many::<String>(POSITIONAL_ID)
            .ok()
            .flatten()
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// The `n`th positional argument, if there is one.
    #[must_use]
    pub fn arg(&self, n: usize) -> Option<&str> {
        self.args().nth(n)
    }

    /// Number of positional arguments.
    #[must_use]
    pub fn narg(&self) -> usize {
        self.args().count()
    }

    /// The underlying `clap` matches.
    #[must_use]
    pub const fn as_arg_matches(&self) -> &ArgMatches {
        &self.inner
    }
}
