//! Flag definitions and their adaptation to `clap`.
//!
//! [`FlagDescriptor`] is the read-only view the layout engine renders from.
//! [`Flag`] is the concrete descriptor registered through a
//! [`Section`](crate::Section); [`Flag::to_arg`] turns it into a
//! [`clap::Arg`] when the program parses its arguments.

use clap::{Arg, ArgAction, value_parser};

use crate::kind::{EMPTY_LIST, ValueKind};

/// Read-only view of a flag definition, as needed to render help text.
///
/// The layout engine only ever talks to flags through this trait, so any
/// flag-parsing backend can supply descriptors.
pub trait FlagDescriptor {
    /// Long-form name, written after `--`.
    fn name(&self) -> &str;

    /// Optional single-character alias, written after `-`.
    fn shorthand(&self) -> Option<char>;

    /// Free-form usage text; may span several lines.
    fn usage(&self) -> &str;

    /// The default value rendered as text.
    fn default_text(&self) -> &str;

    /// Type tag deciding quoting and default suppression.
    fn value_kind(&self) -> ValueKind;

    /// Hidden flags are neither rendered nor measured.
    fn is_hidden(&self) -> bool;
}

impl<T: FlagDescriptor + ?Sized> FlagDescriptor for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn shorthand(&self) -> Option<char> {
        (**self).shorthand()
    }

    fn usage(&self) -> &str {
        (**self).usage()
    }

    fn default_text(&self) -> &str {
        (**self).default_text()
    }

    fn value_kind(&self) -> ValueKind {
        (**self).value_kind()
    }

    fn is_hidden(&self) -> bool {
        (**self).is_hidden()
    }
}

/// A flag registered with a [`Section`](crate::Section).
///
/// # Examples
///
/// ```
/// use flag_sections::{Flag, FlagDescriptor, ValueKind};
///
/// let flag = Flag::int("db-port", 5432, "Database server port");
/// assert_eq!(flag.default_text(), "5432");
/// assert_eq!(flag.value_kind(), ValueKind::Int);
///
/// let tags = Flag::string_list("tags", &[] as &[&str], "List of tags").short('t');
/// assert_eq!(tags.default_text(), "[]");
/// assert_eq!(tags.shorthand(), Some('t'));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Flag {
    name: String,
    shorthand: Option<char>,
    usage: String,
    default_text: String,
    default_values: Vec<String>,
    kind: ValueKind,
    hidden: bool,
}

impl Flag {
    fn scalar(name: String, kind: ValueKind, default_text: String, usage: String) -> Self {
        let default_values = if default_text.is_empty() {
            Vec::new()
        } else {
            vec![default_text.clone()]
        };
        Self {
            name,
            shorthand: None,
            usage,
            default_text,
            default_values,
            kind,
            hidden: false,
        }
    }

    fn list<T: ToString>(name: String, kind: ValueKind, defaults: &[T], usage: String) -> Self {
        let default_values: Vec<String> = defaults.iter().map(ToString::to_string).collect();
        let default_text = if default_values.is_empty() {
            EMPTY_LIST.to_owned()
        } else {
            format!("[{}]", default_values.join(","))
        };
        Self {
            name,
            shorthand: None,
            usage,
            default_text,
            default_values,
            kind,
            hidden: false,
        }
    }

    /// Creates a boolean switch.
    #[must_use]
    pub fn bool(name: impl Into<String>, default: bool, usage: impl Into<String>) -> Self {
        Self::scalar(name.into(), ValueKind::Bool, default.to_string(), usage.into())
    }

    /// Creates a string-valued flag. An empty default is not shown in help.
    #[must_use]
    pub fn string(
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self::scalar(name.into(), ValueKind::String, default.into(), usage.into())
    }

    /// Creates a signed integer flag.
    #[must_use]
    pub fn int(name: impl Into<String>, default: i64, usage: impl Into<String>) -> Self {
        Self::scalar(name.into(), ValueKind::Int, default.to_string(), usage.into())
    }

    /// Creates an unsigned integer flag.
    #[must_use]
    pub fn uint(name: impl Into<String>, default: u64, usage: impl Into<String>) -> Self {
        Self::scalar(name.into(), ValueKind::Uint, default.to_string(), usage.into())
    }

    /// Creates a floating point flag.
    #[must_use]
    pub fn float(name: impl Into<String>, default: f64, usage: impl Into<String>) -> Self {
        Self::scalar(name.into(), ValueKind::Float, default.to_string(), usage.into())
    }

    /// Creates a comma-separated string list flag.
    #[must_use]
    pub fn string_list<S: AsRef<str>>(
        name: impl Into<String>,
        defaults: &[S],
        usage: impl Into<String>,
    ) -> Self {
        let owned: Vec<&str> = defaults.iter().map(AsRef::as_ref).collect();
        Self::list(name.into(), ValueKind::StringList, &owned, usage.into())
    }

    /// Creates a comma-separated signed integer list flag.
    #[must_use]
    pub fn int_list(name: impl Into<String>, defaults: &[i64], usage: impl Into<String>) -> Self {
        Self::list(name.into(), ValueKind::IntList, defaults, usage.into())
    }

    /// Creates a comma-separated unsigned integer list flag.
    #[must_use]
    pub fn uint_list(name: impl Into<String>, defaults: &[u64], usage: impl Into<String>) -> Self {
        Self::list(name.into(), ValueKind::UintList, defaults, usage.into())
    }

    /// Creates a comma-separated boolean list flag.
    #[must_use]
    pub fn bool_list(name: impl Into<String>, defaults: &[bool], usage: impl Into<String>) -> Self {
        Self::list(name.into(), ValueKind::BoolList, defaults, usage.into())
    }

    /// Sets the single-character alias.
    #[must_use]
    pub const fn short(mut self, shorthand: char) -> Self {
        self.shorthand = Some(shorthand);
        self
    }

    /// Sets whether the flag is hidden from help output.
    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Hides or reveals an already registered flag.
    pub const fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Replaces the usage text of an already registered flag.
    pub fn set_usage(&mut self, usage: impl Into<String>) {
        self.usage = usage.into();
    }

    /// Default values handed to the parser; empty when there is no default.
    #[must_use]
    pub fn default_values(&self) -> &[String] {
        &self.default_values
    }

    /// Builds the `clap` argument matching this flag.
    ///
    /// Booleans accept `--name` and `--name=false`; list kinds split values on
    /// commas and accumulate repeated occurrences. Signed numeric kinds accept
    /// negative values such as `--offset -3`.
    #[must_use]
    pub fn to_arg(&self) -> Arg {
        let base = Arg::new(self.name.clone())
            .long(self.name.clone())
            .help(self.usage.clone())
            .hide(self.hidden);
        let arg = match self.shorthand {
            Some(short) => base.short(short),
            None => base,
        };
        let typed = match self.kind {
            ValueKind::Bool => arg
                .action(ArgAction::Set)
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true")
                .value_parser(value_parser!(bool)),
            ValueKind::String => arg
                .action(ArgAction::Set)
                .value_parser(value_parser!(String)),
            ValueKind::Int => arg
                .action(ArgAction::Set)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
            ValueKind::Uint => arg.action(ArgAction::Set).value_parser(value_parser!(u64)),
            ValueKind::Float => arg
                .action(ArgAction::Set)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64)),
            ValueKind::StringList => list_arg(arg).value_parser(value_parser!(String)),
            ValueKind::IntList => list_arg(arg)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
            ValueKind::UintList => list_arg(arg).value_parser(value_parser!(u64)),
            ValueKind::BoolList => list_arg(arg).value_parser(value_parser!(bool)),
        };
        if self.default_values.is_empty() {
            typed
        } else {
            typed.default_values(self.default_values.clone())
        }
    }
}

fn list_arg(arg: Arg) -> Arg {
    arg.action(ArgAction::Append)
        .num_args(1)
        .value_delimiter(',')
}

impl FlagDescriptor for Flag {
    fn name(&self) -> &str {
        &self.name
    }

    fn shorthand(&self) -> Option<char> {
        self.shorthand
    }

    fn usage(&self) -> &str {
        &self.usage
    }

    fn default_text(&self) -> &str {
        &self.default_text
    }

    fn value_kind(&self) -> ValueKind {
        self.kind
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(test)]
mod tests;
