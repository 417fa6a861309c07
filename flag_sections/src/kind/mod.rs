//! Value kinds and the default-annotation policy attached to each.
//!
//! Every flag carries a [`ValueKind`] tag. The tag decides two things when the
//! flag is rendered: whether its default is worth printing at all, and whether
//! the printed default is wrapped in double quotes. Both answers come from
//! the row returned by [`ValueKind::rule`].

use std::fmt;
use std::str::FromStr;

use crate::error::FlagSectionsError;

/// Textual representation of an empty list default.
pub const EMPTY_LIST: &str = "[]";

/// Classifies the type of value a flag accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValueKind {
    /// `true`/`false` switch.
    Bool,
    /// Free-form text.
    String,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating point number.
    Float,
    /// Comma-separated list of strings.
    StringList,
    /// Comma-separated list of signed integers.
    IntList,
    /// Comma-separated list of unsigned integers.
    UintList,
    /// Comma-separated list of booleans.
    BoolList,
}

/// When a flag's default value appears in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPolicy {
    /// Only a default of exactly `true` is shown.
    WhenTrue,
    /// Any default other than the empty list is shown.
    WhenNotEmptyList,
    /// Any non-empty default is shown.
    WhenNotEmpty,
}

/// How a shown default is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quoting {
    /// Wrapped in double quotes.
    Quoted,
    /// Written as-is.
    Bare,
}

/// One row of the kind table.
#[derive(Debug, Clone, Copy)]
pub struct KindRule {
    /// Kind described by this row.
    pub kind: ValueKind,
    /// Stable tag string.
    pub tag: &'static str,
    /// Default-display policy.
    pub policy: DefaultPolicy,
    /// Quoting applied to a displayed default.
    pub quoting: Quoting,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Bool,
        Self::String,
        Self::Int,
        Self::Uint,
        Self::Float,
        Self::StringList,
        Self::IntList,
        Self::UintList,
        Self::BoolList,
    ];

    /// Returns the table row describing this kind.
    #[must_use]
    pub const fn rule(self) -> KindRule {
        let (tag, policy, quoting) = match self {
            Self::Bool => ("bool", DefaultPolicy::WhenTrue, Quoting::Bare),
            Self::String => ("string", DefaultPolicy::WhenNotEmpty, Quoting::Quoted),
            Self::Int => ("int", DefaultPolicy::WhenNotEmpty, Quoting::Bare),
            Self::Uint => ("uint", DefaultPolicy::WhenNotEmpty, Quoting::Bare),
            Self::Float => ("float64", DefaultPolicy::WhenNotEmpty, Quoting::Bare),
            Self::StringList => ("stringSlice", DefaultPolicy::WhenNotEmptyList, Quoting::Bare),
            Self::IntList => ("intSlice", DefaultPolicy::WhenNotEmptyList, Quoting::Bare),
            Self::UintList => ("uintSlice", DefaultPolicy::WhenNotEmptyList, Quoting::Bare),
            Self::BoolList => ("boolSlice", DefaultPolicy::WhenNotEmptyList, Quoting::Bare),
        };
        KindRule {
            kind: self,
            tag,
            policy,
            quoting,
        }
    }

    /// Returns the stable tag string for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        self.rule().tag
    }

    /// Returns the policy deciding when a default is shown.
    #[must_use]
    pub const fn default_policy(self) -> DefaultPolicy {
        self.rule().policy
    }

    /// Returns the quoting applied to a shown default.
    #[must_use]
    pub const fn quoting(self) -> Quoting {
        self.rule().quoting
    }

    /// Returns `true` for the comma-separated list kinds.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self.default_policy(), DefaultPolicy::WhenNotEmptyList)
    }
}

/// Iterates over the rule of every kind, in declaration order.
pub fn kind_table() -> impl Iterator<Item = KindRule> {
    ValueKind::ALL.into_iter().map(ValueKind::rule)
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ValueKind {
    type Err = FlagSectionsError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        kind_table()
            .find(|rule| rule.tag == tag)
            .map(|rule| rule.kind)
            .ok_or_else(|| FlagSectionsError::UnknownValueKind(tag.to_owned()))
    }
}

/// Returns whether a default of `default_text` should be printed for `kind`.
///
/// # Examples
///
/// ```
/// use flag_sections::{ValueKind, should_print_default};
///
/// assert!(!should_print_default(ValueKind::Bool, "false"));
/// assert!(should_print_default(ValueKind::Bool, "true"));
/// assert!(!should_print_default(ValueKind::StringList, "[]"));
/// assert!(should_print_default(ValueKind::Int, "0"));
/// ```
#[must_use]
pub fn should_print_default(kind: ValueKind, default_text: &str) -> bool {
    match kind.default_policy() {
        DefaultPolicy::WhenTrue => default_text == "true",
        DefaultPolicy::WhenNotEmptyList => default_text != EMPTY_LIST,
        DefaultPolicy::WhenNotEmpty => !default_text.is_empty(),
    }
}

/// Formats the ` (default: X)` annotation appended to a usage line.
///
/// The policy is not consulted; callers check [`should_print_default`] first.
#[must_use]
pub fn format_default(kind: ValueKind, default_text: &str) -> String {
    match kind.quoting() {
        Quoting::Quoted => format!(" (default: \"{default_text}\")"),
        Quoting::Bare => format!(" (default: {default_text})"),
    }
}

#[cfg(test)]
mod tests;
