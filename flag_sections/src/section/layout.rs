//! Column layout primitives shared by every section.
//!
//! These helpers only see flags through [`FlagDescriptor`], so they can be
//! exercised with stub descriptors.

use crate::flag::FlagDescriptor;
use crate::kind::{format_default, should_print_default};

/// Width reserved for a shorthand prefix such as `-v, `.
///
/// Reserved even when a flag has no shorthand so long names line up.
pub const SHORTHAND_WIDTH: usize = 4;

/// Width of the `--` long-flag prefix.
pub const LONG_PREFIX_WIDTH: usize = 2;

/// Computes the column at which usage text starts.
///
/// The result is never below `indentation + 6 + padding`.
///
/// # Examples
///
/// ```
/// use flag_sections::column_width;
///
/// // "  -v, --verbose    " puts usage at column 19.
/// assert_eq!(column_width(2, "verbose".len(), 4), 19);
/// ```
#[must_use]
pub const fn column_width(indentation: usize, max_name_len: usize, padding: usize) -> usize {
    indentation + SHORTHAND_WIDTH + LONG_PREFIX_WIDTH + max_name_len + padding
}

/// Writes `text` line by line, each prefixed by `prefix` and ending in `\n`.
pub(crate) fn write_with_prefix(out: &mut String, text: &str, prefix: &str) {
    for line in text.split('\n') {
        out.push_str(prefix);
        out.push_str(line);
        out.push('\n');
    }
}

/// Writes one flag entry, terminated by `\n`.
///
/// Usage text starts at `column_width`; when the flag name already reaches
/// past that column no padding is added. Continuation lines of multi-line
/// usage are indented by exactly `column_width` spaces.
pub fn write_flag_line<F: FlagDescriptor + ?Sized>(
    out: &mut String,
    flag: &F,
    indentation: usize,
    column_width: usize,
) {
    let mut line = " ".repeat(indentation);
    match flag.shorthand() {
        Some(short) => {
            line.push('-');
            line.push(short);
            line.push_str(", ");
        }
        None => line.push_str(&" ".repeat(SHORTHAND_WIDTH)),
    }
    line.push_str("--");
    line.push_str(flag.name());

    let written = line.chars().count();
    line.push_str(&" ".repeat(column_width.saturating_sub(written)));

    let usage = flag.usage();
    if !usage.is_empty() {
        let continuation = " ".repeat(column_width);
        for (index, usage_line) in usage.split('\n').enumerate() {
            if index > 0 {
                line.push('\n');
                line.push_str(&continuation);
            }
            line.push_str(usage_line);
        }

        let kind = flag.value_kind();
        let default_text = flag.default_text();
        if should_print_default(kind, default_text) {
            line.push_str(&format_default(kind, default_text));
        }
    }

    out.push_str(&line);
    out.push('\n');
}
