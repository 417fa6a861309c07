//! Helpers for inspecting rendered help text in assertions.
//!
//! Columns are counted in characters, matching how the renderer measures
//! flag names.

/// Returns the help line that renders the long flag `--{long}`, without its
/// trailing newline.
///
/// Longer flags sharing the prefix do not match, so `dry` does not select the
/// `--dry-run` line.
#[must_use]
pub fn flag_line<'a>(help: &'a str, long: &str) -> Option<&'a str> {
    let needle = format!("--{long}");
    help.lines().find(|line| {
        line.match_indices(&needle).any(|(start, _)| {
            let rest = line.get(start + needle.len()..).unwrap_or_default();
            !rest
                .chars()
                .next()
                .is_some_and(|ch| ch.is_alphanumeric() || ch == '-')
        })
    })
}

/// Character index at which `usage` starts within `line`.
#[must_use]
pub fn usage_column(line: &str, usage: &str) -> Option<usize> {
    line.find(usage)
        .and_then(|byte| line.get(..byte))
        .map(|before| before.chars().count())
}

/// Number of leading spaces on `line`.
#[must_use]
pub fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|ch| *ch == ' ').count()
}

/// Lines of the block introduced by the title line `heading`, up to the next
/// blank line. The title itself is not included.
#[must_use]
pub fn lines_after<'a>(help: &'a str, heading: &str) -> Vec<&'a str> {
    help.lines()
        .skip_while(|line| *line != heading)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{flag_line, leading_spaces, lines_after, usage_column};

    const HELP: &str = concat!(
        "General:\n",
        "  -v, --verbose    Enable verbose output\n",
        "      --dry-run    Trial run\n",
        "      --dry        Short form\n",
        "\n",
        "Output:\n",
        "      --format     Format\n",
    );

    #[test]
    fn flag_line_matches_whole_names() {
        assert_eq!(flag_line(HELP, "dry"), Some("      --dry        Short form"));
        assert_eq!(flag_line(HELP, "dry-run"), Some("      --dry-run    Trial run"));
        assert_eq!(flag_line(HELP, "missing"), None);
    }

    #[test]
    fn usage_column_counts_characters() {
        assert_eq!(usage_column("  -v, --verbose    Enable", "Enable"), Some(19));
        assert_eq!(usage_column("  ü  x", "x"), Some(5));
        assert_eq!(usage_column("abc", "z"), None);
    }

    #[test]
    fn leading_spaces_stops_at_text() {
        assert_eq!(leading_spaces("    --x"), 4);
        assert_eq!(leading_spaces("x"), 0);
    }

    #[test]
    fn lines_after_collects_one_block() {
        assert_eq!(
            lines_after(HELP, "Output:"),
            ["      --format     Format"]
        );
        assert_eq!(lines_after(HELP, "General:").len(), 3);
        assert!(lines_after(HELP, "Missing:").is_empty());
    }
}
