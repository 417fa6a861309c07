//! Unit tests for the value-kind table and default annotation rules.

use rstest::rstest;

use super::{
    DefaultPolicy, Quoting, ValueKind, format_default, kind_table, should_print_default,
};
use crate::FlagSectionsError;

#[rstest]
#[case(ValueKind::Bool, "bool")]
#[case(ValueKind::String, "string")]
#[case(ValueKind::Int, "int")]
#[case(ValueKind::Uint, "uint")]
#[case(ValueKind::Float, "float64")]
#[case(ValueKind::StringList, "stringSlice")]
#[case(ValueKind::IntList, "intSlice")]
#[case(ValueKind::UintList, "uintSlice")]
#[case(ValueKind::BoolList, "boolSlice")]
fn tags_parse_back_to_their_kind(#[case] kind: ValueKind, #[case] tag: &str) {
    assert_eq!(kind.tag(), tag);
    assert_eq!(kind.to_string(), tag);
    assert!(matches!(tag.parse::<ValueKind>(), Ok(parsed) if parsed == kind));
}

#[test]
fn unknown_tag_is_rejected() {
    match "duration".parse::<ValueKind>() {
        Err(FlagSectionsError::UnknownValueKind(tag)) => assert_eq!(tag, "duration"),
        other => panic!("expected UnknownValueKind, got {other:?}"),
    }
}

#[test]
fn table_rows_describe_their_own_kind() {
    let rows: Vec<_> = kind_table().collect();
    assert_eq!(rows.len(), ValueKind::ALL.len());
    for (row, kind) in rows.iter().zip(ValueKind::ALL) {
        assert_eq!(row.kind, kind);
    }
}

#[test]
fn only_strings_are_quoted() {
    for kind in ValueKind::ALL {
        let expected = if kind == ValueKind::String {
            Quoting::Quoted
        } else {
            Quoting::Bare
        };
        assert_eq!(kind.quoting(), expected, "quoting for {kind}");
    }
}

#[rstest]
#[case(ValueKind::StringList)]
#[case(ValueKind::IntList)]
#[case(ValueKind::UintList)]
#[case(ValueKind::BoolList)]
fn list_kinds_hide_only_the_empty_list(#[case] kind: ValueKind) {
    assert!(kind.is_list());
    assert_eq!(kind.default_policy(), DefaultPolicy::WhenNotEmptyList);
    assert!(!should_print_default(kind, "[]"));
    assert!(should_print_default(kind, "[1,2]"));
    assert!(should_print_default(kind, ""));
}

#[rstest]
#[case("true", true)]
#[case("false", false)]
#[case("", false)]
#[case("TRUE", false)]
fn bool_default_shown_only_when_true(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(should_print_default(ValueKind::Bool, text), expected);
}

#[rstest]
#[case(ValueKind::String, "", false)]
#[case(ValueKind::String, "x", true)]
#[case(ValueKind::Int, "0", true)]
#[case(ValueKind::Uint, "", false)]
#[case(ValueKind::Float, "1.5", true)]
fn scalar_default_shown_when_not_empty(
    #[case] kind: ValueKind,
    #[case] text: &str,
    #[case] expected: bool,
) {
    assert!(!kind.is_list());
    assert_eq!(should_print_default(kind, text), expected);
}

#[rstest]
#[case(ValueKind::String, "x", " (default: \"x\")")]
#[case(ValueKind::Int, "5432", " (default: 5432)")]
#[case(ValueKind::Bool, "true", " (default: true)")]
#[case(ValueKind::StringList, "[a,b]", " (default: [a,b])")]
fn default_annotation_format(#[case] kind: ValueKind, #[case] text: &str, #[case] expected: &str) {
    assert_eq!(format_default(kind, text), expected);
}
