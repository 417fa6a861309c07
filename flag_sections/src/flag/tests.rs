//! Unit tests for flag construction and the `clap` adapter.

use clap::{ArgAction, ArgMatches, Command};
use rstest::rstest;

use super::{Flag, FlagDescriptor};
use crate::kind::ValueKind;

fn matches_for(flag: &Flag, args: &[&str]) -> ArgMatches {
    Command::new("test")
        .no_binary_name(true)
        .arg(flag.to_arg())
        .try_get_matches_from(args.iter().copied())
        .unwrap_or_else(|err| panic!("parse {args:?}: {err}"))
}

#[rstest]
#[case(Flag::bool("verbose", false, "u"), "false", ValueKind::Bool)]
#[case(Flag::bool("color", true, "u"), "true", ValueKind::Bool)]
#[case(Flag::string("config", "", "u"), "", ValueKind::String)]
#[case(Flag::int("db-port", 5432, "u"), "5432", ValueKind::Int)]
#[case(Flag::int("offset", -3, "u"), "-3", ValueKind::Int)]
#[case(Flag::uint("workers", 8, "u"), "8", ValueKind::Uint)]
#[case(Flag::float("factor", 1.5, "u"), "1.5", ValueKind::Float)]
#[case(Flag::string_list("tags", &["a", "b"], "u"), "[a,b]", ValueKind::StringList)]
#[case(Flag::int_list("ports", &[], "u"), "[]", ValueKind::IntList)]
#[case(Flag::uint_list("ids", &[1, 2, 3], "u"), "[1,2,3]", ValueKind::UintList)]
#[case(Flag::bool_list("mask", &[true, false], "u"), "[true,false]", ValueKind::BoolList)]
fn default_text_follows_kind(#[case] flag: Flag, #[case] text: &str, #[case] kind: ValueKind) {
    assert_eq!(flag.default_text(), text);
    assert_eq!(flag.value_kind(), kind);
}

#[test]
fn builder_sets_shorthand_and_hidden() {
    let flag = Flag::bool("trace", false, "Enable tracing")
        .short('t')
        .hidden(true);
    assert_eq!(flag.name(), "trace");
    assert_eq!(flag.shorthand(), Some('t'));
    assert_eq!(flag.usage(), "Enable tracing");
    assert!(flag.is_hidden());
}

#[test]
fn empty_defaults_are_not_registered() {
    assert!(Flag::string("config", "", "u").default_values().is_empty());
    assert!(Flag::string_list("tags", &[] as &[&str], "u").default_values().is_empty());
    assert_eq!(Flag::int_list("ports", &[80, 443], "u").default_values(), ["80", "443"]);
}

#[test]
fn arg_carries_names_and_visibility() {
    let arg = Flag::string("output", "-", "Output file")
        .short('o')
        .hidden(true)
        .to_arg();
    assert_eq!(arg.get_id().as_str(), "output");
    assert_eq!(arg.get_long(), Some("output"));
    assert_eq!(arg.get_short(), Some('o'));
    assert!(arg.is_hide_set());
    assert!(matches!(arg.get_action(), ArgAction::Set));
    let defaults: Vec<String> = arg
        .get_default_values()
        .iter()
        .map(|value| value.to_string_lossy().into_owned())
        .collect();
    assert_eq!(defaults, ["-"]);
}

#[test]
fn list_arg_appends() {
    let arg = Flag::string_list("tags", &[] as &[&str], "u").to_arg();
    assert!(matches!(arg.get_action(), ArgAction::Append));
    assert_eq!(arg.get_value_delimiter(), Some(','));
}

#[rstest]
#[case(&[], false)]
#[case(&["--verbose"], true)]
#[case(&["--verbose=true"], true)]
#[case(&["--verbose=false"], false)]
#[case(&["-v"], true)]
fn bool_switch_accepts_optional_value(#[case] args: &[&str], #[case] expected: bool) {
    let flag = Flag::bool("verbose", false, "u").short('v');
    let matches = matches_for(&flag, args);
    assert_eq!(matches.get_one::<bool>("verbose").copied(), Some(expected));
}

#[test]
fn true_bool_can_be_switched_off() {
    let flag = Flag::bool("color", true, "u");
    let matches = matches_for(&flag, &["--color=false"]);
    assert_eq!(matches.get_one::<bool>("color").copied(), Some(false));
}

#[test]
fn list_values_split_on_commas() {
    let flag = Flag::int_list("ports", &[8080], "u");
    let defaulted = matches_for(&flag, &[]);
    let ports: Vec<i64> = defaulted
        .get_many::<i64>("ports")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    assert_eq!(ports, [8080]);

    let given = matches_for(&flag, &["--ports", "1,2", "--ports=3"]);
    let ports: Vec<i64> = given
        .get_many::<i64>("ports")
        .map(|values| values.copied().collect())
        .unwrap_or_default();
    assert_eq!(ports, [1, 2, 3]);
}

#[test]
fn malformed_value_is_rejected() {
    let flag = Flag::uint("workers", 1, "u");
    let result = Command::new("test")
        .no_binary_name(true)
        .arg(flag.to_arg())
        .try_get_matches_from(["--workers", "-3"]);
    assert!(result.is_err());
}
