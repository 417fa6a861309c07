//! Help rendering through the public API only.

use flag_sections::{
    Alignment, Flag, FlagDescriptor, Layout, Program, ValueKind, column_width, write_flag_line,
};
use rstest::{fixture, rstest};
use test_helpers::text::{flag_line, leading_spaces, lines_after, usage_column};

#[fixture]
fn program() -> Program {
    let mut program = Program::new().name("tool").version("v2");
    let general = program.new_section("General");
    general.description = "Common switches.".to_owned();
    general
        .bool_p("quiet", 'q', false, "Suppress output")
        .string("profile", "default", "Profile to load\nfrom the profile directory");
    program
        .new_section("Limits")
        .uint("max-connections", 64, "Connection ceiling")
        .int_list("offsets", &[-1, 2], "Offsets applied in order")
        .bool_list("toggles", &[], "Feature toggles");
    program
}

#[rstest]
fn renders_the_whole_document(mut program: Program) {
    assert_eq!(
        program.render_help(),
        concat!(
            "tool v2\n",
            "General:\n",
            "  Common switches.\n",
            "  -q, --quiet              Suppress output\n",
            "      --profile            Profile to load\n",
            "                           from the profile directory (default: \"default\")\n",
            "\n",
            "Limits:\n",
            "      --max-connections    Connection ceiling (default: 64)\n",
            "      --offsets            Offsets applied in order (default: [-1,2])\n",
            "      --toggles            Feature toggles\n",
        )
    );
}

#[rstest]
fn continuation_lines_sit_under_the_usage(mut program: Program) {
    let help = program.render_help();
    let first = flag_line(&help, "profile").unwrap_or_else(|| panic!("no --profile in {help}"));
    let column = usage_column(first, "Profile to load");
    let continuation = lines_after(&help, "General:")
        .into_iter()
        .find(|line| line.trim_start().starts_with("from the profile"))
        .unwrap_or_else(|| panic!("no continuation in {help}"));

    assert_eq!(column, Some(27));
    assert_eq!(Some(leading_spaces(continuation)), column);
}

#[rstest]
fn per_section_layout_narrows_short_sections(program: Program) {
    let mut narrow = program.with_layout(Layout {
        alignment: Alignment::PerSection,
        ..Layout::default()
    });
    let help = narrow.render_help();
    let quiet = flag_line(&help, "quiet").unwrap_or_else(|| panic!("no --quiet in {help}"));
    assert_eq!(usage_column(quiet, "Suppress"), Some(19));
}

#[test]
fn layout_changes_apply_to_later_sections_only() {
    let mut program = Program::new();
    program.new_section("Before").bool("alpha", true, "First");
    program.indentation = 0;
    program.padding = 1;
    program.new_section("After").bool("beta", true, "Second");

    assert_eq!(
        program.render_help(),
        concat!(
            "Before:\n",
            "      --alpha    First (default: true)\n",
            "\n",
            "After:\n",
            "    --beta  Second (default: true)\n",
        )
    );
}

/// Descriptor backed by another flag parser, rendered without a `Section`.
struct Foreign {
    name: &'static str,
    kind: ValueKind,
    default: &'static str,
}

impl FlagDescriptor for Foreign {
    fn name(&self) -> &str {
        self.name
    }

    fn shorthand(&self) -> Option<char> {
        None
    }

    fn usage(&self) -> &str {
        "Imported"
    }

    fn default_text(&self) -> &str {
        self.default
    }

    fn value_kind(&self) -> ValueKind {
        self.kind
    }

    fn is_hidden(&self) -> bool {
        false
    }
}

#[rstest]
#[case(ValueKind::String, "", "    --mode  Imported\n")]
#[case(ValueKind::String, "fast", "    --mode  Imported (default: \"fast\")\n")]
#[case(ValueKind::Float, "0.5", "    --mode  Imported (default: 0.5)\n")]
#[case(ValueKind::UintList, "[]", "    --mode  Imported\n")]
fn foreign_descriptors_share_the_layout(
    #[case] kind: ValueKind,
    #[case] default: &'static str,
    #[case] expected: &str,
) {
    let foreign = Foreign {
        name: "mode",
        kind,
        default,
    };
    let mut out = String::new();
    write_flag_line(&mut out, &foreign, 0, column_width(0, 4, 2));
    assert_eq!(out, expected);
}

#[test]
fn hidden_flags_do_not_widen_the_column() {
    let mut program = Program::new();
    program
        .new_section("Visible")
        .bool("on", false, "Switch")
        .add(Flag::bool("a-very-long-hidden-switch", false, "Hidden").hidden(true));

    assert_eq!(
        program.render_help(),
        "Visible:\n      --on    Switch\n"
    );
}
