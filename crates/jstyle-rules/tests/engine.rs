//! Integration test: configuration → engine → diagnostics.
//!
//! Uses fixture files under `tests/fixtures/` to verify the whole pipeline
//! from a configuration file to a rendered report.

use jstyle_core::{Configuration, Locale, Report, Rule, WhitespaceRules};
use jstyle_rules::Engine;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture should exist")
}

fn disabled() -> Configuration {
    let mut config = Configuration::default();
    config.whitespace = WhitespaceRules {
        around_operators: false,
        around_brackets: false,
        after_comma: false,
        before_comma: false,
        before_semicolon: false,
        around_dot: false,
        allow_multiple_spaces: true,
    };
    config.blank_lines.max_consecutive = 0;
    config.blank_lines.after_class = 0;
    config.blank_lines.after_method = 0;
    config
}

fn is_naming(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::ClassNaming | Rule::MethodNaming | Rule::VariableNaming
    )
}

fn is_bracket(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::SpaceBeforeOpenParen
            | Rule::SpaceAfterOpenParen
            | Rule::SpaceBeforeCloseParen
            | Rule::SpaceAfterCloseParen
            | Rule::SpaceBeforeBrace
    )
}

// ── Default configuration ──

#[test]
fn default_configuration_report() {
    let source = read_fixture("Greeter.java");
    let engine = Engine::new(&Configuration::default());

    let mut report = Report::new();
    report.add_file(engine.check_source(&source, "Greeter.java"));

    insta::assert_snapshot!(report.format_compact(), @r"
    Greeter.java:6:17: [JS102] method names must not contain underscores
    Greeter.java:4:17: [JS103] variable names must start with a lowercase letter
    Greeter.java:14:1: [JS203] found 0 blank lines after method, expected 2
    Greeter.java:11:18: [JS301] space required after comma
    Greeter.java:12:17: [JS306] operators must be surrounded by spaces
    Found 5 problem(s) in 1 of 1 file(s)
    ");
}

#[test]
fn checking_twice_gives_identical_output() {
    let source = read_fixture("Greeter.java");
    let engine = Engine::default();
    assert_eq!(
        engine.check_source(&source, "Greeter.java"),
        engine.check_source(&source, "Greeter.java")
    );
}

#[test]
fn lines_and_text_agree() {
    let source = read_fixture("Greeter.java");
    let lines: Vec<&str> = source.split_inclusive('\n').collect();
    let engine = Engine::default();
    assert_eq!(
        engine.check(&lines, "Greeter.java"),
        engine.check_source(&source, "Greeter.java")
    );
}

// ── Configuration file ──

#[test]
fn configuration_file_drives_checkers() {
    let path = fixture("snake.toml");
    let config = Configuration::from_file(&path).expect("fixture should parse");
    assert_eq!(config.locale, Locale::Ru);

    let source = read_fixture("Greeter.java");
    let diagnostics = Engine::new(&config).check_source(&source, "Greeter.java");

    assert_eq!(diagnostics.len(), 1, "{diagnostics:#?}");
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.rule, Rule::VariableNaming);
    assert_eq!((diagnostic.line, diagnostic.column), (4, 17));
    assert_eq!(
        diagnostic.message,
        "Имена переменных должны быть в snake_case"
    );
}

// ── Edge cases ──

#[test]
fn empty_input_has_no_diagnostics() {
    let engine = Engine::default();
    assert!(engine.check::<&str>(&[], "Empty.java").is_empty());
    assert!(engine.check_source("", "Empty.java").is_empty());
}

#[test]
fn disabled_checks_report_only_naming() {
    let lines = [
        "class my_class {",
        "int a ,b;",
        "",
        "",
        "",
        "",
        "x=5  ;",
        "obj . call (  a )",
        "}",
    ];
    let diagnostics = Engine::new(&disabled()).check(&lines, "A.java");
    assert!(diagnostics.iter().all(|d| is_naming(d.rule)));
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn keyword_brackets_and_method_call() {
    let engine = Engine::new(&Configuration::default());

    let loop_line = engine.check(&["for (i = 0; i < 10; i++)"], "A.java");
    assert!(!loop_line.iter().any(|d| is_bracket(d.rule)));

    let call = engine.check(&["method (arg)"], "A.java");
    let brackets: Vec<(usize, &str)> = call
        .iter()
        .filter(|d| d.rule == Rule::SpaceBeforeOpenParen)
        .map(|d| (d.column, d.message.as_str()))
        .collect();
    let expected = vec![(7, "space before opening bracket forbidden")];
    assert_eq!(brackets, expected);
}

#[test]
fn consecutive_blank_lines_from_engine() {
    let diagnostics = Engine::default().check(&["line1", "", "", "", "line2"], "A.java");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].rule, Rule::ConsecutiveBlankLines);
    assert_eq!((diagnostics[0].line, diagnostics[0].column), (4, 1));
    assert_eq!(
        diagnostics[0].message,
        "found 3 consecutive blank lines, at most 2 allowed"
    );
}
