//! Whitespace around punctuation and operators.
//!
//! # Detected Patterns
//!
//! | Code | Pattern | Toggle |
//! |------|---------|--------|
//! | JS301 | `,x` | `after_comma` |
//! | JS302 | `x ,` | `before_comma` |
//! | JS307 | `call (` (keywords exempt) | `around_brackets` |
//! | JS308 | `( x` | `around_brackets` |
//! | JS309 | `x )` | `around_brackets` |
//! | JS310 | `)x` | `around_brackets` |
//! | JS311 | `x{` | `around_brackets` |
//! | JS306 | `x=1` (first operator of a line only) | `around_operators` |
//! | JS303 | `x ;` | `before_semicolon` |
//! | JS304 | `x .y` | `around_dot` |
//! | JS305 | `x. y` | `around_dot` |
//! | JS312 | `int  x` (not before `//`) | `allow_multiple_spaces = false` |
//!
//! Sub-checks run in the table's order, each over the whole file. Every
//! occurrence is reported; string literals and comments are not skipped.

use std::sync::LazyLock;

use jstyle_core::{
    char_index, Checker, Diagnostic, Locale, Message, Rule, SourceFile, WhitespaceRules,
};
use regex::Regex;

/// Checker name.
pub const NAME: &str = "whitespace";

const RULES: &[Rule] = &[
    Rule::SpaceAfterComma,
    Rule::SpaceBeforeComma,
    Rule::SpaceBeforeSemicolon,
    Rule::SpaceBeforeDot,
    Rule::SpaceAfterDot,
    Rule::OperatorSpacing,
    Rule::SpaceBeforeOpenParen,
    Rule::SpaceAfterOpenParen,
    Rule::SpaceBeforeCloseParen,
    Rule::SpaceAfterCloseParen,
    Rule::SpaceBeforeBrace,
    Rule::MultipleSpaces,
];

/// Words that may be followed by a space before `(`.
const PAREN_KEYWORDS: &[&str] = &["while", "for", "do", "if", "case", "switch", "catch"];

#[allow(clippy::expect_used)] // literal patterns below
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid whitespace regex")
}

static COMMA_WITHOUT_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r",\S"));
static SPACE_BEFORE_COMMA: LazyLock<Regex> = LazyLock::new(|| compile(r"\s,"));
static SPACE_BEFORE_OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| compile(r"(\w+)\s+\("));
static SPACE_AFTER_OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| compile(r"\(\s"));
static SPACE_BEFORE_CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| compile(r"\S\s+\)"));
static WORD_AFTER_CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| compile(r"\)\w"));
static BRACE_WITHOUT_SPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\S\{"));
static OPERATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"==|->|\+|-|\*|//|="));
static SPACE_BEFORE_SEMICOLON: LazyLock<Regex> = LazyLock::new(|| compile(r"\s;"));
static SPACE_BEFORE_DOT: LazyLock<Regex> = LazyLock::new(|| compile(r"\s\."));
static SPACE_AFTER_DOT: LazyLock<Regex> = LazyLock::new(|| compile(r"\.\s"));
static MULTIPLE_SPACES: LazyLock<Regex> = LazyLock::new(|| compile(r"\S\s\s+"));

/// Checks whitespace around punctuation and operators.
#[derive(Debug, Clone)]
pub struct WhitespaceChecker {
    rules: WhitespaceRules,
    locale: Locale,
}

impl Default for WhitespaceChecker {
    fn default() -> Self {
        Self::new(WhitespaceRules::default(), Locale::default())
    }
}

/// One source line with its 1-based number.
#[derive(Clone, Copy)]
struct Line<'a> {
    no: usize,
    text: &'a str,
}

impl Line<'_> {
    /// Column of the character at byte `byte`, shifted by `offset`.
    fn column(self, byte: usize, offset: usize) -> usize {
        char_index(self.text, byte) + offset
    }
}

/// Collects diagnostics of one file.
struct Sink<'s> {
    file: &'s str,
    locale: Locale,
    diagnostics: Vec<Diagnostic>,
}

impl Sink<'_> {
    fn push(&mut self, rule: Rule, line: Line<'_>, column: usize) {
        let diagnostic = Message::Whitespace(rule).at(self.file, line.no, column, self.locale);
        self.diagnostics.push(diagnostic);
    }

    /// Records every match of `regex` on `line`, at match start plus `offset`.
    fn each_match(&mut self, rule: Rule, regex: &Regex, line: Line<'_>, offset: usize) {
        for m in regex.find_iter(line.text) {
            self.push(rule, line, line.column(m.start(), offset));
        }
    }
}

impl WhitespaceChecker {
    /// Creates a checker for the given toggles.
    #[must_use]
    pub fn new(rules: WhitespaceRules, locale: Locale) -> Self {
        Self { rules, locale }
    }

    fn check_after_comma(sink: &mut Sink<'_>, lines: &[&str]) {
        for line in numbered(lines) {
            sink.each_match(Rule::SpaceAfterComma, &COMMA_WITHOUT_SPACE, line, 1);
        }
    }

    fn check_before_comma(sink: &mut Sink<'_>, lines: &[&str]) {
        for line in numbered(lines) {
            sink.each_match(Rule::SpaceBeforeComma, &SPACE_BEFORE_COMMA, line, 1);
        }
    }

    /// Parenthesis and brace spacing, all bracket rules for one line before
    /// the next line.
    fn check_brackets(sink: &mut Sink<'_>, lines: &[&str]) {
        for line in numbered(lines) {
            if line.text.contains('(') {
                for caps in SPACE_BEFORE_OPEN_PAREN.captures_iter(line.text) {
                    let (Some(whole), Some(word)) = (caps.get(0), caps.get(1)) else {
                        continue;
                    };
                    if PAREN_KEYWORDS.contains(&word.as_str()) {
                        continue;
                    }
                    // Reported at the index of `(`, one left of its column.
                    let column = line.column(whole.end() - 1, 0);
                    sink.push(Rule::SpaceBeforeOpenParen, line, column);
                }
                sink.each_match(Rule::SpaceAfterOpenParen, &SPACE_AFTER_OPEN_PAREN, line, 2);
            }

            if line.text.contains(')') {
                for m in SPACE_BEFORE_CLOSE_PAREN.find_iter(line.text) {
                    let column = line.column(m.end() - 1, 0);
                    sink.push(Rule::SpaceBeforeCloseParen, line, column);
                }
                sink.each_match(Rule::SpaceAfterCloseParen, &WORD_AFTER_CLOSE_PAREN, line, 0);
            }

            if line.text.contains('{') {
                sink.each_match(Rule::SpaceBeforeBrace, &BRACE_WITHOUT_SPACE, line, 1);
            }
        }
    }

    /// Only the first operator of each line is validated.
    fn check_operators(sink: &mut Sink<'_>, lines: &[&str]) {
        // A missing neighbour counts as non-whitespace.
        let spaced = |c: Option<char>| c.is_some_and(char::is_whitespace);

        for line in numbered(lines) {
            let Some(m) = OPERATOR.find(line.text) else {
                continue;
            };
            let before = line.text[..m.start()].chars().next_back();
            let after = line.text[m.end()..].chars().next();
            if !(spaced(before) && spaced(after)) {
                sink.push(Rule::OperatorSpacing, line, line.column(m.start(), 1));
            }
        }
    }

    fn check_before_semicolon(sink: &mut Sink<'_>, lines: &[&str]) {
        for line in numbered(lines) {
            sink.each_match(Rule::SpaceBeforeSemicolon, &SPACE_BEFORE_SEMICOLON, line, 1);
        }
    }

    fn check_around_dot(sink: &mut Sink<'_>, lines: &[&str]) {
        for line in numbered(lines) {
            sink.each_match(Rule::SpaceBeforeDot, &SPACE_BEFORE_DOT, line, 1);
            sink.each_match(Rule::SpaceAfterDot, &SPACE_AFTER_DOT, line, 1);
        }
    }

    /// Runs of spaces before a `//` comment are alignment and allowed.
    fn check_multiple_spaces(sink: &mut Sink<'_>, lines: &[&str]) {
        for line in numbered(lines) {
            for m in MULTIPLE_SPACES.find_iter(line.text) {
                if line.text[m.end()..].starts_with('/') {
                    continue;
                }
                sink.push(Rule::MultipleSpaces, line, line.column(m.start(), 1));
            }
        }
    }
}

impl Checker for WhitespaceChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }

    fn check(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        let rules = &self.rules;
        let lines = source.lines.as_slice();
        let mut sink = Sink {
            file: source.name,
            locale: self.locale,
            diagnostics: Vec::new(),
        };

        if rules.after_comma {
            Self::check_after_comma(&mut sink, lines);
        }
        if rules.before_comma {
            Self::check_before_comma(&mut sink, lines);
        }
        if rules.around_brackets {
            Self::check_brackets(&mut sink, lines);
        }
        if rules.around_operators {
            Self::check_operators(&mut sink, lines);
        }
        if rules.before_semicolon {
            Self::check_before_semicolon(&mut sink, lines);
        }
        if rules.around_dot {
            Self::check_around_dot(&mut sink, lines);
        }
        if !rules.allow_multiple_spaces {
            Self::check_multiple_spaces(&mut sink, lines);
        }

        tracing::trace!(count = sink.diagnostics.len(), "whitespace check done");
        sink.diagnostics
    }
}

fn numbered<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = Line<'a>> + 'a {
    lines
        .iter()
        .enumerate()
        .map(|(i, &text)| Line { no: i + 1, text })
}
