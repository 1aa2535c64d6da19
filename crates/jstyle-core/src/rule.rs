//! Rule catalog and the checker trait.

use serde::Serialize;

use crate::context::SourceFile;
use crate::types::Diagnostic;

/// Every rule a checker can report.
///
/// The set is closed: adding a rule means adding a variant here, and every
/// `match` over rules has to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Class, interface and enum names follow the configured convention.
    ClassNaming,
    /// Method names follow the configured convention.
    MethodNaming,
    /// Variable names follow the configured convention.
    VariableNaming,
    /// Limits runs of consecutive blank lines.
    ConsecutiveBlankLines,
    /// Requires a number of blank lines after a class body.
    BlankLinesAfterClass,
    /// Requires a number of blank lines after a method body.
    BlankLinesAfterMethod,
    /// Requires a space after `,`.
    SpaceAfterComma,
    /// Forbids whitespace before `,`.
    SpaceBeforeComma,
    /// Forbids whitespace before `;`.
    SpaceBeforeSemicolon,
    /// Forbids whitespace before `.`.
    SpaceBeforeDot,
    /// Forbids whitespace after `.`.
    SpaceAfterDot,
    /// Requires whitespace around the first operator of a line.
    OperatorSpacing,
    /// Forbids whitespace between a name and `(`.
    SpaceBeforeOpenParen,
    /// Forbids whitespace after `(`.
    SpaceAfterOpenParen,
    /// Forbids whitespace before `)`.
    SpaceBeforeCloseParen,
    /// Requires a space between `)` and a following word.
    SpaceAfterCloseParen,
    /// Requires a space before `{`.
    SpaceBeforeBrace,
    /// Forbids runs of two or more spaces inside a line.
    MultipleSpaces,
}

impl Rule {
    /// All rules, in code order.
    pub const ALL: [Self; 18] = [
        Self::ClassNaming,
        Self::MethodNaming,
        Self::VariableNaming,
        Self::ConsecutiveBlankLines,
        Self::BlankLinesAfterClass,
        Self::BlankLinesAfterMethod,
        Self::SpaceAfterComma,
        Self::SpaceBeforeComma,
        Self::SpaceBeforeSemicolon,
        Self::SpaceBeforeDot,
        Self::SpaceAfterDot,
        Self::OperatorSpacing,
        Self::SpaceBeforeOpenParen,
        Self::SpaceAfterOpenParen,
        Self::SpaceBeforeCloseParen,
        Self::SpaceAfterCloseParen,
        Self::SpaceBeforeBrace,
        Self::MultipleSpaces,
    ];

    /// Returns the stable rule code (e.g., "JS101").
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ClassNaming => "JS101",
            Self::MethodNaming => "JS102",
            Self::VariableNaming => "JS103",
            Self::ConsecutiveBlankLines => "JS201",
            Self::BlankLinesAfterClass => "JS202",
            Self::BlankLinesAfterMethod => "JS203",
            Self::SpaceAfterComma => "JS301",
            Self::SpaceBeforeComma => "JS302",
            Self::SpaceBeforeSemicolon => "JS303",
            Self::SpaceBeforeDot => "JS304",
            Self::SpaceAfterDot => "JS305",
            Self::OperatorSpacing => "JS306",
            Self::SpaceBeforeOpenParen => "JS307",
            Self::SpaceAfterOpenParen => "JS308",
            Self::SpaceBeforeCloseParen => "JS309",
            Self::SpaceAfterCloseParen => "JS310",
            Self::SpaceBeforeBrace => "JS311",
            Self::MultipleSpaces => "JS312",
        }
    }

    /// Returns the kebab-case name of this rule (e.g., "class-naming").
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ClassNaming => "class-naming",
            Self::MethodNaming => "method-naming",
            Self::VariableNaming => "variable-naming",
            Self::ConsecutiveBlankLines => "consecutive-blank-lines",
            Self::BlankLinesAfterClass => "blank-lines-after-class",
            Self::BlankLinesAfterMethod => "blank-lines-after-method",
            Self::SpaceAfterComma => "space-after-comma",
            Self::SpaceBeforeComma => "space-before-comma",
            Self::SpaceBeforeSemicolon => "space-before-semicolon",
            Self::SpaceBeforeDot => "space-before-dot",
            Self::SpaceAfterDot => "space-after-dot",
            Self::OperatorSpacing => "operator-spacing",
            Self::SpaceBeforeOpenParen => "space-before-open-paren",
            Self::SpaceAfterOpenParen => "space-after-open-paren",
            Self::SpaceBeforeCloseParen => "space-before-close-paren",
            Self::SpaceAfterCloseParen => "space-after-close-paren",
            Self::SpaceBeforeBrace => "space-before-brace",
            Self::MultipleSpaces => "multiple-spaces",
        }
    }

    /// Returns a brief description of what this rule checks.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::ClassNaming => "Class, interface and enum names follow the naming convention",
            Self::MethodNaming => "Method names follow the naming convention",
            Self::VariableNaming => "Variable names follow the naming convention",
            Self::ConsecutiveBlankLines => "At most N consecutive blank lines",
            Self::BlankLinesAfterClass => "Exactly N blank lines after a class body",
            Self::BlankLinesAfterMethod => "Exactly N blank lines after a method body",
            Self::SpaceAfterComma => "A comma is followed by whitespace",
            Self::SpaceBeforeComma => "No whitespace before a comma",
            Self::SpaceBeforeSemicolon => "No whitespace before a semicolon",
            Self::SpaceBeforeDot => "No whitespace before a dot",
            Self::SpaceAfterDot => "No whitespace after a dot",
            Self::OperatorSpacing => "The first operator of a line is surrounded by spaces",
            Self::SpaceBeforeOpenParen => "No whitespace between a name and '(' (keywords exempt)",
            Self::SpaceAfterOpenParen => "No whitespace after '('",
            Self::SpaceBeforeCloseParen => "No whitespace before ')'",
            Self::SpaceAfterCloseParen => "A word after ')' is separated by a space",
            Self::SpaceBeforeBrace => "'{' is preceded by whitespace",
            Self::MultipleSpaces => "No runs of two or more spaces inside a line",
        }
    }

    /// Looks up a rule by code or name.
    #[must_use]
    pub fn from_code_or_name(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.code().eq_ignore_ascii_case(key) || rule.name() == key)
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A line-oriented style checker.
///
/// Checkers are built once from a [`Configuration`](crate::Configuration) and
/// hold no per-file state, so one instance can check any number of files.
///
/// # Example
///
/// ```ignore
/// use jstyle_core::{Checker, Diagnostic, Rule, SourceFile};
///
/// pub struct NoTabs;
///
/// impl Checker for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn rules(&self) -> &'static [Rule] { &[] }
///
///     fn check(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Checker: Send + Sync {
    /// Returns the kebab-case name of this checker (e.g., "naming").
    fn name(&self) -> &'static str;

    /// Returns the rules this checker can report.
    fn rules(&self) -> &'static [Rule];

    /// Checks a single file and returns the diagnostics found, in order.
    fn check(&self, source: &SourceFile<'_>) -> Vec<Diagnostic>;
}

/// Type alias for boxed `Checker` trait objects.
pub type CheckerBox = Box<dyn Checker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = Rule::ALL.iter().map(|r| r.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), Rule::ALL.len());
    }

    #[test]
    fn names_match_serde_representation() {
        for rule in Rule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule.name()));
        }
    }

    #[test]
    fn lookup_by_code_or_name() {
        assert_eq!(Rule::from_code_or_name("JS101"), Some(Rule::ClassNaming));
        assert_eq!(
            Rule::from_code_or_name("js306"),
            Some(Rule::OperatorSpacing)
        );
        assert_eq!(
            Rule::from_code_or_name("multiple-spaces"),
            Some(Rule::MultipleSpaces)
        );
        assert_eq!(Rule::from_code_or_name("no-such-rule"), None);
    }
}
