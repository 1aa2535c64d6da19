//! Localized diagnostic messages.

use serde::{Deserialize, Serialize};

use crate::patterns::Construct;
use crate::rule::Rule;
use crate::types::Diagnostic;

/// Language of diagnostic messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

/// Why an identifier fails its naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingProblem {
    /// Convention is `snake_case` and the identifier is not.
    NotSnakeCase,
    /// Convention is a camel case and the identifier has an underscore.
    ContainsUnderscore,
    /// Convention is `CapitalizedCamel` and the first letter is not uppercase.
    NotCapitalized,
    /// Convention is `lowerCamel` and the first letter is not lowercase.
    NotLowercase,
}

/// Body that a blank-line requirement follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    /// Class, interface or enum body.
    Class,
    /// Method body.
    Method,
}

/// A diagnostic message before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Naming convention violation.
    Naming {
        /// Kind of declaration.
        construct: Construct,
        /// What is wrong with the identifier.
        problem: NamingProblem,
    },
    /// Too many consecutive blank lines.
    ConsecutiveBlankLines {
        /// Length of the run.
        found: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Wrong number of blank lines after a class or method body.
    BlankLinesAfter {
        /// Body the blank lines follow.
        body: Body,
        /// Blank lines present.
        found: usize,
        /// Blank lines required.
        required: usize,
    },
    /// Whitespace rule with a fixed message.
    Whitespace(Rule),
}

impl Message {
    /// Returns the rule that reports this message.
    #[must_use]
    pub fn rule(self) -> Rule {
        match self {
            Self::Naming { construct, .. } => match construct {
                Construct::Class => Rule::ClassNaming,
                Construct::Method => Rule::MethodNaming,
                Construct::Variable => Rule::VariableNaming,
            },
            Self::ConsecutiveBlankLines { .. } => Rule::ConsecutiveBlankLines,
            Self::BlankLinesAfter { body, .. } => match body {
                Body::Class => Rule::BlankLinesAfterClass,
                Body::Method => Rule::BlankLinesAfterMethod,
            },
            Self::Whitespace(rule) => rule,
        }
    }

    /// Builds a diagnostic carrying this message rendered in `locale`.
    #[must_use]
    pub fn at(self, file: &str, line: usize, column: usize, locale: Locale) -> Diagnostic {
        Diagnostic::new(file, line, column, self.rule(), self.render(locale))
    }

    /// Renders the message text in `locale`.
    #[must_use]
    pub fn render(self, locale: Locale) -> String {
        match locale {
            Locale::En => self.render_en(),
            Locale::Ru => self.render_ru(),
        }
    }

    fn render_en(self) -> String {
        match self {
            Self::Naming { construct, problem } => {
                let subject = match construct {
                    Construct::Class => "class",
                    Construct::Method => "method",
                    Construct::Variable => "variable",
                };
                let requirement = match problem {
                    NamingProblem::NotSnakeCase => "must be snake_case",
                    NamingProblem::ContainsUnderscore => "must not contain underscores",
                    NamingProblem::NotCapitalized => "must start with an uppercase letter",
                    NamingProblem::NotLowercase => "must start with a lowercase letter",
                };
                format!("{subject} names {requirement}")
            }
            Self::ConsecutiveBlankLines { found, max } => {
                format!("found {found} consecutive blank lines, at most {max} allowed")
            }
            Self::BlankLinesAfter {
                body,
                found,
                required,
            } => {
                let subject = match body {
                    Body::Class => "class",
                    Body::Method => "method",
                };
                format!("found {found} blank lines after {subject}, expected {required}")
            }
            Self::Whitespace(rule) => whitespace_en(rule).to_string(),
        }
    }

    fn render_ru(self) -> String {
        match self {
            Self::Naming { construct, problem } => {
                let subject = match construct {
                    Construct::Class => "классов",
                    Construct::Method => "методов",
                    Construct::Variable => "переменных",
                };
                let requirement = match problem {
                    NamingProblem::NotSnakeCase => "должны быть в snake_case",
                    NamingProblem::ContainsUnderscore => "не должны быть в snake_case",
                    NamingProblem::NotCapitalized => "должны начинаться с заглавной буквы",
                    NamingProblem::NotLowercase => "должны начинаться со строчной буквы",
                };
                format!("Имена {subject} {requirement}")
            }
            Self::ConsecutiveBlankLines { found, max } => format!(
                "Обнаружено {found} последовательных пустых строк, а должно быть не больше {max}"
            ),
            Self::BlankLinesAfter {
                body,
                found,
                required,
            } => {
                let subject = match body {
                    Body::Class => "класса",
                    Body::Method => "метода",
                };
                format!("Обнаружено {found} пустых строк после {subject}, а должно быть {required}")
            }
            Self::Whitespace(rule) => whitespace_ru(rule).to_string(),
        }
    }
}

fn whitespace_en(rule: Rule) -> &'static str {
    match rule {
        Rule::SpaceAfterComma => "space required after comma",
        Rule::SpaceBeforeComma => "space before comma forbidden",
        Rule::SpaceBeforeSemicolon => "space before semicolon forbidden",
        Rule::SpaceBeforeDot => "space before dot forbidden",
        Rule::SpaceAfterDot => "space after dot forbidden",
        Rule::OperatorSpacing => "operators must be surrounded by spaces",
        Rule::SpaceBeforeOpenParen => "space before opening bracket forbidden",
        Rule::SpaceAfterOpenParen => "space after opening bracket forbidden",
        Rule::SpaceBeforeCloseParen => "space before closing bracket forbidden",
        Rule::SpaceAfterCloseParen => "space required after closing bracket",
        Rule::SpaceBeforeBrace => "space required before opening brace",
        Rule::MultipleSpaces => "multiple consecutive spaces forbidden",
        Rule::ClassNaming
        | Rule::MethodNaming
        | Rule::VariableNaming
        | Rule::ConsecutiveBlankLines
        | Rule::BlankLinesAfterClass
        | Rule::BlankLinesAfterMethod => rule.description(),
    }
}

fn whitespace_ru(rule: Rule) -> &'static str {
    match rule {
        Rule::SpaceAfterComma => "После запятой должен быть пробел",
        Rule::SpaceBeforeComma => "Не должно быть пробелов перед запятой",
        Rule::SpaceBeforeSemicolon => "Не должно быть пробелов перед точкой с запятой",
        Rule::SpaceBeforeDot => "Не должно быть пробелов перед точкой",
        Rule::SpaceAfterDot => "После точки не должен быть пробел",
        Rule::OperatorSpacing => "Операторы должны быть окружены пробелами",
        Rule::SpaceBeforeOpenParen => "Перед открывающейся скобкой не должно быть пробела",
        Rule::SpaceAfterOpenParen => "После открывающейся скобкой не должно быть пробела",
        Rule::SpaceBeforeCloseParen => "Перед закрывающейся скобкой не должно быть пробела",
        Rule::SpaceAfterCloseParen => "После закрывающейся скобки должен быть пробел",
        Rule::SpaceBeforeBrace => "Перед открывающей фигурной скобкой должен быть пробел",
        Rule::MultipleSpaces => "Не должно быть более одного пробела подряд внутри строки",
        Rule::ClassNaming
        | Rule::MethodNaming
        | Rule::VariableNaming
        | Rule::ConsecutiveBlankLines
        | Rule::BlankLinesAfterClass
        | Rule::BlankLinesAfterMethod => rule.description(),
    }
}
