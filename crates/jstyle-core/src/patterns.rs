//! Single-line declaration patterns.
//!
//! There is no parse tree: each construct is recognized by one regex applied
//! to one line. The patterns accept some false positives and negatives; that
//! approximation is part of their contract.
//!
//! The `regex` crate has no look-around, so two conditions are expressed
//! outside the expression itself:
//!
//! - the type token must not start with a modifier word (checked after the
//!   match on the captured type),
//! - a variable name must not be followed directly by `(` (a trailing
//!   `(?:[^(]|$)` element).
//!
//! Both accept exactly the lines the look-around forms would: the regex
//! engine prefers consuming more modifiers, so when the preferred match has a
//! modifier-prefixed type, every other candidate does too.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::char_index;

/// Kind of declaration a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `class`, `interface` or `enum` declaration.
    Class,
    /// Method declaration with a parameter list on the same line.
    Method,
    /// Field or local variable declaration.
    Variable,
}

/// Modifiers allowed before class and method declarations.
pub const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "static",
    "final",
    "synchronized",
    "abstract",
    "default",
];

/// Modifiers allowed before variable declarations.
pub const VARIABLE_MODIFIERS: &[&str] = &[
    "public",
    "private",
    "protected",
    "static",
    "final",
    "synchronized",
    "abstract",
    "default",
    "volatile",
];

/// Type tokens that mark a variable match as a false positive.
pub const RESERVED_TYPE_WORDS: &[&str] = &[
    "class", "return", "for", "switch", "case", "if", "extends", "import", "package",
];

/// A declaration found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationMatch<'a> {
    /// Declared identifier.
    pub identifier: &'a str,
    /// 1-based character column of the identifier.
    pub column: usize,
    /// Type token before the identifier, trimmed. `None` for classes.
    pub type_token: Option<&'a str>,
}

/// A compiled single-line declaration pattern.
#[derive(Debug)]
pub struct DeclarationPattern {
    construct: Construct,
    regex: Regex,
    /// Capture group holding the type token, if the pattern has one.
    type_group: Option<usize>,
    /// Capture group holding the identifier.
    identifier_group: usize,
    /// Words the type token must not start with.
    forbidden_type_prefixes: &'static [&'static str],
}

impl DeclarationPattern {
    /// Class, interface or enum declaration.
    ///
    /// Optional modifiers, then `class|interface|enum`, then the name.
    #[must_use]
    pub fn class() -> Self {
        Self::compile(
            Construct::Class,
            r"(?x)
            ^\s*
            (?:(?:public|private|protected|static|final|synchronized|abstract|default)\s+)*
            (?:class|interface|enum)\s+
            ([A-Za-z_]\w*)
            ",
            None,
            1,
            &[],
        )
    }

    /// Method declaration.
    ///
    /// Optional modifiers, a return type (`\w+`, optional generic suffix
    /// without nested `>`, any number of `[]`), the name and a parameter list
    /// closed on the same line.
    #[must_use]
    pub fn method() -> Self {
        Self::compile(
            Construct::Method,
            r"(?x)
            ^\s*
            (?:(?:public|private|protected|static|final|synchronized|abstract|default)\s+)*
            (\w+(?:\s*<[^>]+>)?(?:\s*\[\s*\])*\s*)
            \s+
            ([a-zA-Z_]\w*)
            \s*\([^)]*\)
            ",
            Some(1),
            2,
            MODIFIERS,
        )
    }

    /// Variable declaration.
    ///
    /// Optional modifiers (including `volatile`), a type (`\w+`, any number
    /// of generic and array groups) and a name not directly followed by `(`.
    #[must_use]
    pub fn variable() -> Self {
        Self::compile(
            Construct::Variable,
            r"(?x)
            ^\s*
            (?:(?:public|private|protected|static|final|synchronized|abstract|default|volatile)\s+)*
            (\w+(?:\s*<.+>)*(?:\s*\[.*\])*)
            \s+
            \b([a-zA-Z_]\w*)\b
            (?:[^(]|$)
            ",
            Some(1),
            2,
            VARIABLE_MODIFIERS,
        )
    }

    #[allow(clippy::expect_used)] // literal patterns above
    fn compile(
        construct: Construct,
        pattern: &str,
        type_group: Option<usize>,
        identifier_group: usize,
        forbidden_type_prefixes: &'static [&'static str],
    ) -> Self {
        Self {
            construct,
            regex: Regex::new(pattern).expect("Invalid declaration regex"),
            type_group,
            identifier_group,
            forbidden_type_prefixes,
        }
    }

    /// Returns the kind of declaration this pattern recognizes.
    #[must_use]
    pub fn construct(&self) -> Construct {
        self.construct
    }

    /// Matches a single line.
    #[must_use]
    pub fn find<'a>(&self, line: &'a str) -> Option<DeclarationMatch<'a>> {
        let caps = self.regex.captures(line)?;
        let identifier = caps.get(self.identifier_group)?;

        let type_token = match self.type_group {
            Some(group) => {
                let token = caps.get(group)?.as_str();
                if self
                    .forbidden_type_prefixes
                    .iter()
                    .any(|prefix| token.starts_with(prefix))
                {
                    return None;
                }
                Some(token.trim_end())
            }
            None => None,
        };

        Some(DeclarationMatch {
            identifier: identifier.as_str(),
            column: char_index(line, identifier.start()) + 1,
            type_token,
        })
    }

    /// Returns true if the line contains this declaration.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.find(line).is_some()
    }
}

/// Shared class pattern.
pub static CLASS: LazyLock<DeclarationPattern> = LazyLock::new(DeclarationPattern::class);

/// Shared method pattern.
pub static METHOD: LazyLock<DeclarationPattern> = LazyLock::new(DeclarationPattern::method);

/// Shared variable pattern.
pub static VARIABLE: LazyLock<DeclarationPattern> = LazyLock::new(DeclarationPattern::variable);

/// Returns the shared pattern for `construct`.
#[must_use]
pub fn pattern_for(construct: Construct) -> &'static DeclarationPattern {
    match construct {
        Construct::Class => &*CLASS,
        Construct::Method => &*METHOD,
        Construct::Variable => &*VARIABLE,
    }
}

/// Returns true if the line starts with `return`.
///
/// A return statement such as `return foo(bar);` looks like a method header to
/// the method pattern, so callers skip these lines.
#[must_use]
pub fn is_return_statement(line: &str) -> bool {
    line.trim_start().starts_with("return")
}

/// Returns true if a variable match's type token is a keyword, which makes
/// the match a false positive (e.g. `for (int i ...`).
#[must_use]
pub fn is_reserved_type(type_token: &str) -> bool {
    RESERVED_TYPE_WORDS.contains(&type_token)
}
