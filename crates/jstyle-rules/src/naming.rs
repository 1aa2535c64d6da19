//! Identifier naming conventions.
//!
//! # Detected Patterns
//!
//! - Class, interface and enum names (`JS101`)
//! - Method names (`JS102`)
//! - Field and local variable names (`JS103`)
//!
//! Each identifier is checked against the configured [`Convention`]:
//! `snake-case` identifiers must satisfy [`is_snake_case`]; camel-case
//! identifiers must not contain `_` and must start with an upper- or
//! lowercase letter. One identifier can yield two diagnostics at the same
//! position (e.g. `SOME_VAR` under `lower-camel`).

use jstyle_core::patterns::{self, DeclarationMatch};
use jstyle_core::{
    Checker, Construct, Convention, Diagnostic, Locale, Message, NamingProblem, NamingRules, Rule,
    SourceFile,
};

/// Checker name.
pub const NAME: &str = "naming";

const RULES: &[Rule] = &[Rule::ClassNaming, Rule::MethodNaming, Rule::VariableNaming];

/// Checks class, method and variable names.
#[derive(Debug, Clone)]
pub struct NamingChecker {
    rules: NamingRules,
    locale: Locale,
}

impl Default for NamingChecker {
    fn default() -> Self {
        Self::new(NamingRules::default(), Locale::default())
    }
}

impl NamingChecker {
    /// Creates a checker for the given conventions.
    #[must_use]
    pub fn new(rules: NamingRules, locale: Locale) -> Self {
        Self { rules, locale }
    }

    fn convention(&self, construct: Construct) -> Convention {
        match construct {
            Construct::Class => self.rules.classes,
            Construct::Method => self.rules.methods,
            Construct::Variable => self.rules.variables,
        }
    }

    /// Returns the declaration on `line`, minus the known false positives.
    fn declaration<'a>(construct: Construct, line: &'a str) -> Option<DeclarationMatch<'a>> {
        if construct == Construct::Method && patterns::is_return_statement(line) {
            return None;
        }
        let found = patterns::pattern_for(construct).find(line)?;
        if construct == Construct::Variable
            && found.type_token.is_some_and(patterns::is_reserved_type)
        {
            return None;
        }
        Some(found)
    }

    fn check_construct(&self, construct: Construct, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        let convention = self.convention(construct);
        let mut diagnostics = Vec::new();

        for (index, line) in source.lines.iter().enumerate() {
            let Some(found) = Self::declaration(construct, line) else {
                continue;
            };
            for problem in naming_problems(convention, found.identifier) {
                let message = Message::Naming { construct, problem };
                diagnostics.push(message.at(source.name, index + 1, found.column, self.locale));
            }
        }

        tracing::trace!(?construct, count = diagnostics.len(), "naming check done");
        diagnostics
    }
}

impl Checker for NamingChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }

    fn check(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = self.check_construct(Construct::Class, source);
        diagnostics.extend(self.check_construct(Construct::Method, source));
        diagnostics.extend(self.check_construct(Construct::Variable, source));
        diagnostics
    }
}

/// Lists what is wrong with `identifier` under `convention`, in report order.
#[must_use]
pub fn naming_problems(convention: Convention, identifier: &str) -> Vec<NamingProblem> {
    let mut problems = Vec::new();

    if convention == Convention::SnakeCase {
        if !is_snake_case(identifier) {
            problems.push(NamingProblem::NotSnakeCase);
        }
    } else if identifier.contains('_') {
        problems.push(NamingProblem::ContainsUnderscore);
    }

    let first = identifier.chars().next();
    match convention {
        Convention::CapitalizedCamel if !first.is_some_and(char::is_uppercase) => {
            problems.push(NamingProblem::NotCapitalized);
        }
        Convention::LowerCamel if !first.is_some_and(char::is_lowercase) => {
            problems.push(NamingProblem::NotLowercase);
        }
        _ => {}
    }

    problems
}

/// Returns true if `name` is valid `snake_case`.
///
/// Lowercase ASCII letters, digits and single underscores; starts with a
/// letter and does not end with `_`. Every segment after the first starts
/// with a letter unless it is all digits.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    let bytes = name.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    if let Some(&last) = rest.last() {
        if !(last.is_ascii_lowercase() || last.is_ascii_digit()) {
            return false;
        }
    }
    if !rest
        .iter()
        .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        return false;
    }
    if name.contains("__") {
        return false;
    }

    name.split('_').skip(1).all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            None => false,
            Some(c) if c.is_ascii_alphabetic() => true,
            Some(c) => c.is_ascii_digit() && chars.all(|c| c.is_ascii_digit()),
        }
    })
}
