//! Blank-line limits and requirements.
//!
//! # Detected Patterns
//!
//! - More than `max_consecutive` blank lines in a row (`JS201`)
//! - Not exactly `after_class` blank lines after a class body (`JS202`)
//! - Not exactly `after_method` blank lines after a method body (`JS203`)
//!
//! A threshold of 0 disables the corresponding check. Body ends are found by
//! counting braces from the line after the declaration; braces inside string
//! literals and comments are counted too.

use jstyle_core::patterns::{self, CLASS, METHOD};
use jstyle_core::{
    is_blank, BlankLineRules, Body, Checker, Diagnostic, Locale, Message, Rule, SourceFile,
};

/// Checker name.
pub const NAME: &str = "blank-lines";

const RULES: &[Rule] = &[
    Rule::ConsecutiveBlankLines,
    Rule::BlankLinesAfterClass,
    Rule::BlankLinesAfterMethod,
];

/// Checks runs of blank lines.
#[derive(Debug, Clone)]
pub struct BlankLineChecker {
    rules: BlankLineRules,
    locale: Locale,
}

impl Default for BlankLineChecker {
    fn default() -> Self {
        Self::new(BlankLineRules::default(), Locale::default())
    }
}

impl BlankLineChecker {
    /// Creates a checker for the given thresholds.
    #[must_use]
    pub fn new(rules: BlankLineRules, locale: Locale) -> Self {
        Self { rules, locale }
    }

    fn check_consecutive(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        let max = self.rules.max_consecutive;
        let mut diagnostics = Vec::new();
        let mut count = 0;

        for (index, line) in source.lines.iter().enumerate() {
            if is_blank(line) {
                count += 1;
                continue;
            }
            if count > max {
                // `index` is the 1-based number of the run's last blank line.
                let message = Message::ConsecutiveBlankLines { found: count, max };
                diagnostics.push(message.at(source.name, index, 1, self.locale));
            }
            count = 0;
        }

        if count > max {
            let message = Message::ConsecutiveBlankLines { found: count, max };
            diagnostics.push(message.at(source.name, source.len(), 1, self.locale));
        }

        diagnostics
    }

    fn check_after_class(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, line) in source.lines.iter().enumerate() {
            if !CLASS.is_match(line) {
                continue;
            }
            let Some(end) = find_body_end(&source.lines, index) else {
                continue;
            };
            diagnostics.extend(self.check_after_body(source, Body::Class, end));
        }

        diagnostics
    }

    fn check_after_method(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, line) in source.lines.iter().enumerate() {
            if patterns::is_return_statement(line) || !METHOD.is_match(line) {
                continue;
            }
            let Some(end) = method_end(&source.lines, index) else {
                continue;
            };
            diagnostics.extend(self.check_after_body(source, Body::Method, end));
        }

        diagnostics
    }

    /// Counts the blank lines after `end` and compares them with the
    /// requirement for `body`.
    ///
    /// Nothing is reported when the blank run reaches end of input.
    fn check_after_body(
        &self,
        source: &SourceFile<'_>,
        body: Body,
        end: usize,
    ) -> Option<Diagnostic> {
        let required = match body {
            Body::Class => self.rules.after_class,
            Body::Method => self.rules.after_method,
        };
        let following = source.lines.get(end + 1..)?;
        let found = following.iter().take_while(|line| is_blank(line)).count();
        if found == following.len() || found == required {
            return None;
        }

        let message = Message::BlankLinesAfter {
            body,
            found,
            required,
        };
        Some(message.at(source.name, end + 2, 1, self.locale))
    }
}

impl Checker for BlankLineChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn rules(&self) -> &'static [Rule] {
        RULES
    }

    fn check(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.rules.max_consecutive > 0 {
            diagnostics.extend(self.check_consecutive(source));
        }
        if self.rules.after_class > 0 {
            diagnostics.extend(self.check_after_class(source));
        }
        if self.rules.after_method > 0 {
            diagnostics.extend(self.check_after_method(source));
        }

        tracing::trace!(count = diagnostics.len(), "blank-line check done");
        diagnostics
    }
}

/// Finds the line that closes the body opened on line `index`.
///
/// Depth starts at 1 on the following line; each `{` adds one and each `}`
/// subtracts one. Returns the first line index where depth drops below 1.
#[must_use]
pub fn find_body_end<S: AsRef<str>>(lines: &[S], index: usize) -> Option<usize> {
    let mut depth: i64 = 1;

    for (offset, line) in lines.iter().enumerate().skip(index + 1) {
        let line = line.as_ref();
        depth += count_char(line, '{');
        depth -= count_char(line, '}');
        if depth < 1 {
            return Some(offset);
        }
    }

    None
}

/// Where a method declared on line `index` ends.
///
/// A line with both braces is a one-line body; a line with only `{` is
/// closed by the brace scan; a line with `;` is an abstract or interface
/// method. Anything else is assumed to end on the next line.
fn method_end(lines: &[&str], index: usize) -> Option<usize> {
    let line = lines[index];
    let opens = line.contains('{');

    if opens && line.contains('}') {
        Some(index)
    } else if opens {
        find_body_end(lines, index)
    } else if line.contains(';') {
        Some(index)
    } else {
        // TODO: a header whose `{` sits on the next line ends here even
        // when the body spans further lines; scan braces from the `{` line.
        Some(index + 1)
    }
}

fn count_char(line: &str, needle: char) -> i64 {
    let count = line.chars().filter(|&c| c == needle).count();
    i64::try_from(count).unwrap_or(i64::MAX)
}
