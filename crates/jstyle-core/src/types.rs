//! Core types for style diagnostics and results.

use serde::Serialize;

use crate::rule::Rule;

/// A style violation found during checking.
///
/// Diagnostics are plain values: two diagnostics are equal when every field
/// is equal. They are created by a checker and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    /// Name of the checked file, as passed to the engine.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in characters).
    pub column: usize,
    /// Rule that produced this diagnostic.
    pub rule: Rule,
    /// Human-readable message in the configured locale.
    pub message: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        line: usize,
        column: usize,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            rule,
            message: message.into(),
        }
    }

    /// Formats the diagnostic for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "{} {} at {}:{}:{}\n  {}\n",
            self.rule.code(),
            self.rule.name(),
            self.file,
            self.line,
            self.column,
            self.message,
        )
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: [{}] {}",
            self.file,
            self.line,
            self.column,
            self.rule.code(),
            self.message
        )
    }
}

/// Result of checking one or more files.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// All diagnostics found, in engine order per file.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl Report {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any diagnostic was found.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Adds the diagnostics of one checked file.
    pub fn add_file(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
        self.files_checked += 1;
    }

    /// Number of files with at least one diagnostic.
    #[must_use]
    pub fn files_with_diagnostics(&self) -> usize {
        let mut files: Vec<&str> = self.diagnostics.iter().map(|d| d.file.as_str()).collect();
        files.sort_unstable();
        files.dedup();
        files.len()
    }

    /// Counts diagnostics produced by `rule`.
    #[must_use]
    pub fn count_for(&self, rule: Rule) -> usize {
        self.diagnostics.iter().filter(|d| d.rule == rule).count()
    }

    /// One-line summary of the report.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Found {} problem(s) in {} of {} file(s)",
            self.diagnostics.len(),
            self.files_with_diagnostics(),
            self.files_checked
        )
    }

    /// Formats the report one diagnostic per line, followed by the summary.
    #[must_use]
    pub fn format_compact(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();
        for diagnostic in &self.diagnostics {
            let _ = writeln!(output, "{diagnostic}");
        }
        let _ = writeln!(output, "{}", self.summary());
        output
    }

    /// Adds diagnostics from another report.
    pub fn extend(&mut self, other: Self) {
        self.diagnostics.extend(other.diagnostics);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_diagnostic(file: &str, line: usize) -> Diagnostic {
        Diagnostic::new(
            file,
            line,
            2,
            Rule::OperatorSpacing,
            "operators must be surrounded by spaces",
        )
    }

    #[test]
    fn diagnostics_compare_by_value() {
        assert_eq!(make_diagnostic("A.java", 1), make_diagnostic("A.java", 1));
        assert_ne!(make_diagnostic("A.java", 1), make_diagnostic("A.java", 2));
    }

    #[test]
    fn display_is_single_line() {
        let display = make_diagnostic("src/A.java", 3).to_string();
        assert_eq!(
            display,
            "src/A.java:3:2: [JS306] operators must be surrounded by spaces"
        );
    }

    #[test]
    fn format_includes_rule_name() {
        let formatted = make_diagnostic("A.java", 1).format();
        assert!(formatted.starts_with("JS306 operator-spacing at A.java:1:2"));
    }

    #[test]
    fn report_counts_files() {
        let mut report = Report::new();
        report.add_file(vec![
            make_diagnostic("A.java", 1),
            make_diagnostic("A.java", 4),
        ]);
        report.add_file(Vec::new());
        report.add_file(vec![make_diagnostic("B.java", 1)]);

        assert!(report.has_diagnostics());
        assert_eq!(report.files_checked, 3);
        assert_eq!(report.files_with_diagnostics(), 2);
        assert_eq!(report.count_for(Rule::OperatorSpacing), 3);
        assert_eq!(report.count_for(Rule::SpaceAfterComma), 0);
    }

    #[test]
    fn compact_report_snapshot() {
        let mut report = Report::new();
        report.add_file(vec![make_diagnostic("A.java", 1)]);
        report.add_file(Vec::new());

        insta::assert_snapshot!(report.format_compact(), @r"
        A.java:1:2: [JS306] operators must be surrounded by spaces
        Found 1 problem(s) in 1 of 2 file(s)
        ");
    }

    #[test]
    fn empty_report_has_no_diagnostics() {
        let report = Report::new();
        assert!(!report.has_diagnostics());
        assert_eq!(report.summary(), "Found 0 problem(s) in 0 of 0 file(s)");
    }
}
