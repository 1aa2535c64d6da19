//! Runs every checker over one file.

use jstyle_core::{CheckerBox, Configuration, Diagnostic, Rule, SourceFile};
use tracing::debug;

use crate::{BlankLineChecker, NamingChecker, WhitespaceChecker};

/// The checkers built from one [`Configuration`], in run order.
///
/// An engine holds no per-file state; it can be shared across threads and
/// reused for any number of files.
pub struct Engine {
    checkers: Vec<CheckerBox>,
}

impl Engine {
    /// Builds the naming, blank-line and whitespace checkers.
    #[must_use]
    pub fn new(config: &Configuration) -> Self {
        let locale = config.locale;
        Self::from_checkers(vec![
            Box::new(NamingChecker::new(config.naming.clone(), locale)),
            Box::new(BlankLineChecker::new(config.blank_lines.clone(), locale)),
            Box::new(WhitespaceChecker::new(config.whitespace.clone(), locale)),
        ])
    }

    /// Builds an engine from an explicit checker list.
    #[must_use]
    pub fn from_checkers(checkers: Vec<CheckerBox>) -> Self {
        Self { checkers }
    }

    /// Number of checkers.
    #[must_use]
    pub fn checker_count(&self) -> usize {
        self.checkers.len()
    }

    /// Rules the checkers can report, in run order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.checkers
            .iter()
            .flat_map(|checker| checker.rules().iter().copied())
    }

    /// Checks a sequence of lines.
    ///
    /// Lines may keep their `\n` or `\r\n` terminators. Diagnostics come in
    /// checker order, each checker's in its own order; nothing is sorted or
    /// deduplicated.
    #[must_use]
    pub fn check<S: AsRef<str>>(&self, lines: &[S], file_name: &str) -> Vec<Diagnostic> {
        self.run(&SourceFile::new(file_name, lines))
    }

    /// Checks whole file contents.
    #[must_use]
    pub fn check_source(&self, text: &str, file_name: &str) -> Vec<Diagnostic> {
        self.run(&SourceFile::from_text(file_name, text))
    }

    fn run(&self, source: &SourceFile<'_>) -> Vec<Diagnostic> {
        debug!("Checking {} ({} lines)", source.name, source.len());

        let mut diagnostics = Vec::new();
        for checker in &self.checkers {
            let found = checker.check(source);
            debug!("{}: {} diagnostic(s)", checker.name(), found.len());
            diagnostics.extend(found);
        }
        diagnostics
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(&Configuration::default())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.checkers.iter().map(|c| c.name()).collect();
        f.debug_struct("Engine").field("checkers", &names).finish()
    }
}
