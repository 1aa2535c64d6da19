//! Per-file input handed to checkers.

/// A named sequence of source lines.
///
/// Line terminators (`\n`, `\r\n`) are stripped on construction, so checkers
/// always see line content only.
#[derive(Debug, Clone)]
pub struct SourceFile<'a> {
    /// File name reported in diagnostics.
    pub name: &'a str,
    /// Lines in original order, without terminators.
    pub lines: Vec<&'a str>,
}

impl<'a> SourceFile<'a> {
    /// Creates a source file from already split lines.
    #[must_use]
    pub fn new<S: AsRef<str>>(name: &'a str, lines: &'a [S]) -> Self {
        Self {
            name,
            lines: lines
                .iter()
                .map(|line| strip_terminator(line.as_ref()))
                .collect(),
        }
    }

    /// Creates a source file by splitting whole file contents into lines.
    #[must_use]
    pub fn from_text(name: &'a str, text: &'a str) -> Self {
        Self {
            name,
            lines: text.lines().collect(),
        }
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the file has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Returns true if the line is empty or whitespace-only.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Converts a byte offset within `line` to a 0-based character index.
///
/// Regex matches report byte offsets; diagnostics report the column a reader
/// sees, which differs on lines with multi-byte characters.
#[must_use]
pub fn char_index(line: &str, byte_offset: usize) -> usize {
    line.get(..byte_offset)
        .map_or(byte_offset, |prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators_are_stripped() {
        let lines = ["int x;\n", "int y;\r\n", "int z;"];
        let source = SourceFile::new("A.java", &lines);
        assert_eq!(source.lines, vec!["int x;", "int y;", "int z;"]);
    }

    #[test]
    fn from_text_splits_lines() {
        let source = SourceFile::from_text("A.java", "class A {\r\n\n}\n");
        assert_eq!(source.lines, vec!["class A {", "", "}"]);
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank("  \t "));
        assert!(!is_blank("  x "));
    }

    #[test]
    fn char_index_counts_characters() {
        assert_eq!(char_index("x=5", 1), 1);
        let line = "String é=1";
        let byte = line.find('=').unwrap();
        assert_eq!(byte, 9);
        assert_eq!(char_index(line, byte), 8);
    }
}
