//! Check command implementation.

use anyhow::{Context, Result};
use jstyle_core::{Configuration, Report, Rule};
use jstyle_rules::Engine;
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Extension of the files the check command picks up from directories.
const JAVA_EXTENSION: &str = "java";

/// Options of the check command besides paths and configuration.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule codes or names to report; `None` reports all.
    pub rules: Option<String>,
    /// Exclude patterns.
    pub exclude: Vec<String>,
}

/// Runs the check command and returns the printed report.
pub fn run(paths: &[PathBuf], options: &CheckOptions, source: &ConfigSource) -> Result<Report> {
    let config = load_config(source)?;
    let engine = Engine::new(&config);
    let filter = options.rules.as_deref().map(parse_rule_filter);

    let files = discover_files(paths, &options.exclude)?;
    tracing::info!(
        "Checking {} file(s) with {} checkers",
        files.len(),
        engine.checker_count()
    );

    let mut report = Report::new();
    for file in &files {
        let bytes =
            std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
        let text = String::from_utf8_lossy(&bytes);

        let mut diagnostics = engine.check_source(&text, &file.display().to_string());
        if let Some(rules) = &filter {
            diagnostics.retain(|d| rules.contains(&d.rule));
        }
        report.add_file(diagnostics);
    }

    super::output::print(&report, options.format)?;
    Ok(report)
}

/// Directory searched for a project configuration: the first path if it is
/// a directory, otherwise its parent.
#[must_use]
pub fn project_dir(paths: &[PathBuf]) -> PathBuf {
    match paths.first() {
        Some(path) if path.is_dir() => path.clone(),
        Some(path) => path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        None => PathBuf::from("."),
    }
}

/// An explicit `--config` must load; a discovered one falls back to the
/// defaults with a warning.
fn load_config(source: &ConfigSource) -> Result<Configuration> {
    let Some(path) = source.path() else {
        return Ok(Configuration::default());
    };

    if source.is_explicit() {
        return Configuration::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    if matches!(source, ConfigSource::Global(_)) {
        tracing::info!("Using global config: {}", path.display());
    }
    Ok(Configuration::load_or_default(path))
}

fn parse_rule_filter(filter: &str) -> Vec<Rule> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .filter_map(|key| {
            let rule = Rule::from_code_or_name(key);
            if rule.is_none() {
                tracing::warn!("Unknown rule: {}", key);
            }
            rule
        })
        .collect()
}

/// Collects the files to check.
///
/// Paths naming files are taken as they are. Directories are walked for
/// `.java` files, honoring `.gitignore`. The result is sorted and free of
/// duplicates.
fn discover_files(paths: &[PathBuf], exclude: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for root in paths {
        if root.is_file() {
            if !is_excluded(root, exclude) {
                files.push(root.clone());
            }
            continue;
        }

        let mut builder = ignore::WalkBuilder::new(root);
        builder.hidden(false).git_ignore(true);

        for entry in builder.build() {
            let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(JAVA_EXTENSION) {
                continue;
            }
            if is_excluded(path, exclude) {
                tracing::debug!("Excluded {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_excluded(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();

    patterns.iter().any(|pattern| {
        if glob::Pattern::new(pattern).is_ok_and(|glob| glob.matches(&path_str)) {
            return true;
        }

        // Also check as substring for patterns like "**/generated/**"
        let normalized = pattern.replace("**", "");
        !normalized.is_empty() && path_str.contains(&normalized)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn project() -> TempDir {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "src/Main.java", "class Main {\n}\n");
        write(tmp.path(), "src/util/Strings.java", "class Strings {\n}\n");
        write(tmp.path(), "src/notes.txt", "int a,b;\n");
        write(tmp.path(), "generated/Stub.java", "class stub {\n}\n");
        write(tmp.path(), ".hidden/Secret.java", "class Secret {\n}\n");
        tmp
    }

    fn relative(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn discovers_java_files_sorted() {
        let tmp = project();
        let files = discover_files(&[tmp.path().to_path_buf()], &[]).unwrap();
        assert_eq!(
            relative(&files, tmp.path()),
            vec![
                ".hidden/Secret.java",
                "generated/Stub.java",
                "src/Main.java",
                "src/util/Strings.java",
            ]
        );
    }

    #[test]
    fn exclude_patterns_skip_files() {
        let tmp = project();
        let exclude = vec!["**/generated/**".to_string(), "**/.hidden/**".to_string()];
        let files = discover_files(&[tmp.path().to_path_buf()], &exclude).unwrap();
        assert_eq!(
            relative(&files, tmp.path()),
            vec!["src/Main.java", "src/util/Strings.java"]
        );
    }

    #[test]
    fn explicit_files_are_kept_and_deduplicated() {
        let tmp = project();
        let notes = tmp.path().join("src/notes.txt");
        let main = tmp.path().join("src/Main.java");
        let roots = [notes, main, tmp.path().join("src")];
        let files = discover_files(&roots, &[]).unwrap();
        assert_eq!(
            relative(&files, tmp.path()),
            vec!["src/Main.java", "src/notes.txt", "src/util/Strings.java"]
        );
    }

    #[test]
    fn glob_and_substring_exclusion() {
        let patterns = vec!["*Test.java".to_string()];
        assert!(is_excluded(Path::new("src/FooTest.java"), &patterns));
        assert!(!is_excluded(Path::new("src/Foo.java"), &patterns));

        let patterns = vec!["**/build/**".to_string()];
        assert!(is_excluded(Path::new("./app/build/Gen.java"), &patterns));
        assert!(!is_excluded(Path::new("./app/src/Gen.java"), &patterns));
    }

    #[test]
    fn rule_filter_accepts_codes_and_names() {
        assert_eq!(
            parse_rule_filter("JS301, operator-spacing,,bogus"),
            vec![Rule::SpaceAfterComma, Rule::OperatorSpacing]
        );
    }

    #[test]
    fn project_dir_of_file_is_its_parent() {
        let tmp = project();
        let main = tmp.path().join("src/Main.java");
        assert_eq!(project_dir(&[main]), tmp.path().join("src"));
        assert_eq!(project_dir(&[tmp.path().to_path_buf()]), tmp.path());
        assert_eq!(
            project_dir(&[PathBuf::from("Missing.java")]),
            PathBuf::from(".")
        );
        assert_eq!(project_dir(&[]), PathBuf::from("."));
    }

    #[test]
    fn run_reports_diagnostics_per_file() {
        let tmp = project();
        let options = CheckOptions {
            format: OutputFormat::Compact,
            exclude: vec!["**/.hidden/**".to_string()],
            ..CheckOptions::default()
        };
        let root = tmp.path().to_path_buf();
        let report = run(&[root], &options, &ConfigSource::Default).unwrap();

        assert_eq!(report.files_checked, 3);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.count_for(Rule::ClassNaming), 1);
        assert!(report.diagnostics[0].file.ends_with("Stub.java"));
    }

    #[test]
    fn run_applies_rule_filter() {
        let tmp = TempDir::new().unwrap();
        let file = write(tmp.path(), "A.java", "class bad_name {\n    int a,b;\n}\n");
        let options = CheckOptions {
            format: OutputFormat::Compact,
            rules: Some("JS301".to_string()),
            ..CheckOptions::default()
        };
        let report = run(&[file], &options, &ConfigSource::Default).unwrap();

        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].rule, Rule::SpaceAfterComma);
        assert_eq!(
            (report.diagnostics[0].line, report.diagnostics[0].column),
            (2, 10)
        );
    }

    #[test]
    fn project_config_is_applied() {
        let tmp = TempDir::new().unwrap();
        let config = write(
            tmp.path(),
            "jstyle.json",
            r#"{ "naming": { "classes": "snake-case" } }"#,
        );
        let file = write(tmp.path(), "A.java", "class bad_name {\n}\n");
        let options = CheckOptions {
            format: OutputFormat::Compact,
            ..CheckOptions::default()
        };
        let report = run(&[file], &options, &ConfigSource::Project(config)).unwrap();
        assert!(!report.has_diagnostics());
    }

    #[test]
    fn broken_discovered_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = write(tmp.path(), "jstyle.toml", "naming = [");
        let loaded = load_config(&ConfigSource::Project(config)).unwrap();
        assert_eq!(loaded, Configuration::default());
    }

    #[test]
    fn broken_explicit_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let config = write(tmp.path(), "custom.toml", "naming = [");
        let err = load_config(&ConfigSource::Explicit(config)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));

        let missing = tmp.path().join("missing.toml");
        assert!(load_config(&ConfigSource::Explicit(missing)).is_err());
    }
}
