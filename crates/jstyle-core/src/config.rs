//! Configuration model and loader.
//!
//! A [`Configuration`] is read once and never mutated while checking. TOML is
//! the primary format; JSON files in the older "dialect" layout are accepted
//! too, so the serde aliases below cover both spellings of every key.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::messages::Locale;

/// Identifier naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// `MyClass`: no underscores, first letter uppercase.
    #[serde(alias = "CAMEL_CASE_CAPITAL", alias = "CapitalizedCamel")]
    CapitalizedCamel,
    /// `myMethod`: no underscores, first letter lowercase.
    #[serde(alias = "CAMEL_CASE_LOWER", alias = "LowerCamel")]
    LowerCamel,
    /// `my_variable`.
    #[serde(alias = "SNAKE_CASE", alias = "SnakeCase")]
    SnakeCase,
}

/// Naming convention per construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingRules {
    /// Classes, interfaces and enums.
    pub classes: Convention,
    /// Methods.
    pub methods: Convention,
    /// Fields and local variables.
    pub variables: Convention,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            classes: Convention::CapitalizedCamel,
            methods: Convention::LowerCamel,
            variables: Convention::LowerCamel,
        }
    }
}

/// Whitespace toggles. Every check defaults to enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct WhitespaceRules {
    /// Require whitespace around the first operator of a line.
    pub around_operators: bool,
    /// Forbid whitespace inside and before parentheses, require it before `{`.
    #[serde(alias = "no_around_brackets")]
    pub around_brackets: bool,
    /// Require whitespace after `,`.
    pub after_comma: bool,
    /// Forbid whitespace before `,`.
    #[serde(alias = "no_before_comma")]
    pub before_comma: bool,
    /// Forbid whitespace before `;`.
    #[serde(alias = "no_before_dot_comma")]
    pub before_semicolon: bool,
    /// Forbid whitespace on either side of `.`.
    #[serde(alias = "no_around_dot")]
    pub around_dot: bool,
    /// Allow runs of two or more spaces inside a line.
    #[serde(alias = "may_be_more_that_one_space")]
    pub allow_multiple_spaces: bool,
}

impl Default for WhitespaceRules {
    fn default() -> Self {
        Self {
            around_operators: true,
            around_brackets: true,
            after_comma: true,
            before_comma: true,
            before_semicolon: true,
            around_dot: true,
            allow_multiple_spaces: false,
        }
    }
}

/// Blank-line thresholds. A value of 0 disables the check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlankLineRules {
    /// Longest allowed run of blank lines.
    #[serde(alias = "max_empty")]
    pub max_consecutive: usize,
    /// Blank lines required after a class body.
    pub after_class: usize,
    /// Blank lines required after a method body.
    pub after_method: usize,
}

impl Default for BlankLineRules {
    fn default() -> Self {
        Self {
            max_consecutive: 2,
            after_class: 3,
            after_method: 2,
        }
    }
}

/// Complete checker configuration.
///
/// # Example
///
/// ```toml
/// locale = "en"
///
/// [naming]
/// classes = "capitalized-camel"
/// methods = "lower-camel"
/// variables = "snake-case"
///
/// [whitespace]
/// around_operators = true
/// allow_multiple_spaces = false
///
/// [blank_lines]
/// max_consecutive = 2
/// after_class = 3
/// after_method = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Message language.
    pub locale: Locale,
    /// Naming conventions.
    pub naming: NamingRules,
    /// Whitespace toggles.
    #[serde(alias = "spaces")]
    pub whitespace: WhitespaceRules,
    /// Blank-line thresholds.
    #[serde(alias = "empty_lines")]
    pub blank_lines: BlankLineRules,
}

impl Configuration {
    /// Loads a configuration file, choosing the format by extension.
    ///
    /// `.json` files are read as JSON; `.toml` files and files without an
    /// extension as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its
    /// extension names another format.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            Some("toml") | None => Format::Toml,
            Some(_) => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        match format {
            Format::Json => Self::parse_json(&content),
            Format::Toml => Self::parse_toml(&content),
        }
    }

    /// Loads a configuration file, falling back to the defaults on any error.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Renders this configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }

    /// Renders this configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            message: e.to_string(),
        })
    }
}

enum Format {
    Toml,
    Json,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Config file extension is neither `.toml` nor `.json`.
    #[error("Unsupported config format: {path}")]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// Configuration could not be rendered.
    #[error("Failed to serialize config: {message}")]
    Serialize {
        /// Serializer error message.
        message: String,
    },
}
