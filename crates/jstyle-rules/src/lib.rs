//! # jstyle-rules
//!
//! Built-in checkers for jstyle and the engine that runs them.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | JS101 | `class-naming` | Class, interface and enum names follow the convention |
//! | JS102 | `method-naming` | Method names follow the convention |
//! | JS103 | `variable-naming` | Variable names follow the convention |
//! | JS201 | `consecutive-blank-lines` | At most N blank lines in a row |
//! | JS202 | `blank-lines-after-class` | Exactly N blank lines after a class body |
//! | JS203 | `blank-lines-after-method` | Exactly N blank lines after a method body |
//! | JS301 | `space-after-comma` | A comma is followed by whitespace |
//! | JS302 | `space-before-comma` | No whitespace before a comma |
//! | JS303 | `space-before-semicolon` | No whitespace before a semicolon |
//! | JS304 | `space-before-dot` | No whitespace before a dot |
//! | JS305 | `space-after-dot` | No whitespace after a dot |
//! | JS306 | `operator-spacing` | The first operator of a line is surrounded by spaces |
//! | JS307 | `space-before-open-paren` | No whitespace between a name and `(` |
//! | JS308 | `space-after-open-paren` | No whitespace after `(` |
//! | JS309 | `space-before-close-paren` | No whitespace before `)` |
//! | JS310 | `space-after-close-paren` | A word after `)` is separated by a space |
//! | JS311 | `space-before-brace` | `{` is preceded by whitespace |
//! | JS312 | `multiple-spaces` | No runs of two or more spaces inside a line |
//!
//! ## Usage
//!
//! ```ignore
//! use jstyle_core::Configuration;
//! use jstyle_rules::Engine;
//!
//! let engine = Engine::new(&Configuration::default());
//! let diagnostics = engine.check_source("class my_class {}\n", "Main.java");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blank_lines;
mod engine;
mod naming;
mod whitespace;

pub use blank_lines::{find_body_end, BlankLineChecker};
pub use engine::Engine;
pub use naming::{is_snake_case, naming_problems, NamingChecker};
pub use whitespace::WhitespaceChecker;

/// Re-export core types for convenience.
pub use jstyle_core::{Checker, Configuration, Diagnostic, Rule};
