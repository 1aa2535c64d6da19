//! # jstyle-core
//!
//! Core types for line-oriented Java style checking.
//!
//! This crate provides the foundational types shared by checkers and front
//! ends. It includes:
//!
//! - [`Checker`] trait for per-file line checkers
//! - [`Diagnostic`] and [`Report`] for representing findings
//! - [`Rule`] catalog with stable codes and localized [`Message`]s
//! - [`Configuration`] model and its TOML/JSON loader
//! - [`patterns`] for single-line declaration matching
//!
//! ## Example
//!
//! ```ignore
//! use jstyle_core::{Configuration, SourceFile};
//!
//! let config = Configuration::load_or_default("jstyle.toml".as_ref());
//! let source = SourceFile::from_text("Main.java", "class Main {}");
//! for checker in build_checkers(&config) {
//!     for diagnostic in checker.check(&source) {
//!         println!("{diagnostic}");
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod messages;
mod rule;
mod types;

/// Single-line declaration patterns.
pub mod patterns;

pub use config::{
    BlankLineRules, ConfigError, Configuration, Convention, NamingRules, WhitespaceRules,
};
pub use context::{char_index, is_blank, SourceFile};
pub use messages::{Body, Locale, Message, NamingProblem};
pub use patterns::Construct;
pub use rule::{Checker, CheckerBox, Rule};
pub use types::{Diagnostic, Report};
