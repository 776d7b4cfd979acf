//! Core library for nestcheck.
//!
//! This crate provides the bracket-matching validator used by the
//! `nestcheck` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`bracket`] - Bracket families and glyph classification
//! - [`validate`] - The single-line validator and its [`Verdict`]
//! - [`report`] - Per-line check engine over whole inputs
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use nestcheck_core::{Verdict, validate};
//!
//! assert_eq!(validate("{[()]}"), Verdict::Success);
//! // The textual contract: the failure position of the first violation.
//! assert_eq!(validate("{[}").to_string(), "3");
//! ```
#![deny(unsafe_code)]

pub mod bracket;

pub mod config;

pub mod error;

pub mod report;

pub mod validate;

pub use bracket::{BracketKind, Glyph};

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult};

pub use report::{CheckReport, LineVerdict, check_text};

pub use validate::{Verdict, validate};

/// Default maximum input size in bytes (5 MiB).
///
/// Applied by the CLI when neither `max_input_bytes` nor
/// `disable_input_limit` is configured.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
