//! Error types for morphtag.
//!
//! Every error carries:
//! - A stable numeric code for machine parsing
//! - A category for grouping
//! - A recoverability hint
//! - A headline and remediation for humans
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 22,
//!   "category": "identifier",
//!   "message": "unknown recommendation: NOUN_analysis_4_0",
//!   "recoverable": true,
//!   "context": { "id": "NOUN_analysis_4_0" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for morphtag operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The built-in catalog failed its construction invariants.
    Catalog,
    /// Category keys and recommendation identifiers.
    Identifier,
    /// User input to the CLI or an interactive session.
    Input,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Catalog => write!(f, "catalog"),
            ErrorCategory::Identifier => write!(f, "identifier"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for morphtag.
#[derive(Error, Debug)]
pub enum Error {
    // Catalog errors (10-19)
    #[error("catalog integrity violation: {0}")]
    CatalogIntegrity(String),

    // Identifier errors (20-29)
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid recommendation identifier '{input}': {reason}")]
    InvalidIdentifier { input: String, reason: String },

    #[error("unknown recommendation: {id}")]
    UnknownIdentifier { id: String },

    // Input errors (30-39)
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Catalog errors
    /// - 20-29: Identifier errors
    /// - 30-39: Input errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::CatalogIntegrity(_) => 10,
            Error::UnknownCategory(_) => 20,
            Error::InvalidIdentifier { .. } => 21,
            Error::UnknownIdentifier { .. } => 22,
            Error::UnknownCommand(_) => 30,
            Error::InvalidArgument(_) => 31,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::CatalogIntegrity(_) => ErrorCategory::Catalog,

            Error::UnknownCategory(_)
            | Error::InvalidIdentifier { .. }
            | Error::UnknownIdentifier { .. } => ErrorCategory::Identifier,

            Error::UnknownCommand(_) | Error::InvalidArgument(_) => ErrorCategory::Input,

            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
        }
    }

    /// Returns whether the caller can carry on after this error.
    ///
    /// Only a malformed catalog is fatal; everything else rejects a single
    /// operation and leaves the session intact.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::CatalogIntegrity(_))
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::CatalogIntegrity(_) => {
                "The built-in catalog is malformed. This is a build defect; report it with the message above."
            }
            Error::UnknownCategory(_) => {
                "Run 'morphtag catalog' to list the available category keys."
            }
            Error::InvalidIdentifier { .. } => {
                "Identifiers look like NOUN_analysis_0_1. Run 'morphtag ids' to list them."
            }
            Error::UnknownIdentifier { .. } => {
                "The identifier is outside the catalog. Run 'morphtag ids <KEY>' to list valid ones."
            }
            Error::UnknownCommand(_) => "Type 'help' to list session commands.",
            Error::InvalidArgument(_) => "Run 'morphtag --help' for the expected argument format.",
            Error::Io(_) => "Check that the output path exists and is writable.",
            Error::Json(_) => "Internal serialization failure. Retry with '--format text'.",
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::CatalogIntegrity(_) => "Catalog Integrity Error",
            Error::UnknownCategory(_) => "Unknown Category",
            Error::InvalidIdentifier { .. } => "Invalid Identifier",
            Error::UnknownIdentifier { .. } => "Unknown Recommendation",
            Error::UnknownCommand(_) => "Unknown Command",
            Error::InvalidArgument(_) => "Invalid Argument",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
        }
    }

    /// Formats the error for a terminal: headline, reason, and fix.
    pub fn to_human(&self) -> String {
        format!(
            "✗ {}\n  Reason: {}\n  Fix: {}",
            self.headline(),
            self,
            self.remediation()
        )
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is potentially recoverable.
    pub recoverable: bool,

    /// Additional structured context (e.g., the offending identifier).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        match err {
            Error::UnknownCategory(key) => {
                context.insert("key".to_string(), serde_json::json!(key));
            }
            Error::InvalidIdentifier { input, .. } => {
                context.insert("input".to_string(), serde_json::json!(input));
            }
            Error::UnknownIdentifier { id } => {
                context.insert("id".to_string(), serde_json::json!(id));
            }
            _ => {}
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            context,
        }
    }
}

impl StructuredError {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}
