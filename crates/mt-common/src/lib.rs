//! Morphtag common types, IDs, and errors.
//!
//! This crate provides foundational types shared across the workspace:
//! - The closed set of catalog category keys
//! - Composite recommendation identifiers
//! - Session correlation IDs
//! - The unified error type with stable codes
//! - Output formats for CLI payloads

pub mod error;
pub mod id;
pub mod output;

pub use error::{Error, ErrorCategory, Result, StructuredError};
pub use id::{CategoryKey, RecommendationId, SessionId};
pub use output::OutputFormat;
