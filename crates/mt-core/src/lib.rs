//! morphtag core library.
//!
//! This library provides the pieces behind the `morphtag` binary:
//! - Exit codes for CLI operations
//! - Runtime configuration and logging setup
//! - Catalog browsing and category review rendering
//! - The interactive selection session
//!
//! The binary entry point is in `main.rs`.

pub mod browse;
pub mod config;
pub mod exit_codes;
pub mod logging;
pub mod session;
