//! Plain-text report generator for morphtag selections.
//!
//! Turns an ordered selection into the canonical report the user copies
//! verbatim. Entries are grouped by category title in first-seen order;
//! within a group they keep their selection order.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use mt_report::generate_report;
//! use mt_selection::SelectionEntry;
//!
//! let now = NaiveDate::from_ymd_opt(2026, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let nothing: Vec<SelectionEntry> = Vec::new();
//! assert_eq!(generate_report(&nothing, now), "No recommendations selected.");
//! ```

pub mod generator;

pub use generator::{generate_report, ReportGenerator, BANNER, EMPTY_REPORT, TIMESTAMP_FORMAT};
