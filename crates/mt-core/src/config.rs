//! Runtime configuration for one morphtag invocation.
//!
//! Values are resolved CLI flag > environment variable > default. For the
//! report timestamp the winning source is recorded so it can be logged.

use crate::logging::{LogConfig, LogFormat, LogLevel};
use chrono::NaiveDateTime;
use mt_common::{Error, OutputFormat, Result};
use mt_report::TIMESTAMP_FORMAT;
use serde::Serialize;

/// Environment variable pinning the report timestamp.
pub const NOW_ENV: &str = "MORPHTAG_NOW";

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigResolution {
    CliFlag,
    EnvVar,
    Default,
}

impl std::fmt::Display for ConfigResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigResolution::CliFlag => write!(f, "cli flag"),
            ConfigResolution::EnvVar => write!(f, "environment"),
            ConfigResolution::Default => write!(f, "default"),
        }
    }
}

/// Raw values taken from the command line, before resolution.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub format: OutputFormat,
    pub verbose: u8,
    pub quiet: bool,
    pub log_format: Option<LogFormat>,
    pub now: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log: LogConfig,
    pub format: OutputFormat,
    /// Timestamp stamped on generated reports.
    pub now: NaiveDateTime,
    pub now_source: ConfigResolution,
}

impl RuntimeConfig {
    /// Resolve against the process environment and the local clock.
    pub fn resolve(cli: &CliOverrides) -> Result<Self> {
        Self::resolve_with(
            cli,
            |key| std::env::var(key).ok(),
            || chrono::Local::now().naive_local(),
        )
    }

    /// Resolve against an arbitrary variable source and clock.
    pub fn resolve_with<F, C>(cli: &CliOverrides, lookup: F, clock: C) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
        C: FnOnce() -> NaiveDateTime,
    {
        let log = LogConfig::from_lookup(
            &lookup,
            LogLevel::from_flags(cli.verbose, cli.quiet),
            cli.log_format,
        );

        let (now, now_source) = if let Some(raw) = cli.now.as_deref() {
            (parse_timestamp(raw)?, ConfigResolution::CliFlag)
        } else if let Some(raw) = lookup(NOW_ENV) {
            (parse_timestamp(&raw)?, ConfigResolution::EnvVar)
        } else {
            (clock(), ConfigResolution::Default)
        };

        Ok(RuntimeConfig {
            log,
            format: cli.format,
            now,
            now_source,
        })
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        Error::InvalidArgument(format!(
            "timestamp '{}' is not in YYYY-MM-DD HH:MM:SS form: {}",
            raw, e
        ))
    })
}
