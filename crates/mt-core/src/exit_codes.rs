//! Exit codes for the morphtag CLI.
//!
//! Exit code ranges:
//! - 0: success
//! - 10-19: user errors (recoverable by changing the invocation)
//! - 20-29: internal errors (bugs, should be reported)

use mt_common::Error;

/// Exit codes for morphtag operations.
///
/// These codes are a stable contract for scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command completed.
    Success = 0,

    // ========================================================================
    // User Errors (10-19)
    // ========================================================================
    /// Invalid arguments or malformed identifier.
    ArgsError = 10,

    /// Identifier or category not present in the catalog.
    NotFound = 11,

    /// Reading input or writing output failed.
    IoError = 12,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Built-in catalog failed its integrity checks.
    CatalogError = 20,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    pub fn is_success(self) -> bool {
        self == ExitCode::Success
    }

    /// Codes 10-19.
    pub fn is_user_error(self) -> bool {
        (10..20).contains(&self.as_i32())
    }

    /// Codes 20-29.
    pub fn is_internal_error(self) -> bool {
        self.as_i32() >= 20
    }

    /// Stable code name (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Success => "OK",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::NotFound => "ERR_NOT_FOUND",
            ExitCode::IoError => "ERR_IO",
            ExitCode::CatalogError => "ERR_CATALOG",
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::CatalogIntegrity(_) => ExitCode::CatalogError,
            Error::UnknownCategory(_) | Error::UnknownIdentifier { .. } => ExitCode::NotFound,
            Error::InvalidIdentifier { .. }
            | Error::UnknownCommand(_)
            | Error::InvalidArgument(_) => ExitCode::ArgsError,
            Error::Io(_) | Error::Json(_) => ExitCode::IoError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}
