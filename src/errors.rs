//! Error types for the edges of the calculator.
//!
//! The ROI engine and narrative classifier have no error channel; every
//! input produces a result. Errors only arise when reading configuration or
//! scenario files, writing reports, or when a report is requested without
//! the volume fields that gate a calculation.
//!
//! # Error Codes
//!
//! - E001-E009: I/O errors
//! - E010-E019: Parse errors (scenario and config files)
//! - E020-E029: Configuration errors
//! - E030-E039: Export errors
//! - E040-E049: Input errors

use std::path::PathBuf;
use thiserror::Error;

/// Stable identifier for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    pub const IO_GENERIC: ErrorCode = ErrorCode("E001");
    pub const PARSE_GENERIC: ErrorCode = ErrorCode("E010");
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    pub const EXPORT_FAILED: ErrorCode = ErrorCode("E030");
    pub const INPUTS_ABSENT: ErrorCode = ErrorCode("E040");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum RoiError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Configuration error{}: {message}", field.as_deref().map(|f| format!(" in `{f}`")).unwrap_or_default())]
    Config {
        field: Option<String>,
        message: String,
    },

    #[error("Failed to write {format} report: {message}")]
    Export { format: String, message: String },

    #[error("Enter pallets/day and workdays/year to see results")]
    InputsAbsent,
}

impl RoiError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(field: Option<&str>, message: impl Into<String>) -> Self {
        Self::Config {
            field: field.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn export(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Export {
            format: format.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::IO_GENERIC,
            Self::Parse { .. } => ErrorCode::PARSE_GENERIC,
            Self::Config { .. } => ErrorCode::CONFIG_INVALID,
            Self::Export { .. } => ErrorCode::EXPORT_FAILED,
            Self::InputsAbsent => ErrorCode::INPUTS_ABSENT,
        }
    }
}

pub type Result<T> = std::result::Result<T, RoiError>;
