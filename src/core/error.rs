//! Error types for route-ranker
//!
//! Every fatal failure of a run maps onto one [`ErrorCategory`], and every
//! category carries a fixed corrective message for the operator.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;

use thiserror::Error;

/// Message shown when the data file cannot be opened or read.
pub const FILE_ACCESS_MESSAGE: &str =
    "Please ensure the file exist and we have permission to view it before trying again";

/// Message shown when the file is empty or a line has the wrong shape.
pub const LAYOUT_MESSAGE: &str = "Please ensure the data is in the format 'positive integer, positive float' e.g. 123, 5.4 before trying again.";

/// Message shown when a field on a line cannot be parsed.
pub const FIELD_MESSAGE: &str = "Please ensure each line of routes.txt contains a route number, followed by a comma, followed by a happy ratio";

/// Message shown when a route number appears more than once.
pub const DUPLICATE_MESSAGE: &str =
    "Please ensure that there are no duplicate route numbers in the file before trying again.";

/// Broad classes of fatal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing file, no permission, path is a directory, or another read failure
    FileAccess,
    /// Empty file, wrong field count, or unparseable field
    Format,
    /// Repeated route number
    DuplicateRoute,
    /// Console could not be read or written
    Console,
}

/// Main error type for route-ranker operations
#[derive(Debug, Error)]
pub enum Error {
    /// Data file does not exist
    #[error("route data file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Data file exists but may not be read
    #[error("permission denied reading route data file: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Data path names a directory
    #[error("route data path is a directory: {}", path.display())]
    IsDirectory { path: PathBuf },

    /// Any other failure while reading the data file
    #[error("failed to read route data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file has zero bytes
    #[error("route data file is empty: {}", path.display())]
    EmptyFile { path: PathBuf },

    /// Data file is not valid UTF-8
    #[error("route data file is not valid UTF-8: {}", path.display())]
    InvalidEncoding { path: PathBuf },

    /// A line did not split into exactly two fields
    #[error("line {line}: expected 2 comma-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    /// First field is not an integer
    #[error("line {line}: invalid route number '{value}': {source}")]
    InvalidRouteNumber {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Second field is not a floating-point number
    #[error("line {line}: invalid happy ratio '{value}': {source}")]
    InvalidHappyRatio {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// One or more route numbers occur on several lines
    #[error("duplicate route numbers: {routes:?}")]
    DuplicateRoute { routes: Vec<i64> },

    /// Standard input was closed before a valid quantity was entered
    #[error("input closed before a valid number of routes was entered")]
    InputClosed,

    /// Console I/O error
    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),
}

impl Error {
    /// Classify a read failure on `path` by its I/O error kind
    pub fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => Error::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => Error::InvalidEncoding { path },
            _ => Error::Io { path, source: err },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::FileNotFound { .. }
            | Error::PermissionDenied { .. }
            | Error::IsDirectory { .. }
            | Error::Io { .. } => ErrorCategory::FileAccess,
            Error::EmptyFile { .. }
            | Error::InvalidEncoding { .. }
            | Error::FieldCount { .. }
            | Error::InvalidRouteNumber { .. }
            | Error::InvalidHappyRatio { .. } => ErrorCategory::Format,
            Error::DuplicateRoute { .. } => ErrorCategory::DuplicateRoute,
            Error::InputClosed | Error::Console(_) => ErrorCategory::Console,
        }
    }

    /// Corrective message for the operator, if this error has one
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            Error::EmptyFile { .. } | Error::FieldCount { .. } => Some(LAYOUT_MESSAGE),
            Error::InvalidEncoding { .. }
            | Error::InvalidRouteNumber { .. }
            | Error::InvalidHappyRatio { .. } => Some(FIELD_MESSAGE),
            _ => match self.category() {
                ErrorCategory::FileAccess => Some(FILE_ACCESS_MESSAGE),
                ErrorCategory::DuplicateRoute => Some(DUPLICATE_MESSAGE),
                _ => None,
            },
        }
    }
}

/// Convenience result type for route-ranker operations
pub type Result<T> = std::result::Result<T, Error>;
