//! Error handling for table rendering
//!
//! This module provides a unified error type and result type for the
//! rendering engine and the file/stream collaborators around it.

use std::fmt;

/// Rendering error type
#[derive(Debug, Clone)]
pub enum RenderError {
    /// Table has zero rows where a non-empty table is required
    EmptyTable,
    /// A row's cell count differs from the header's
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Alignment tag outside the `left|center|right` set
    InvalidAlignment { value: String },
    /// IO error (for file and stream operations)
    IoError { message: String },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyTable => {
                write!(f, "Empty table: at least a header row is required")
            }
            RenderError::ColumnMismatch {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Column mismatch: row {} has {} cells, header has {}",
                    row, found, expected
                )
            }
            RenderError::InvalidAlignment { value } => {
                write!(
                    f,
                    "Invalid alignment '{}': expected left, center or right",
                    value
                )
            }
            RenderError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for RenderError {}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for RenderError {
    fn from(err: csv::Error) -> Self {
        RenderError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

// Convenience constructors for errors
impl RenderError {
    pub fn column_mismatch(row: usize, expected: usize, found: usize) -> Self {
        RenderError::ColumnMismatch {
            row,
            expected,
            found,
        }
    }

    pub fn invalid_alignment(value: impl Into<String>) -> Self {
        RenderError::InvalidAlignment {
            value: value.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        RenderError::IoError {
            message: message.into(),
        }
    }
}
