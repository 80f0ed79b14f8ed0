//! Error types for vsl-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the container types:
//! - Matrix construction (dimension/length checks)
//! - Bounds-checked element access
//!
//! Interpolation itself never fails: out-of-range coordinates are handled
//! by boundary policies in `vsl-interp`, not by errors.
//!
//! # Usage
//!
//! ```rust
//! use vsl_core::{Error, Matrix};
//!
//! let m = Matrix::filled(2, 3, 0u8);
//! match m.get(5, 0) {
//!     Some(_) => unreachable!(),
//!     None => {
//!         let err = Error::out_of_bounds(5, 0, m.rows(), m.columns());
//!         assert!(err.to_string().contains("5"));
//!     }
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::matrix::Matrix`] - Construction and checked access
//! - `vsl-ops` - Wrapped as `OpsError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or accessing sample arrays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Element coordinates are outside matrix bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vsl_core::Error;
    ///
    /// let err = Error::OutOfBounds { row: 7, column: 2, rows: 4, columns: 4 };
    /// assert!(err.to_string().contains("(7, 2)"));
    /// ```
    #[error("element ({row}, {column}) out of bounds for matrix {rows}x{columns}")]
    OutOfBounds {
        /// Row that was accessed
        row: usize,
        /// Column that was accessed
        column: usize,
        /// Matrix rows
        rows: usize,
        /// Matrix columns
        columns: usize,
    },

    /// Invalid matrix dimensions.
    ///
    /// Returned when a dimension product overflows or a consumer needs a
    /// non-empty array.
    #[error("invalid dimensions: {rows}x{columns} ({reason})")]
    InvalidDimensions {
        /// Requested rows
        rows: usize,
        /// Requested columns
        columns: usize,
        /// Reason why the dimensions are invalid
        reason: String,
    },

    /// Supplied buffer length does not match the requested shape.
    #[error("size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch {
        /// Element count required by the shape
        expected: usize,
        /// Element count supplied
        actual: usize,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: usize, column: usize, rows: usize, columns: usize) -> Self {
        Self::OutOfBounds {
            row,
            column,
            rows,
            columns,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(rows: usize, columns: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            rows,
            columns,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_size_mismatch() {
        let err = Error::SizeMismatch {
            expected: 12,
            actual: 10,
        };
        assert!(err.to_string().contains("expected 12"));
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(0, 3, "empty matrix");
        assert!(err.to_string().contains("0x3"));
        assert!(err.to_string().contains("empty matrix"));
    }
}
