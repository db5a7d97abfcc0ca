//! Error taxonomy.
//!
//! Construction is the only fallible operation, and deserializing a
//! snapshot counts as construction: a board cannot exist with a
//! non-positive dimension or a cell buffer that disagrees with its
//! dimensions. Everything after successful construction is total over
//! its input domain; out-of-range move coordinates are silent no-ops,
//! not errors.

use thiserror::Error;

/// Errors surfaced when building a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Requested column or row count was zero or negative.
    #[error("invalid board dimensions {columns}x{rows}: both counts must be at least 1")]
    InvalidDimensions {
        /// Requested column count.
        columns: i32,
        /// Requested row count.
        rows: i32,
    },

    /// Serialized cell buffer length disagreed with the dimensions.
    #[error("invalid cell buffer: expected {expected} cells, found {found}")]
    CellCountMismatch {
        /// Cell count the dimensions call for.
        expected: usize,
        /// Cell count the snapshot supplied.
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = BoardError::InvalidDimensions {
            columns: 0,
            rows: -3,
        };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 0x-3: both counts must be at least 1"
        );
    }

    #[test]
    fn test_cell_count_mismatch_message() {
        let err = BoardError::CellCountMismatch {
            expected: 4,
            found: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid cell buffer: expected 4 cells, found 0"
        );
    }

    #[test]
    fn test_equality() {
        let a = BoardError::InvalidDimensions { columns: 0, rows: 5 };
        let b = BoardError::InvalidDimensions { columns: 0, rows: 5 };
        let c = BoardError::InvalidDimensions { columns: 5, rows: 0 };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
