//! Board dimensions.
//!
//! `Dims` is the validated shape of a board: column and row counts are
//! checked once at construction, and every later bounds check is phrased
//! against it. Dimensions never change for the lifetime of a board.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::error::BoardError;

#[derive(Deserialize)]
struct RawDims {
    columns: i32,
    rows: i32,
}

/// Validated board dimensions: at least one column and one row.
///
/// Invariant: both counts are positive (enforced by [`Dims::new`] and,
/// via `#[serde(try_from)]`, at the deserialization boundary).
///
/// ```
/// use lights_out::core::{Coord, Dims};
///
/// let dims = Dims::new(3, 2).unwrap();
/// assert_eq!(dims.cell_count(), 6);
/// assert!(dims.contains(Coord::new(2, 1)));
/// assert!(!dims.contains(Coord::new(3, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDims")]
pub struct Dims {
    columns: i32,
    rows: i32,
}

impl TryFrom<RawDims> for Dims {
    type Error = BoardError;

    fn try_from(raw: RawDims) -> Result<Self, Self::Error> {
        Self::new(raw.columns, raw.rows)
    }
}

impl Dims {
    /// The conventional Lights Out board: 5x5.
    pub const CLASSIC: Dims = Dims {
        columns: 5,
        rows: 5,
    };

    /// Validate column and row counts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] when either count is zero
    /// or negative.
    pub fn new(columns: i32, rows: i32) -> Result<Self, BoardError> {
        if columns <= 0 || rows <= 0 {
            return Err(BoardError::InvalidDimensions { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Column count.
    #[must_use]
    pub const fn columns(self) -> i32 {
        self.columns
    }

    /// Row count.
    #[must_use]
    pub const fn rows(self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Whether a coordinate lies on the board.
    #[must_use]
    pub const fn contains(self, coord: Coord) -> bool {
        coord.column >= 0 && coord.column < self.columns && coord.row >= 0 && coord.row < self.rows
    }

    /// Flat storage index for a coordinate, column-major.
    ///
    /// `None` when the coordinate is off the board.
    #[must_use]
    pub fn index_of(self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.column as usize * self.rows as usize + coord.row as usize)
        } else {
            None
        }
    }

    /// Iterate every coordinate in storage order (column by column).
    pub fn coords(self) -> impl Iterator<Item = Coord> {
        (0..self.columns)
            .flat_map(move |column| (0..self.rows).map(move |row| Coord::new(column, row)))
    }
}

impl Default for Dims {
    /// The classic 5x5 board.
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
