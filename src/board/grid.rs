//! Rectangular grid of cell states.
//!
//! ## Storage
//!
//! Cells live in a flat `Vec<bool>` in column-major order (index =
//! `column * rows + row`); `true` is lit. The grid owns the toggle rules
//! but knows nothing about phases or notification, so it stays a pure
//! value type: two grids are equal exactly when their dimensions and lit
//! patterns match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardError, Coord, Dims};

#[derive(Deserialize)]
struct RawGrid {
    dims: Dims,
    cells: Vec<bool>,
}

/// Board storage plus the toggle rules.
///
/// Cell state is an explicit boolean, independent of any rendering
/// attribute a frontend may derive from it. Every mutating method
/// tolerates out-of-range positions: each position in a move's toggle set
/// is bounds-checked independently and skipped silently when it falls off
/// the board.
///
/// Invariant: `cells` holds exactly `dims.cell_count()` entries (enforced
/// by construction and, via `#[serde(try_from)]`, at the deserialization
/// boundary).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    dims: Dims,
    cells: Vec<bool>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = BoardError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.dims.cell_count() {
            return Err(BoardError::CellCountMismatch {
                expected: raw.dims.cell_count(),
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            dims: raw.dims,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Create an all-unlit grid.
    #[must_use]
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
        }
    }

    /// Board dimensions.
    #[must_use]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Cell state, or `None` when the coordinate is off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.dims.index_of(coord).map(|index| self.cells[index])
    }

    /// Whether a cell is lit. Off-board positions read as unlit.
    #[must_use]
    pub fn is_lit(&self, coord: Coord) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Flip a single cell. Returns whether anything flipped; off-board
    /// positions leave the grid untouched.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        match self.dims.index_of(coord) {
            Some(index) => {
                self.cells[index] = !self.cells[index];
                true
            }
            None => false,
        }
    }

    /// Apply one move: flip `coord` and each in-range orthogonal neighbor.
    ///
    /// Every position gets its own silent bounds check, so presses near an
    /// edge flip fewer cells: 5 interior, 4 on an edge, 3 in a corner,
    /// down to 1 on a 1x1 board. A press whose own cell is off the board
    /// flips nothing at all.
    ///
    /// Returns the coordinates that flipped, press first then neighbors.
    /// Applying the same move twice restores the grid.
    pub fn apply_move(&mut self, coord: Coord) -> SmallVec<[Coord; 5]> {
        let mut toggled = SmallVec::new();
        if !self.dims.contains(coord) {
            return toggled;
        }

        self.toggle(coord);
        toggled.push(coord);
        for neighbor in coord.neighbors() {
            if self.toggle(neighbor) {
                toggled.push(neighbor);
            }
        }
        toggled
    }

    /// Set every cell unlit.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// The shared state of all cells, if the board is uniform.
    ///
    /// Cell `(0, 0)` is the reference; the scan short-circuits on the
    /// first mismatch. `Some(true)` means all lit, `Some(false)` all
    /// unlit, `None` a mixed board.
    #[must_use]
    pub fn uniform_state(&self) -> Option<bool> {
        let reference = self.cells[0];
        if self.cells.iter().all(|&cell| cell == reference) {
            Some(reference)
        } else {
            None
        }
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterate `(coordinate, lit)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, bool)> + '_ {
        self.dims.coords().map(move |coord| (coord, self.is_lit(coord)))
    }
}
