//! Cell coordinates.
//!
//! Coordinates are signed so that the neighbor positions of edge cells
//! (e.g. `(-1, 0)` left of the first column) are ordinary values that fail
//! a bounds check, rather than being unrepresentable. The toggle rules
//! depend on this: every position in a move's toggle set gets the same
//! silent bounds check.

use serde::{Deserialize, Serialize};

/// A (column, row) cell position.
///
/// `(0, 0)` is the top-left cell; columns grow rightward, rows downward.
/// A `Coord` may lie outside any particular board - `Dims::contains`
/// decides that.
///
/// ```
/// use lights_out::core::Coord;
///
/// let coord = Coord::new(2, 1);
/// assert_eq!(coord.column, 2);
/// assert_eq!(coord.row, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column index (0-based).
    pub column: i32,
    /// Row index (0-based).
    pub row: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// The four orthogonal neighbors: left, right, up, down.
    ///
    /// Neighbors of edge cells land off the board; callers bounds-check
    /// each position independently.
    ///
    /// ```
    /// use lights_out::core::Coord;
    ///
    /// let neighbors = Coord::new(0, 0).neighbors();
    /// assert_eq!(neighbors[0], Coord::new(-1, 0)); // off any board
    /// assert_eq!(neighbors[1], Coord::new(1, 0));
    /// ```
    #[must_use]
    pub const fn neighbors(self) -> [Coord; 4] {
        [
            Coord::new(self.column - 1, self.row),
            Coord::new(self.column + 1, self.row),
            Coord::new(self.column, self.row - 1),
            Coord::new(self.column, self.row + 1),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let coord = Coord::new(3, 7);
        assert_eq!(coord.column, 3);
        assert_eq!(coord.row, 7);
    }

    #[test]
    fn test_neighbors_interior() {
        let neighbors = Coord::new(2, 2).neighbors();

        assert_eq!(neighbors[0], Coord::new(1, 2)); // left
        assert_eq!(neighbors[1], Coord::new(3, 2)); // right
        assert_eq!(neighbors[2], Coord::new(2, 1)); // up
        assert_eq!(neighbors[3], Coord::new(2, 3)); // down
    }

    #[test]
    fn test_neighbors_of_origin_go_negative() {
        let neighbors = Coord::new(0, 0).neighbors();

        assert!(neighbors.contains(&Coord::new(-1, 0)));
        assert!(neighbors.contains(&Coord::new(0, -1)));
    }

    #[test]
    fn test_from_tuple() {
        let coord: Coord = (4, 1).into();
        assert_eq!(coord, Coord::new(4, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(2, 3)), "(2, 3)");
        assert_eq!(format!("{}", Coord::new(-1, 0)), "(-1, 0)");
    }
}
