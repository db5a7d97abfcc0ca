//! Move records for the history journal.
//!
//! Every accepted move, whether pressed by a player or drawn by the
//! scrambler, is journaled as a [`MoveRecord`]. Because scrambles are
//! built from ordinary moves, replaying a journal's toggle sets from an
//! all-unlit grid reproduces the board it was recorded on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::Coord;

/// Who initiated a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOrigin {
    /// A player pressed a cell.
    Player,
    /// The scrambler drew a cell.
    Scramble,
}

/// One applied move, as kept in the history journal.
///
/// `toggled` lists the cells that actually flipped: the pressed cell plus
/// its in-range orthogonal neighbors, so 1 to 5 positions depending on how
/// close the press was to an edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The pressed coordinate.
    pub coord: Coord,
    /// Player press or scramble draw.
    pub origin: MoveOrigin,
    /// Position in the journal, 0-based and monotonic since the last
    /// clear.
    pub sequence: u32,
    /// Cells flipped by this move, press first then neighbors.
    /// A toggle set never exceeds 5 positions, so it stays inline.
    pub toggled: SmallVec<[Coord; 5]>,
}

impl MoveRecord {
    /// Create a record.
    #[must_use]
    pub fn new(
        coord: Coord,
        origin: MoveOrigin,
        sequence: u32,
        toggled: SmallVec<[Coord; 5]>,
    ) -> Self {
        Self {
            coord,
            origin,
            sequence,
            toggled,
        }
    }

    /// Number of cells this move flipped.
    #[must_use]
    pub fn toggle_count(&self) -> usize {
        self.toggled.len()
    }

    /// Whether the move came from the scrambler.
    #[must_use]
    pub fn is_scramble(&self) -> bool {
        self.origin == MoveOrigin::Scramble
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_new() {
        let record = MoveRecord::new(
            Coord::new(1, 1),
            MoveOrigin::Player,
            0,
            smallvec![Coord::new(1, 1), Coord::new(0, 1)],
        );

        assert_eq!(record.coord, Coord::new(1, 1));
        assert_eq!(record.origin, MoveOrigin::Player);
        assert_eq!(record.sequence, 0);
        assert_eq!(record.toggle_count(), 2);
        assert!(!record.is_scramble());
    }

    #[test]
    fn test_is_scramble() {
        let record = MoveRecord::new(
            Coord::new(0, 0),
            MoveOrigin::Scramble,
            3,
            smallvec![Coord::new(0, 0)],
        );
        assert!(record.is_scramble());
    }

    #[test]
    fn test_serialization_round_trip() {
        let record = MoveRecord::new(
            Coord::new(2, 0),
            MoveOrigin::Player,
            7,
            smallvec![Coord::new(2, 0), Coord::new(1, 0), Coord::new(2, 1)],
        );

        let json = serde_json::to_string(&record).unwrap();
        let restored: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, restored);
    }
}
