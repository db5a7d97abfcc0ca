//! The two-state phase machine around completion.

use serde::{Deserialize, Serialize};

/// Whether the engine currently accepts player moves.
///
/// A board enters `Finished` the moment a move (or a scramble's final
/// position) leaves every cell in the same state, and stays there until a
/// clear or another scramble. While finished, player moves are refused, so
/// the solved board stays on display exactly as the last move left it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    Active,
    /// The board is uniform; moves are refused until a clear or scramble.
    Finished,
}

impl Phase {
    /// Whether player moves should be refused.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, Phase::Finished)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Active => write!(f, "Active"),
            Phase::Finished => write!(f, "Finished"),
        }
    }
}
