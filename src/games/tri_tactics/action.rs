//! Moves and move rejection.

use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A mark placed by a player at a board index.
///
/// Returned by the session controller for every accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Ordinal of the player who moved.
    pub player_id: usize,
    /// The mark written to the board.
    pub mark: Mark,
    /// Row-major board index.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player_id: usize, mark: Mark, index: usize) -> Self {
        Self {
            player_id,
            mark,
            index,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Why a move was rejected. A rejected move never changes the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Index {} is off the board", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The match has a winner or is drawn.
    #[display("Match is already over")]
    MatchEnded,
}

impl std::error::Error for MoveError {}
