//! Draw detection.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board with no winning run is a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tri_tactics::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(12, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XO▲ O▲X ▲XO".parse().unwrap();
        assert!(is_full(&board));
    }
}
