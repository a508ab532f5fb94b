//! Win detection for tri-tactics.
//!
//! The scan visits occupied cells in row-major order and tries each
//! [`Direction`] in [`Direction::SCAN_ORDER`]. The first complete run wins,
//! which fixes the tie-break when several lines exist at once: lowest row,
//! then lowest column, then direction order. A plain sequential scan is
//! used on purpose; the grid is far too small to benefit from anything else.

use super::super::{Board, CONNECT_LENGTH, Mark, Square, WinResult};
use super::draw::is_full;
use tracing::{debug, instrument};

/// One of the four canonical line directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Direction {
    /// Order in which directions are tried from each origin cell.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(row, col)` step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Evaluates a board with the standard connect length.
pub fn evaluate(board: &Board) -> WinResult {
    evaluate_with(board, CONNECT_LENGTH)
}

/// Evaluates a board, requiring `connect_length` identical marks in a row.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate_with(board: &Board, connect_length: usize) -> WinResult {
    let size = board.size();

    for row in 0..size {
        for col in 0..size {
            let Some(Square::Occupied(mark)) = board.at(row, col) else {
                continue;
            };

            for direction in Direction::SCAN_ORDER {
                if let Some(line) = run_from(board, row, col, direction, mark, connect_length) {
                    debug!(%mark, ?direction, ?line, "Winning run found");
                    return WinResult::Won { winner: mark, line };
                }
            }
        }
    }

    if is_full(board) {
        debug!("Board full with no run");
        WinResult::Draw
    } else {
        WinResult::Ongoing
    }
}

/// Collects the run starting at `(row, col)` if every stepped cell is on the
/// board and holds `mark`. Steps past an edge reject the run; they never wrap.
fn run_from(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    mark: Mark,
    connect_length: usize,
) -> Option<Vec<usize>> {
    let (d_row, d_col) = direction.delta();
    let mut line = Vec::with_capacity(connect_length);
    line.push(board.index_of(row, col));

    for step in 1..connect_length as isize {
        let r = row.checked_add_signed(d_row * step)?;
        let c = col.checked_add_signed(d_col * step)?;
        if board.at(r, c)? != Square::Occupied(mark) {
            return None;
        }
        line.push(board.index_of(r, c));
    }

    Some(line)
}
