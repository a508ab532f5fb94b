//! Core domain types for tri-tactics.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

use super::action::MoveError;

/// Side length of the playing grid.
pub const GRID_SIZE: usize = 5;

/// Number of identical marks in a row needed to win.
pub const CONNECT_LENGTH: usize = 4;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Cross, played by the first player.
    #[display("X")]
    X,
    /// Nought, played by the second player.
    #[display("O")]
    O,
    /// Triangle, played by the third player.
    #[display("▲")]
    #[serde(rename = "▲", alias = "Triangle")]
    Triangle,
}

impl Mark {
    /// Parses a board glyph. `T` and `^` are accepted for the triangle.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '▲' | 'T' | 't' | '^' => Some(Mark::Triangle),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// No mark yet.
    #[default]
    Empty,
    /// Holds a player's mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Grid dimensions and win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Rules {
    /// Side length of the square grid.
    grid_size: usize,
    /// Marks in a row needed to win.
    connect_length: usize,
}

impl Rules {
    /// Side length of the grid.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Marks in a row needed to win.
    pub fn connect_length(&self) -> usize {
        self.connect_length
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(GRID_SIZE, CONNECT_LENGTH)
    }
}

/// Square board stored in row-major order.
///
/// Boards are values: placing a mark produces a new board and leaves the
/// original untouched, so a snapshot handed to a consumer never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board of the default size.
    pub fn new() -> Self {
        Self::with_size(GRID_SIZE)
    }

    /// Creates an empty `size` x `size` board.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True for a zero-sized board.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Gets the square at a row-major index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at `(row, col)`, or `None` off the grid.
    pub fn at(&self, row: usize, col: usize) -> Option<Square> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.get(self.index_of(row, col))
    }

    /// Converts `(row, col)` to a row-major index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Converts a row-major index to `(row, col)`.
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns a new board with `mark` written at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the index is off the board, `CellOccupied` if the
    /// target already holds a mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Square::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(Square::Empty) => {
                let mut squares = self.squares.clone();
                squares[index] = Square::Occupied(mark);
                Ok(Board {
                    size: self.size,
                    squares,
                })
            }
        }
    }

    /// Iterates rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.max(1))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per line, cells separated by spaces, `.` for empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|square| match square {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Error parsing a board literal.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The literal contains no cells.
    #[display("Board literal is empty")]
    Empty,
    /// A character is neither a mark nor an empty-cell marker.
    #[display("Unknown board symbol {:?}", _0)]
    UnknownSymbol(char),
    /// The cell count is not a perfect square.
    #[display("{} cells do not form a square board", _0)]
    NotSquare(usize),
}

impl std::error::Error for BoardParseError {}

/// Parses a board literal such as `"XXXX. ..... ..... ..... ....."`.
///
/// Whitespace is ignored. `.`, `_` and `-` mark empty cells.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Mark::from_symbol(other)
                    .map(Square::Occupied)
                    .ok_or(BoardParseError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if squares.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let size = (squares.len() as f64).sqrt().round() as usize;
        if size * size != squares.len() {
            return Err(BoardParseError::NotSquare(squares.len()));
        }

        Ok(Board { size, squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.len(), GRID_SIZE * GRID_SIZE);
        assert_eq!(board.occupied(), 0);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(7, Mark::O).unwrap();
        assert_eq!(board.get(7), Some(Square::Empty));
        assert_eq!(next.get(7), Some(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_with_mark_rejects_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.with_mark(25, Mark::X), Err(MoveError::OutOfBounds(25)));
    }

    #[test]
    fn test_with_mark_rejects_occupied() {
        let board = Board::new().with_mark(3, Mark::X).unwrap();
        assert_eq!(
            board.with_mark(3, Mark::Triangle),
            Err(MoveError::CellOccupied(3))
        );
    }

    #[test]
    fn test_coordinates_are_row_major() {
        let board = Board::new();
        assert_eq!(board.index_of(2, 3), 13);
        assert_eq!(board.coords_of(13), (2, 3));
        assert_eq!(board.at(5, 0), None);
    }

    #[test]
    fn test_parse_board_literal() {
        let board: Board = "X O ▲ . \n T ^ - _ \n .... \n oxxo".parse().unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.get(2), Some(Square::Occupied(Mark::Triangle)));
        assert_eq!(board.get(4), Some(Square::Occupied(Mark::Triangle)));
        assert_eq!(board.get(6), Some(Square::Empty));
        assert_eq!(board.count(Mark::X), 3);
    }

    #[test]
    fn test_parse_rejects_bad_literals() {
        assert_eq!("".parse::<Board>(), Err(BoardParseError::Empty));
        assert_eq!("XO.".parse::<Board>(), Err(BoardParseError::NotSquare(3)));
        assert_eq!(
            "XO.Z".parse::<Board>(),
            Err(BoardParseError::UnknownSymbol('Z'))
        );
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::with_size(2).with_mark(1, Mark::Triangle).unwrap();
        assert_eq!(board.to_string(), ". ▲\n. .");
    }

    #[test]
    fn test_marks_serialize_as_glyphs() {
        for (mark, json) in [(Mark::X, "\"X\""), (Mark::O, "\"O\""), (Mark::Triangle, "\"▲\"")] {
            let encoded = serde_json::to_string(&mark).unwrap();
            assert_eq!(encoded, json);
            let glyph = encoded.trim_matches('"').chars().next().unwrap();
            assert_eq!(Mark::from_symbol(glyph), Some(mark));
        }
    }

    #[test]
    fn test_triangle_accepts_variant_name() {
        let mark: Mark = serde_json::from_str("\"Triangle\"").unwrap();
        assert_eq!(mark, Mark::Triangle);
    }
}
