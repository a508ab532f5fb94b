//! Three-player connect-four on a square grid.

mod action;
mod game;
pub mod invariants;
mod outcome;
mod player;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{GameSession, MatchStatus};
pub use outcome::{WinResult, WinSummary};
pub use player::{Player, default_roster};
pub use rules::{Direction, evaluate, evaluate_with, is_full};
pub use types::{Board, BoardParseError, CONNECT_LENGTH, GRID_SIZE, Mark, Rules, Square};
