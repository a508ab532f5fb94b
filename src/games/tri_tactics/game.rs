//! Match controller for tri-tactics.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::player::{Player, default_roster};
use super::rules::evaluate_with;
use super::types::{Board, Rules};
use super::WinResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MatchStatus {
    /// No mark placed yet.
    #[display("Not started")]
    NotStarted,
    /// At least one mark placed, no winner or draw.
    #[display("In progress")]
    InProgress,
    /// Winner or draw found. Only `reset` leaves this state.
    #[display("Ended")]
    Ended,
}

/// Owns the board, turn counter and status of one match.
///
/// The active player is always `players[turn % players.len()]`; it is
/// derived from the counter and never stored.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) rules: Rules,
    pub(crate) turn: usize,
    pub(crate) status: MatchStatus,
    pub(crate) result: WinResult,
    pub(crate) epoch: u64,
}

impl GameSession {
    /// Creates a session with the default roster and rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(default_roster(), Rules::default())
    }

    /// Creates a session with the given players and rules.
    ///
    /// `players` must have pairwise distinct marks.
    ///
    /// # Panics
    ///
    /// Panics if `players` is empty.
    #[instrument(skip(players), fields(player_count = players.len()))]
    pub fn with_rules(players: Vec<Player>, rules: Rules) -> Self {
        assert!(!players.is_empty(), "A session needs at least one player");
        info!(
            grid_size = rules.grid_size(),
            connect_length = rules.connect_length(),
            "Creating game session"
        );
        Self {
            board: Board::with_size(rules.grid_size()),
            players,
            rules,
            turn: 0,
            status: MatchStatus::NotStarted,
            result: WinResult::Ongoing,
            epoch: 0,
        }
    }

    /// Places the active player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Rejected without any change to the session if the match has ended,
    /// the index is off the board, or the cell is occupied.
    #[instrument(skip(self), fields(turn = self.turn, status = %self.status))]
    pub fn place_mark(&mut self, index: usize) -> Result<Move, MoveError> {
        if self.status == MatchStatus::Ended {
            warn!("Move rejected: match is over");
            return Err(MoveError::MatchEnded);
        }

        let player = self.active_player();
        let action = Move::new(player.id(), player.mark(), index);

        let board = self.board.with_mark(index, action.mark).map_err(|e| {
            warn!(error = %e, "Move rejected");
            e
        })?;
        let result = evaluate_with(&board, self.rules.connect_length());

        self.board = board;
        self.turn += 1;
        self.epoch += 1;
        self.status = if result.is_terminal() {
            MatchStatus::Ended
        } else {
            MatchStatus::InProgress
        };
        self.result = result;

        debug!(%action, status = %self.status, result = %self.result, "Move applied");
        if self.status == MatchStatus::Ended {
            info!(result = %self.result, turns = self.turn, "Match ended");
        }

        debug_assert!(
            self.check_invariants().is_ok(),
            "Session invariants violated: {:?}",
            self.check_invariants()
        );

        Ok(action)
    }

    /// Starts a fresh match with the same players and rules.
    #[instrument(skip(self), fields(turn = self.turn, status = %self.status))]
    pub fn reset(&mut self) {
        info!("Resetting game session");
        self.board = Board::with_size(self.rules.grid_size());
        self.turn = 0;
        self.status = MatchStatus::NotStarted;
        self.result = WinResult::Ongoing;
        self.epoch += 1;
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned copy of the current board, unaffected by later moves.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Player whose turn it is.
    pub fn active_player(&self) -> &Player {
        &self.players[self.turn % self.players.len()]
    }

    /// All players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Grid size and connect length.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Marks placed since the last reset.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Result of the last evaluation.
    pub fn result(&self) -> &WinResult {
        &self.result
    }

    /// Counter bumped by every accepted move and every reset.
    ///
    /// Work started against one epoch is stale once the epoch moves on.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Checks all session invariants.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(self)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
