//! Prompt construction for move hints.

use crate::games::tri_tactics::{Board, GameSession, Player, Rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything the advisor needs, detached from the live session.
///
/// The board is a snapshot: moves made after the request was issued are
/// invisible to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintRequest {
    /// Session epoch when the request was issued.
    pub epoch: u64,
    /// Board at the time of the request.
    pub board: Board,
    /// Player to advise.
    pub current: Player,
    /// All players in turn order.
    pub players: Vec<Player>,
    /// Grid size and connect length.
    pub rules: Rules,
}

impl HintRequest {
    /// Captures the session's current state.
    #[instrument(skip(session), fields(epoch = session.epoch()))]
    pub fn from_session(session: &GameSession) -> Self {
        Self {
            epoch: session.epoch(),
            board: session.snapshot(),
            current: session.active_player().clone(),
            players: session.players().to_vec(),
            rules: session.rules(),
        }
    }

    /// Builds a request for a bare board, deriving the active player from
    /// the number of marks already placed.
    ///
    /// # Panics
    ///
    /// Panics if `players` is empty.
    pub fn for_board(board: Board, players: Vec<Player>, rules: Rules) -> Self {
        assert!(!players.is_empty(), "A hint request needs at least one player");
        let current = players[board.occupied() % players.len()].clone();
        Self {
            epoch: 0,
            board,
            current,
            players,
            rules,
        }
    }

    /// System prompt describing the advisor's role.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are an expert strategic game advisor for a {}-player Tic-Tac-Toe variant.",
            self.players.len()
        )
    }

    /// User message with rules, board and task.
    pub fn user_message(&self) -> String {
        let size = self.rules.grid_size();
        let roster = self
            .players
            .iter()
            .map(|p| format!("{} ({})", p.name(), p.mark()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "RULES:\n\
             1. The game is played on a {size}x{size} grid.\n\
             2. There are {count} players: {roster}.\n\
             3. The goal is to get {connect} of your symbols in a row (horizontal, vertical, or diagonal).\n\
             4. It is currently {name}'s turn (Symbol: {mark}).\n\
             \n\
             CURRENT BOARD STATE:\n\
             {board}\n\
             \n\
             TASK:\n\
             Analyze the board. Identify threats from other players and winning opportunities for the current player.\n\
             Suggest the SINGLE best move for {name} in format (Row, Col) using 0-based indexing.\n\
             Provide a brief, witty, 1-sentence explanation of why.\n\
             \n\
             Output format: \"Move: (row, col). Reason: [Reasoning]\"",
            count = self.players.len(),
            connect = self.rules.connect_length(),
            name = self.current.name(),
            mark = self.current.mark(),
            board = self.board,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tri_tactics::Mark;

    #[test]
    fn test_request_captures_active_player() {
        let mut session = GameSession::new();
        session.place_mark(0).unwrap();
        let request = HintRequest::from_session(&session);
        assert_eq!(request.current.mark(), Mark::O);
        assert_eq!(request.epoch, 1);
        assert_eq!(request.board.occupied(), 1);
    }

    #[test]
    fn test_request_survives_later_moves() {
        let mut session = GameSession::new();
        let request = HintRequest::from_session(&session);
        session.place_mark(4).unwrap();
        assert_eq!(request.board.occupied(), 0);
        assert_ne!(request.epoch, session.epoch());
    }

    #[test]
    fn test_user_message_contents() {
        let mut session = GameSession::new();
        session.place_mark(0).unwrap();
        session.place_mark(6).unwrap();
        let message = HintRequest::from_session(&session).user_message();

        assert!(message.contains("5x5 grid"));
        assert!(message.contains("get 4 of your symbols in a row"));
        assert!(message.contains("Player 3's turn (Symbol: ▲)"));
        assert!(message.contains("Player 1 (X), Player 2 (O), Player 3 (▲)"));
        assert!(message.contains("X . . . .\n. O . . .\n. . . . ."));
        assert!(message.contains("Move: (row, col). Reason:"));
    }

    #[test]
    fn test_for_board_derives_turn_from_occupancy() {
        let board: Board = "XO... ..... ..... ..... .....".parse().unwrap();
        let request = HintRequest::for_board(
            board,
            crate::games::tri_tactics::default_roster(),
            Rules::default(),
        );
        assert_eq!(request.current.mark(), Mark::Triangle);
    }

    #[test]
    #[should_panic(expected = "at least one player")]
    fn test_for_board_rejects_empty_roster() {
        HintRequest::for_board(Board::new(), Vec::new(), Rules::default());
    }
}
