//! Tri-Tactics: three-player connect-4 on a 5x5 grid.
//!
//! # Architecture
//!
//! - **Games**: board, win/draw evaluation and the turn-taking session
//! - **Hint**: LLM move advice that degrades to fixed messages
//! - **TUI**: ratatui front end for hot-seat play
//!
//! # Example
//!
//! ```
//! use tri_tactics::{GameSession, Mark, MatchStatus};
//!
//! let mut session = GameSession::new();
//! assert_eq!(session.status(), MatchStatus::NotStarted);
//!
//! session.place_mark(12).unwrap();
//! assert_eq!(session.board().get(12).and_then(|s| s.mark()), Some(Mark::X));
//! assert_eq!(session.active_player().mark(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod hint;
mod hint_config;
mod llm_client;
mod tui;

// Crate-level exports - Game types
pub use games::tri_tactics::{
    Board, BoardParseError, CONNECT_LENGTH, Direction, GRID_SIZE, GameSession, Mark,
    MatchStatus, Move, MoveError, Player, Rules, Square, WinResult, WinSummary, default_roster,
    evaluate, evaluate_with, is_full,
};

// Crate-level exports - Session invariants
pub use games::tri_tactics::invariants::{
    Invariant, InvariantSet, InvariantViolation, SessionInvariants,
};

// Crate-level exports - Hints
pub use hint::{
    FAILURE_MESSAGE, HintProvider, HintRequest, HintResponse, HintService, MISSING_KEY_MESSAGE,
};
pub use hint_config::{ConfigError, HintConfig};

// Crate-level exports - LLM client
pub use llm_client::{LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
