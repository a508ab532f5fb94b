//! Application state and logic.

use crate::games::tri_tactics::{GameSession, MatchStatus, WinResult};
use crate::hint::{HintRequest, HintResponse};
use tracing::{debug, info};

/// Progress of the current hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintState {
    /// No hint requested since the last move.
    Idle,
    /// Waiting for the provider.
    Thinking,
    /// Advice to display.
    Ready(String),
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: usize,
    hint: HintState,
    show_rules: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app with the rules overlay open.
    pub fn new(session: GameSession) -> Self {
        let size = session.rules().grid_size();
        Self {
            session,
            cursor: (size / 2) * size + size / 2,
            hint: HintState::Idle,
            show_rules: true,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current hint state.
    pub fn hint(&self) -> &HintState {
        &self.hint
    }

    /// Whether the rules overlay is open.
    pub fn show_rules(&self) -> bool {
        self.show_rules
    }

    /// Last rejection message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Moves the cursor, stopping at the grid edges.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let board = self.session.board();
        let size = board.size();
        let (row, col) = board.coords_of(self.cursor);
        let row = row.saturating_add_signed(d_row).min(size - 1);
        let col = col.saturating_add_signed(d_col).min(size - 1);
        self.cursor = board.index_of(row, col);
    }

    /// Places the active player's mark under the cursor.
    pub fn place_at_cursor(&mut self) {
        self.place(self.cursor);
    }

    /// Places the active player's mark at `index`.
    ///
    /// Rejected moves leave the session untouched and set a message.
    pub fn place(&mut self, index: usize) {
        match self.session.place_mark(index) {
            Ok(action) => {
                debug!(%action, "Move applied to UI state");
                self.hint = HintState::Idle;
                self.message = None;
            }
            Err(e) => {
                debug!(error = %e, "Move rejected in UI");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Starts a new match.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.session.reset();
        self.hint = HintState::Idle;
        self.message = None;
    }

    /// Opens or closes the rules overlay.
    pub fn toggle_rules(&mut self) {
        self.show_rules = !self.show_rules;
    }

    /// Marks a hint as pending and returns the request to send.
    ///
    /// Returns `None` after the match has ended or while a hint is pending.
    pub fn begin_hint(&mut self) -> Option<HintRequest> {
        if self.session.status() == MatchStatus::Ended || self.hint == HintState::Thinking {
            return None;
        }
        self.hint = HintState::Thinking;
        Some(HintRequest::from_session(&self.session))
    }

    /// Shows a hint if it was requested for the current position.
    ///
    /// Returns `false` and discards the response if a move or restart
    /// happened after the request was issued.
    pub fn apply_hint(&mut self, response: HintResponse) -> bool {
        if response.epoch != self.session.epoch() {
            debug!(
                response_epoch = response.epoch,
                current_epoch = self.session.epoch(),
                "Discarding stale hint"
            );
            return false;
        }
        self.hint = HintState::Ready(response.text);
        true
    }

    /// One-line status for the current match.
    pub fn status_line(&self) -> String {
        match self.session.result() {
            WinResult::Won { winner, .. } => format!("Winner: {}! Glorious victory!", winner),
            WinResult::Draw => "It's a Draw!".to_string(),
            WinResult::Ongoing => {
                let player = self.session.active_player();
                format!("{}'s turn ({})", player.name(), player.mark())
            }
        }
    }
}
