//! Status invariant: the match status agrees with the turn count and result.

use super::super::{GameSession, MatchStatus};
use super::Invariant;

/// Invariant: `Ended` iff the last result is terminal, `NotStarted` iff no
/// mark has been placed.
pub struct StatusMatchesResult;

impl Invariant<GameSession> for StatusMatchesResult {
    fn holds(session: &GameSession) -> bool {
        let terminal = session.result().is_terminal();
        match session.status() {
            MatchStatus::NotStarted => session.turn() == 0 && !terminal,
            MatchStatus::InProgress => session.turn() > 0 && !terminal,
            MatchStatus::Ended => terminal,
        }
    }

    fn description() -> &'static str {
        "Match status agrees with the turn counter and result"
    }
}
