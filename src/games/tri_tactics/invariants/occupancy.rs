//! Occupancy invariant: occupied cells equal the turn counter.

use super::super::GameSession;
use super::Invariant;

/// Invariant: the number of occupied cells equals the turn counter.
///
/// Writing a mark and advancing the counter happen together, so no cell
/// is ever filled without a turn and no turn passes without a mark.
pub struct OccupancyMatchesTurn;

impl Invariant<GameSession> for OccupancyMatchesTurn {
    fn holds(session: &GameSession) -> bool {
        session.board().occupied() == session.turn()
    }

    fn description() -> &'static str {
        "Occupied cells match the turn counter"
    }
}
