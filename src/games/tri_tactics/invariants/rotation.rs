//! Rotation invariant: each player has had exactly their share of turns.

use super::super::GameSession;
use super::Invariant;

/// Invariant: marks on the board follow the turn rotation.
///
/// After `t` turns among `n` players, player `i` has placed
/// `t / n + (i < t % n)` marks.
pub struct MarksFollowRotation;

impl Invariant<GameSession> for MarksFollowRotation {
    fn holds(session: &GameSession) -> bool {
        let turn = session.turn();
        let n = session.players().len();

        session.players().iter().enumerate().all(|(i, player)| {
            let expected = turn / n + usize::from(i < turn % n);
            session.board().count(player.mark()) == expected
        })
    }

    fn description() -> &'static str {
        "Marks follow the player rotation"
    }
}
