//! Player records and the default roster.

use super::Mark;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A participant in a match. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: usize,
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a player.
    pub fn new(id: usize, name: impl Into<String>, mark: Mark) -> Self {
        Self {
            id,
            name: name.into(),
            mark,
        }
    }

    /// Ordinal position in the turn rotation.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

/// The three standard players: X, O and ▲, in turn order.
pub fn default_roster() -> Vec<Player> {
    Mark::iter()
        .enumerate()
        .map(|(id, mark)| Player::new(id, format!("Player {}", id + 1), mark))
        .collect()
}
