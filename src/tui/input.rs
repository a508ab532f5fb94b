//! Key bindings.

use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by (rows, columns).
    Cursor(isize, isize),
    /// Place a mark under the cursor.
    Place,
    /// Ask for a hint.
    Hint,
    /// Start a new match.
    Restart,
    /// Open or close the rules overlay.
    ToggleRules,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action during play.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Char('w') => Some(Action::Cursor(-1, 0)),
        KeyCode::Down | KeyCode::Char('s') => Some(Action::Cursor(1, 0)),
        KeyCode::Left | KeyCode::Char('a') => Some(Action::Cursor(0, -1)),
        KeyCode::Right | KeyCode::Char('d') => Some(Action::Cursor(0, 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
        KeyCode::Char('h') => Some(Action::Hint),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('?') => Some(Action::ToggleRules),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a key to an action while the rules overlay is open.
///
/// Only closing the overlay and quitting are available.
pub fn overlay_action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('?') => {
            Some(Action::ToggleRules)
        }
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd_agree() {
        assert_eq!(action_for(KeyCode::Up), action_for(KeyCode::Char('w')));
        assert_eq!(action_for(KeyCode::Left), Some(Action::Cursor(0, -1)));
        assert_eq!(action_for(KeyCode::Char('d')), Some(Action::Cursor(0, 1)));
    }

    #[test]
    fn test_place_keys() {
        assert_eq!(action_for(KeyCode::Enter), Some(Action::Place));
        assert_eq!(action_for(KeyCode::Char(' ')), Some(Action::Place));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(action_for(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_escape_closes_overlay_before_quitting() {
        assert_eq!(overlay_action_for(KeyCode::Esc), Some(Action::ToggleRules));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(overlay_action_for(KeyCode::Char('h')), None);
    }
}
