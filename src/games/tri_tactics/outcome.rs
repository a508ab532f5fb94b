//! Evaluation results.

use super::Mark;
use serde::{Deserialize, Serialize};

/// Verdict of evaluating a board.
///
/// Exactly one of "someone won", "draw" and "still going" holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WinResult {
    /// No winning run and at least one empty cell.
    #[default]
    Ongoing,
    /// A run of the connect length was found.
    Won {
        /// Mark forming the run.
        winner: Mark,
        /// Board indices of the run, origin first.
        line: Vec<usize>,
    },
    /// Board full with no winning run.
    Draw,
}

impl WinResult {
    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            WinResult::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<&[usize]> {
        match self {
            WinResult::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// True for a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, WinResult::Draw)
    }

    /// True when the match cannot continue.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WinResult::Ongoing)
    }

    /// True if `index` is part of the winning line.
    pub fn highlights(&self, index: usize) -> bool {
        self.line().is_some_and(|line| line.contains(&index))
    }
}

impl std::fmt::Display for WinResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinResult::Ongoing => write!(f, "Ongoing"),
            WinResult::Won { winner, .. } => write!(f, "Winner: {}", winner),
            WinResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Flat `{winner, line, is_draw}` view of a [`WinResult`] for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    /// Winning mark, if any.
    pub winner: Option<Mark>,
    /// Winning line, if any.
    pub line: Option<Vec<usize>>,
    /// True for a draw.
    pub is_draw: bool,
}

impl From<&WinResult> for WinSummary {
    fn from(result: &WinResult) -> Self {
        Self {
            winner: result.winner(),
            line: result.line().map(<[usize]>::to_vec),
            is_draw: result.is_draw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ongoing_summary() {
        let summary = WinSummary::from(&WinResult::Ongoing);
        assert_eq!(summary.winner, None);
        assert_eq!(summary.line, None);
        assert!(!summary.is_draw);
    }

    #[test]
    fn test_won_summary_serializes_flat() {
        let result = WinResult::Won {
            winner: Mark::O,
            line: vec![0, 6, 12, 18],
        };
        let json = serde_json::to_value(WinSummary::from(&result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"winner": "O", "line": [0, 6, 12, 18], "is_draw": false})
        );
    }

    #[test]
    fn test_highlights_only_winning_cells() {
        let result = WinResult::Won {
            winner: Mark::X,
            line: vec![1, 2, 3, 4],
        };
        assert!(result.highlights(3));
        assert!(!result.highlights(0));
        assert!(!WinResult::Draw.highlights(3));
    }
}
