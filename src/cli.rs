//! Command-line interface for tri_tactics.

use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Tri-Tactics - three-player connect-4 in the terminal
#[derive(Parser, Debug)]
#[command(name = "tri_tactics")]
#[command(about = "Three-player connect-4 on a 5x5 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat match in the terminal
    Play {
        /// Path to hint configuration
        #[arg(long, default_value = "tri_tactics.toml")]
        hint_config: PathBuf,
    },

    /// Evaluate a board and print the verdict as JSON
    Evaluate {
        /// Board cells in row-major order (X, O, ▲ or T, and . for empty)
        board: String,

        /// Marks in a row needed to win
        #[arg(short, long)]
        connect_length: Option<NonZeroUsize>,
    },

    /// Ask the AI for a move suggestion on a board
    Hint {
        /// Board cells in row-major order (X, O, ▲ or T, and . for empty)
        board: String,

        /// Path to hint configuration
        #[arg(long, default_value = "tri_tactics.toml")]
        hint_config: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_length_must_be_positive() {
        let parsed = Cli::try_parse_from(["tri_tactics", "evaluate", "X....", "--connect-length", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_connect_length_is_optional() {
        let cli = Cli::try_parse_from(["tri_tactics", "evaluate", "XXX......"]).unwrap();
        let Command::Evaluate { connect_length, .. } = cli.command else {
            panic!("Expected evaluate");
        };
        assert_eq!(connect_length, None);

        let cli = Cli::try_parse_from(["tri_tactics", "evaluate", "XXX......", "-c", "3"]).unwrap();
        let Command::Evaluate { connect_length, .. } = cli.command else {
            panic!("Expected evaluate");
        };
        assert_eq!(connect_length, NonZeroUsize::new(3));
    }
}
