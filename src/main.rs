//! Tri-Tactics - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tri_tactics::{
    Board, CONNECT_LENGTH, HintConfig, HintRequest, HintService, Rules, WinSummary,
    default_roster, evaluate_with,
};

const DEFAULT_FILTER: &str = "info,tri_tactics=debug";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { hint_config } => run_play(hint_config).await,
        Command::Evaluate {
            board,
            connect_length,
        } => run_evaluate(board, connect_length),
        Command::Hint { board, hint_config } => run_hint(board, hint_config).await,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to stderr so stdout stays machine-readable.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive TUI
async fn run_play(hint_config: PathBuf) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    let log_file = std::fs::File::create("tri_tactics.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let config = HintConfig::load_or_default(&hint_config)?;
    let service = HintService::from_config(&config);
    tri_tactics::run_tui(service).await
}

/// Evaluate a board from the command line
#[instrument(skip(board))]
fn run_evaluate(board: String, connect_length: Option<NonZeroUsize>) -> Result<()> {
    init_stderr_logging();

    let board: Board = board.parse()?;
    let connect_length = connect_length.map_or(CONNECT_LENGTH, NonZeroUsize::get);
    let result = evaluate_with(&board, connect_length);
    info!(%result, connect_length, "Board evaluated");

    println!("{}", serde_json::to_string(&WinSummary::from(&result))?);
    Ok(())
}

/// Ask for a single hint and print it
async fn run_hint(board: String, hint_config: PathBuf) -> Result<()> {
    init_stderr_logging();

    let board: Board = board.parse()?;
    let rules = Rules::new(board.size(), CONNECT_LENGTH.min(board.size()));
    let config = HintConfig::load_or_default(&hint_config)?;
    let service = HintService::from_config(&config);

    let request = HintRequest::for_board(board, default_roster(), rules);
    info!(player = %request.current, "Requesting hint");
    let response = service.request_hint(request).await;

    println!("{}", response.text);
    Ok(())
}
