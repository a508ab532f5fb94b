//! Terminal UI for Tri-Tactics.

mod app;
mod input;
mod ui;

use app::App;
use input::{Action, action_for, overlay_action_for};

use crate::games::tri_tactics::GameSession;
use crate::hint::{HintResponse, HintService};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Runs the interactive game until the player quits.
pub async fn run_tui(service: HintService) -> Result<()> {
    info!(hints = service.is_configured(), "Starting Tri-Tactics TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(GameSession::new());
    let res = run_game(&mut terminal, &mut app, service).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, drain finished hints, handle one key.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: HintService,
) -> Result<()> {
    let (hint_tx, mut hint_rx) = mpsc::unbounded_channel::<HintResponse>();

    loop {
        while let Ok(response) = hint_rx.try_recv() {
            let applied = app.apply_hint(response);
            debug!(applied, "Hint response received");
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            tokio::task::yield_now().await;
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let action = if app.show_rules() {
            overlay_action_for(key.code)
        } else {
            action_for(key.code)
        };
        let Some(action) = action else {
            continue;
        };
        debug!(?action, "Key action");

        match action {
            Action::Cursor(d_row, d_col) => app.move_cursor(d_row, d_col),
            Action::Place => app.place_at_cursor(),
            Action::Restart => app.restart(),
            Action::ToggleRules => app.toggle_rules(),
            Action::Quit => {
                info!("User quit");
                app.quit();
            }
            Action::Hint => {
                if let Some(request) = app.begin_hint() {
                    let service = service.clone();
                    let tx = hint_tx.clone();
                    tokio::spawn(async move {
                        let response = service.request_hint(request).await;
                        // Receiver is gone once the TUI exits.
                        let _ = tx.send(response);
                    });
                }
            }
        }
    }
}
