//! Stateless UI rendering for tri-tactics.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::app::{App, HintState};
use crate::games::tri_tactics::{Mark, MatchStatus, Square};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Players
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(5), // Hint
            Constraint::Length(1), // Keys
        ])
        .split(area);

    let title = Paragraph::new("Tri-Tactics: connect 4 on a 5x5 grid")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
    draw_hint(frame, chunks[4], app);

    let keys = Paragraph::new("arrows/WASD move · Enter place · h hint · r restart · ? rules · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[5]);

    if app.show_rules() {
        draw_rules(frame, area);
    }
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Cyan,
        Mark::O => Color::LightRed,
        Mark::Triangle => Color::Green,
    }
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let in_play = session.status() != MatchStatus::Ended;
    let active = session.active_player().id();

    let mut spans = Vec::new();
    for player in session.players() {
        let mut style = Style::default().fg(mark_color(player.mark()));
        if in_play && player.id() == active {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {} ", player), style));
        spans.push(Span::raw("  "));
    }

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(bar, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let board = session.board();
    let result = session.result();
    let size = board.size();

    let separator = vec!["───"; size].join("┼");
    let mut lines = Vec::with_capacity(size * 2);

    for row in 0..size {
        if row > 0 {
            lines.push(Line::styled(
                separator.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut spans = Vec::with_capacity(size * 2);
        for col in 0..size {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let index = board.index_of(row, col);
            let square = board.get(index).unwrap_or_default();

            let (symbol, mut style) = match square {
                Square::Empty => (" · ".to_string(), Style::default().fg(Color::DarkGray)),
                Square::Occupied(mark) => (
                    format!(" {} ", mark),
                    Style::default()
                        .fg(mark_color(mark))
                        .add_modifier(Modifier::BOLD),
                ),
            };
            if result.highlights(index) {
                style = style.bg(Color::Yellow).fg(Color::Black);
            }
            if index == app.cursor() && session.status() != MatchStatus::Ended {
                style = style.bg(Color::White).fg(Color::Black);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    let width = (size * 4 + 1) as u16;
    let height = (size * 2 + 1) as u16;
    let board_area = center_rect(area, width, height);
    let grid = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(grid, board_area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut text = app.status_line();
    if let Some(message) = app.message() {
        text = format!("{}  ({})", text, message);
    }
    let color = match app.session().status() {
        MatchStatus::Ended => Color::Yellow,
        _ => mark_color(app.session().active_player().mark()),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_hint(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.hint() {
        HintState::Idle => (
            "Press h for a strategic hint.".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        HintState::Thinking => (
            "Consulting the AI...".to_string(),
            Style::default().fg(Color::Magenta),
        ),
        HintState::Ready(text) => (text.clone(), Style::default().fg(Color::White)),
    };
    let hint = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("AI Strategist"));
    frame.render_widget(hint, area);
}

fn draw_rules(frame: &mut Frame, area: Rect) {
    let popup = center_rect(area, 60, 14);
    let lines = vec![
        Line::styled(
            "How to play",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw("Three players take turns: X, then O, then ▲."),
        Line::raw("Place your mark on any empty cell of the 5x5 grid."),
        Line::raw("Line up 4 of your marks horizontally, vertically"),
        Line::raw("or diagonally to win."),
        Line::raw("If the grid fills with no line of 4, it's a draw."),
        Line::raw(""),
        Line::raw("Stuck? Press h to ask the AI strategist."),
        Line::raw(""),
        Line::styled(
            "Press Enter or Esc to start.",
            Style::default().fg(Color::Yellow),
        ),
    ];
    let rules = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Rules"));
    frame.render_widget(Clear, popup);
    frame.render_widget(rules, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
