//! Stateless UI rendering for tic-tac-toe.

use chrono::Datelike;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{EngineSnapshot, GameStatus, Player, Position, Square};

use super::app::{App, status_text};
use super::theme::Theme;

/// Key hint shown under the footer.
pub const KEY_HINT: &str = "arrows move · enter play · 1-9 cell · n new game · r reset · q quit";

/// Renders the whole screen from the engine's observable state.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.engine().snapshot();
    let theme = app.theme();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(1),  // Scoreboard
            Constraint::Length(1),  // Controls
            Constraint::Length(3),  // Status
            Constraint::Min(11),    // Board
            Constraint::Length(2),  // Footer
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(theme.primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], &snapshot, theme);
    draw_controls(frame, chunks[2], &snapshot, theme);
    draw_status(frame, chunks[3], &snapshot, theme);
    draw_board(frame, chunks[4], &snapshot, *app.cursor(), theme);
    draw_footer(frame, chunks[5]);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            format!("X: {}", snapshot.score.get(Player::X)),
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("O: {}", snapshot.score.get(Player::O)),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_controls(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot, theme: &Theme) {
    // "Start New Game" is only live once the round has ended
    let new_game_style = if snapshot.can_start_new_round {
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let line = Line::from(vec![
        Span::styled("[N] Start New Game", new_game_style),
        Span::raw("   "),
        Span::styled(
            "[R] Reset Score",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_status(frame: &mut Frame, area: Rect, snapshot: &EngineSnapshot, theme: &Theme) {
    let color = match snapshot.status {
        GameStatus::Won(winner) => theme.player(winner),
        GameStatus::Draw => theme.primary,
        GameStatus::InProgress => theme.player(snapshot.current_player),
    };

    let status = Paragraph::new(status_text(snapshot.status, snapshot.current_player))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    snapshot: &EngineSnapshot,
    cursor: Position,
    theme: &Theme,
) {
    // Center the board
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], snapshot, cursor, theme, cells);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1], theme);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &EngineSnapshot,
    cursor: Position,
    theme: &Theme,
    cells: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, &pos) in cells.iter().enumerate() {
        draw_cell(frame, cols[col * 2], snapshot, cursor, theme, pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1], theme);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &EngineSnapshot,
    cursor: Position,
    theme: &Theme,
    pos: Position,
) {
    let (row, col) = pos.coords();
    let (symbol, base_style) = match snapshot.board[row][col] {
        Square::Empty => (
            // Cell number doubles as the key that plays it
            pos.cell_number().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default().fg(theme.player(player)).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = snapshot.winning_line.contains(&(row, col));
    let style = if cursor == pos && snapshot.status == GameStatus::InProgress {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(theme.secondary).add_modifier(Modifier::REVERSED)
    } else {
        base_style
    };

    // Vertically center the mark in the 3-line cell
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(theme.secondary));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, theme: &Theme) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(theme.secondary));
    frame.render_widget(sep, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let footer = Paragraph::new(vec![
        Line::from(format!("Modern Minimal Tic Tac Toe © {year}")),
        Line::from(KEY_HINT),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
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
