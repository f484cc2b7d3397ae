//! Terminal UI rendering with ratatui
//!
//! Read-only over engine state: the renderer overlays the falling piece on a
//! grid snapshot and never mutates the game.

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::game::{Game, GameState};
use crate::piece::Piece;
use crate::settings::Settings;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const EMPTY: &str = "  ";

/// Total width: board(22) + next/stats(16)
const GAME_WIDTH: u16 = 38;
/// Board 20 rows + 2 for borders
const GAME_HEIGHT: u16 = 22;

/// Render the entire game UI
pub fn render_game(frame: &mut Frame, game: &Game, settings: &Settings) {
    let area = frame.area();
    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Board (10*2 + 2 for borders)
            Constraint::Length(16), // Next preview + stats
        ])
        .split(game_area);

    render_board(frame, main_layout[0], game, settings);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Next preview
            Constraint::Min(9),    // Stats
        ])
        .split(main_layout[1]);

    render_next(frame, right_layout[0], &game.next, settings);
    render_stats(frame, right_layout[1], game);

    match game.state {
        GameState::Paused => render_overlay(frame, area, "PAUSED", "Press P to resume"),
        GameState::GameOver => render_overlay(frame, area, "GAME OVER", "Press Q to quit"),
        GameState::Playing => {}
    }
}

/// Render the playfield with the falling piece (and its landing preview)
/// overlaid on the locked grid
fn render_board(frame: &mut Frame, area: Rect, game: &Game, settings: &Settings) {
    let (block_char, ghost_char) = settings.visual.block_chars();

    let block = Block::default()
        .title(" BLOCKFALL ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let piece_cells: Vec<(i32, i32)> = game
        .current
        .cells()
        .map(|(row, col)| (game.current.y + row as i32, game.current.x + col as i32))
        .collect();

    let ghost_cells: Vec<(i32, i32)> = if settings.visual.show_ghost && !game.is_over() {
        let ghost_y = game.ghost_y();
        game.current
            .cells()
            .map(|(row, col)| (ghost_y + row as i32, game.current.x + col as i32))
            .collect()
    } else {
        Vec::new()
    };

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..BOARD_HEIGHT as i32 {
        let mut spans = Vec::new();
        for col in 0..BOARD_WIDTH as i32 {
            let (text, style) = if piece_cells.contains(&(row, col)) {
                (block_char, Style::default().fg(game.current.color.terminal()))
            } else if ghost_cells.contains(&(row, col)) {
                (
                    ghost_char,
                    Style::default().fg(game.current.color.terminal()).dim(),
                )
            } else {
                match game.board.get(row, col) {
                    Some(color) if !color.is_empty() => {
                        (block_char, Style::default().fg(color.terminal()))
                    }
                    _ => (EMPTY, Style::default()),
                }
            };
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the next-piece preview box
fn render_next(frame: &mut Frame, area: Rect, piece: &Piece, settings: &Settings) {
    let (block_char, _) = settings.visual.block_chars();

    let block = Block::default()
        .title(" NEXT ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for shape_row in piece.shape.iter() {
        let mut spans = Vec::new();
        for &cell in shape_row.iter() {
            if cell != 0 {
                spans.push(Span::styled(
                    block_char,
                    Style::default().fg(piece.color.terminal()),
                ));
            } else {
                spans.push(Span::raw(EMPTY));
            }
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Render the stats panel
fn render_stats(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled("SCORE", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{}", game.score.points),
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::raw(""),
        Line::from(Span::styled("LEVEL", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{}", game.score.level),
            Style::default().fg(Color::Cyan),
        )),
        Line::raw(""),
        Line::from(Span::styled("LINES", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{}", game.score.lines),
            Style::default().fg(Color::Green),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render a popup overlay (for pause/game over)
fn render_overlay(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let popup_width = 24u16;
    let popup_height = 5u16;
    let popup_area = center_rect(area, popup_width, popup_height);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = vec![
        Line::styled(title.to_string(), Style::default().fg(Color::Yellow).bold()),
        Line::raw(""),
        Line::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
