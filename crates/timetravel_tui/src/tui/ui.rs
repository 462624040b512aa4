//! Stateless UI rendering.

use super::app::{App, Focus};
use crate::view::{history_labels, size_labels, status_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use timetravel_tictactoe::{BoardSize, Player, Square, winning_line};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen: board, status, history and configuration.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Body
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let side = app.game().board_size().side() as u16;
    let board_width = side * CELL_WIDTH + (side - 1) + 2;
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width.max(24)), Constraint::Min(24)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_info(frame, body[1], app);

    let help = Paragraph::new(
        "Tab: switch pane  Arrows: move  Enter: select  3/4/5: board size  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let game = app.game();
    let board = game.current_snapshot();
    let side = board.size().side();
    let winning: Vec<usize> = winning_line(board)
        .map(|(_, line)| line.cells().to_vec())
        .unwrap_or_default();

    let mut row_constraints = Vec::with_capacity(side * 2);
    for row in 0..side {
        if row > 0 {
            row_constraints.push(Constraint::Length(1));
        }
        row_constraints.push(Constraint::Length(CELL_HEIGHT));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    for row in 0..side {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }

        let mut col_constraints = Vec::with_capacity(side * 2);
        for col in 0..side {
            if col > 0 {
                col_constraints.push(Constraint::Length(1));
            }
            col_constraints.push(Constraint::Length(CELL_WIDTH));
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(rows[row * 2]);

        for col in 0..side {
            if col > 0 {
                draw_separator_vertical(frame, cols[col * 2 - 1]);
            }
            let index = row * side + col;
            let square = board.get(index).unwrap_or_default();
            let highlighted = app.focus() == Focus::Board && app.cursor() == index;
            draw_cell(frame, cols[col * 2], square, highlighted, winning.contains(&index));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, cursor: bool, winning: bool) {
    let (symbol, base_style) = match square {
        Square::Empty => ("·", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = match (cursor, winning) {
        (true, _) => base_style.bg(Color::White).fg(Color::Black),
        (false, true) => base_style.fg(Color::Green),
        (false, false) => base_style,
    };

    // Vertically center the glyph in the cell.
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(4),    // History
            Constraint::Length(5), // Board configuration
        ])
        .split(area);

    let status = Paragraph::new(status_text(app.game()))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().title("Status").borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    draw_history(frame, chunks[1], app);
    draw_config(frame, chunks[2], app);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.game().step();
    let items: Vec<ListItem> = history_labels(app.game())
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let marker = if i == step { "▶ " } else { "  " };
            ListItem::new(format!("{}{}. {}", marker, i + 1, label))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(pane_block("History", focused))
        .highlight_style(selection_style(focused));
    let mut state = ListState::default().with_selected(Some(app.history_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_config(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.game().board_size();
    let items: Vec<ListItem> = size_labels()
        .into_iter()
        .zip(BoardSize::iter())
        .map(|(label, size)| {
            let marker = if size == current { "▶ " } else { "  " };
            ListItem::new(format!("{}{}", marker, label))
        })
        .collect();

    let focused = app.focus() == Focus::Config;
    let list = List::new(items)
        .block(pane_block("Board Configuration", focused))
        .highlight_style(selection_style(focused));
    let mut state = ListState::default().with_selected(Some(app.size_cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn selection_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::White).fg(Color::Black)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}
