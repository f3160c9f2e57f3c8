//! Tic-tac-toe board and status rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{CellView, Game, GameStatus, Mark, Square};

use crate::app::{App, Focus};
use crate::layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};

/// Renders the status line for the displayed move.
pub fn render_status(f: &mut Frame, layout: &ScreenLayout, game: &Game) {
    let status = game.status();
    let color = match status {
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress { .. } => Color::Yellow,
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, layout.status);
}

/// Renders the 3x3 board with winner highlighting and the keyboard cursor.
pub fn render_board(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let border_style = if app.focus() == Focus::Board {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Board");
    f.render_widget(block, layout.board);

    render_separators(f, layout.grid);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    for cell in app.game().board_view().cells() {
        let area = layout.cells[cell.position.to_index()];
        render_cell(f, area, cell, cursor == Some(cell.position));
    }
}

/// Renders one cell: its mark, plus highlighting for winning and cursor cells.
fn render_cell(f: &mut Frame, area: Rect, cell: CellView, under_cursor: bool) {
    let mut style = match cell.square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(cell.symbol()), Line::from("")])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separators(f: &mut Frame, grid: Rect) {
    let style = Style::default().fg(Color::DarkGray);
    let cell = "─".repeat(usize::from(CELL_WIDTH));
    let rule = format!("{cell}┼{cell}┼{cell}");

    for row in 1..3u16 {
        let y = grid.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(grid.x, y, grid.width, 1).intersection(grid);
        f.render_widget(Paragraph::new(rule.as_str()).style(style), area);
    }

    let bar: Vec<Line> = (0..CELL_HEIGHT).map(|_| Line::from("│")).collect();
    for col in 1..3u16 {
        let x = grid.x + col * (CELL_WIDTH + 1) - 1;
        for row in 0..3u16 {
            let y = grid.y + row * (CELL_HEIGHT + 1);
            let area = Rect::new(x, y, 1, CELL_HEIGHT).intersection(grid);
            f.render_widget(Paragraph::new(bar.clone()).style(style), area);
        }
    }
}
