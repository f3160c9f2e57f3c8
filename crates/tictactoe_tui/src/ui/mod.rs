//! UI rendering using ratatui.

mod board;
mod moves;

use crate::app::App;
use crate::layout::ScreenLayout;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::{render_board, render_status};
pub use moves::{render_moves, render_sort_button};

const HELP: &str = "←↑↓→: Move | Enter/1-9: Play | Tab: Board/Moves | S: Sort | Q: Quit";

/// Draws the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area(), app.show_help());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    render_status(frame, &layout, app.game());
    render_board(frame, &layout, app);
    render_sort_button(frame, &layout, app.game());
    render_moves(frame, &layout, app);

    if let Some(area) = layout.help {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}
