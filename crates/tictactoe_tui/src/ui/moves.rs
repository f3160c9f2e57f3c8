//! Move list and sort toggle rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tictactoe::Game;

use crate::app::{App, Focus};
use crate::layout::{ScreenLayout, list_offset};

/// Renders the sort toggle, labelled with the current order.
pub fn render_sort_button(f: &mut Frame, layout: &ScreenLayout, game: &Game) {
    let button = Paragraph::new(format!("[ {} ]", game.sort()))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Sort (S)"));
    f.render_widget(button, layout.sort_button);
}

/// Renders the numbered move list in the current sort order.
pub fn render_moves(f: &mut Frame, layout: &ScreenLayout, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let style = if entry.is_clickable() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            ListItem::new(format!("{}. {}", row + 1, entry.label())).style(style)
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Moves"),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let offset = list_offset(app.selected_row(), layout.moves_inner().height);
    let mut list_state = ListState::default()
        .with_offset(offset)
        .with_selected(focused.then(|| app.selected_row()));
    f.render_stateful_widget(list, layout.moves, &mut list_state);
}
