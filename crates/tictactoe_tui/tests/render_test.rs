//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};
use tictactoe::Position;
use tictactoe_tui::{App, ScreenLayout, ui};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn screen_text(buffer: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn layout() -> ScreenLayout {
    ScreenLayout::new(Rect::new(0, 0, WIDTH, HEIGHT), true)
}

#[test]
fn test_initial_screen() {
    let text = screen_text(&render(&App::new(true)));
    assert!(text.contains("Tic-Tac-Toe"));
    assert!(text.contains("Next Player: X"));
    assert!(text.contains("[ Ascending ]"));
    assert!(text.contains("1. You are at move #0"));
    assert!(text.contains("Q: Quit"));
}

#[test]
fn test_help_bar_hidden() {
    let text = screen_text(&render(&App::new(false)));
    assert!(!text.contains("Q: Quit"));
}

#[test]
fn test_marks_and_move_list() {
    let mut app = App::new(true);
    app.click_cell(Position::Center);
    app.click_cell(Position::TopLeft);

    let buffer = render(&app);
    let text = screen_text(&buffer);
    assert!(text.contains("Next Player: X"));
    assert!(text.contains("1. Go to game start"));
    assert!(text.contains("2. Go to move #1 location (1, 1)"));
    assert!(text.contains("3. You are at move #2"));

    let center = layout().cells[Position::Center.to_index()];
    assert_eq!(buffer[(center.x + 3, center.y + 1)].symbol(), "X");
    let top_left = layout().cells[Position::TopLeft.to_index()];
    assert_eq!(buffer[(top_left.x + 3, top_left.y + 1)].symbol(), "O");
}

#[test]
fn test_winner_highlight() {
    let mut app = App::new(true);
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ] {
        app.click_cell(pos);
    }

    let buffer = render(&app);
    assert!(screen_text(&buffer).contains("Winner: X"));

    let cells = layout().cells;
    let winning = cells[Position::TopLeft.to_index()];
    assert_eq!(buffer[(winning.x + 3, winning.y + 1)].bg, Color::Green);
    let losing = cells[Position::TopCenter.to_index()];
    assert_ne!(buffer[(losing.x + 3, losing.y + 1)].bg, Color::Green);
}

#[test]
fn test_descending_order_rendered() {
    let mut app = App::new(true);
    app.click_cell(Position::Center);
    app.toggle_sort();

    let text = screen_text(&render(&app));
    assert!(text.contains("[ Descending ]"));
    assert!(text.contains("1. You are at move #1"));
    assert!(text.contains("2. Go to game start"));
}
