//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position as ScreenPos, Rect};
use tictactoe::Position;

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rectangles for every widget on screen.
///
/// Computed from the terminal area alone, so the frame that was drawn and
/// the click that follows agree on where things are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line block.
    pub status: Rect,
    /// Bordered board block.
    pub board: Rect,
    /// 3x3 grid inside the board block, separators included.
    pub grid: Rect,
    /// Cell rectangles in index order.
    pub cells: [Rect; 9],
    /// Sort toggle button.
    pub sort_button: Rect,
    /// Bordered move list block.
    pub moves: Rect,
    /// Help bar, when enabled.
    pub help: Option<Rect>,
}

impl ScreenLayout {
    /// Splits `area` into the game screen.
    pub fn new(area: Rect, show_help: bool) -> Self {
        let (title, body, help) = if show_help {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),  // Title
                    Constraint::Min(14),    // Board and moves
                    Constraint::Length(3),  // Help
                ])
                .split(area);
            (chunks[0], chunks[1], Some(chunks[2]))
        } else {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(14)])
                .split(area);
            (chunks[0], chunks[1], None)
        };

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 6), Constraint::Min(30)])
            .split(body);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(GRID_HEIGHT + 2)])
            .split(panes[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(panes[1]);

        let board = left[1];
        let grid = center_rect(board.inner(Margin::new(1, 1)), GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            title,
            status: left[0],
            board,
            grid,
            cells,
            sort_button: right[0],
            moves: right[1],
            help,
        }
    }

    /// Area inside the move list border, one row per entry.
    pub fn moves_inner(&self) -> Rect {
        self.moves.inner(Margin::new(1, 1))
    }

    /// Cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPos::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
    }

    /// Visible move-list row under the given coordinates, counted from the
    /// top of the list viewport.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.moves_inner();
        inner
            .contains(ScreenPos::new(column, row))
            .then(|| usize::from(row - inner.y))
    }

    /// Whether the coordinates fall on the sort button.
    pub fn is_sort_button(&self, column: u16, row: u16) -> bool {
        self.sort_button.contains(ScreenPos::new(column, row))
    }
}

/// First list row to show so that `selected` stays visible in `height` rows.
pub fn list_offset(selected: usize, height: u16) -> usize {
    let height = usize::from(height.max(1));
    if selected >= height {
        selected + 1 - height
    } else {
        0
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
