//! Tests for the game controller: history, jumping and the move list.

use tictactoe::{Game, GameStatus, HistoryError, Location, Mark, MoveError, Position, SortOrder, Square};

fn play_indices(game: &mut Game, indices: &[usize]) {
    for &i in indices {
        let pos = Position::from_index(i).expect("valid index");
        game.click(pos).expect("legal move");
    }
}

#[test]
fn test_click_sets_mark_and_flips_turn() {
    let mut game = Game::new();
    game.click(Position::Center).unwrap();

    assert_eq!(game.current_squares().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(game.next_mark(), Mark::O);
    assert_eq!(game.status().to_string(), "Next Player: O");

    game.click(Position::TopLeft).unwrap();
    assert_eq!(game.current_squares().get(Position::TopLeft), Square::Occupied(Mark::O));
    assert_eq!(game.next_mark(), Mark::X);
}

#[test]
fn test_click_occupied_is_noop() {
    let mut game = Game::new();
    game.click(Position::Center).unwrap();
    let before = game.clone();

    let result = game.click(Position::Center);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_winning_diagonal() {
    let mut game = Game::new();
    // X: 0, 4, 8  O: 1, 2
    play_indices(&mut game, &[0, 1, 4, 2, 8]);

    let status = game.status();
    assert_eq!(
        status,
        GameStatus::Won {
            mark: Mark::X,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        }
    );
    assert_eq!(status.to_string(), "Winner: X");
}

#[test]
fn test_clicks_after_win_are_noops() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 1, 4, 2, 8]);
    let before = game.clone();

    for pos in Position::ALL {
        assert!(game.click(pos).is_err());
    }
    assert_eq!(game, before);
}

#[test]
fn test_draw_sequence() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    use Mark::{O, X};
    let expected = [X, O, X, X, O, O, O, X, X].map(Square::Occupied);
    assert_eq!(game.current_squares().squares(), &expected);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw");
}

#[test]
fn test_full_board_with_line_reports_win() {
    let mut game = Game::new();
    // Ninth move completes the left column.
    play_indices(&mut game, &[0, 1, 2, 4, 3, 5, 7, 8, 6]);

    assert_eq!(game.current_squares().occupied(), 9);
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_jump_does_not_alter_history() {
    let mut game = Game::new();
    play_indices(&mut game, &[4, 0, 8]);
    let history = game.history().to_vec();

    game.jump_to(1).unwrap();
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.next_mark(), Mark::O);
    assert_eq!(game.history(), history.as_slice());

    game.jump_to(3).unwrap();
    assert_eq!(game.current_move(), 3);
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut game = Game::new();
    play_indices(&mut game, &[4]);

    assert_eq!(
        game.jump_to(5),
        Err(HistoryError::OutOfRange { requested: 5, len: 2 })
    );
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_play_after_jump_truncates_future() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 1, 2, 3]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(1).unwrap();
    game.click(Position::BottomRight).unwrap();

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    let board = game.current_squares();
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Mark::O));
    assert!(board.is_empty(Position::TopCenter));
    assert!(game.jump_to(3).is_err());
}

#[test]
fn test_jump_back_from_won_board_allows_play() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 1, 4, 2, 8]);
    assert!(game.status().is_over());

    game.jump_to(4).unwrap();
    game.click(Position::BottomLeft).unwrap();
    assert_eq!(game.history().len(), 6);
    assert!(!game.status().is_over());
}

#[test]
fn test_history_snapshots_differ_by_one_cell() {
    let mut game = Game::new();
    play_indices(&mut game, &[4, 0, 8, 2, 1]);

    for pair in game.history().windows(2) {
        let changed: Vec<usize> = (0..9)
            .filter(|&i| pair[0].squares()[i] != pair[1].squares()[i])
            .collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(pair[0].squares()[changed[0]], Square::Empty);
    }
}

#[test]
fn test_move_list_labels() {
    let mut game = Game::new();
    play_indices(&mut game, &[4, 0, 5]);

    let labels: Vec<String> = game.move_list().iter().map(|e| e.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 location (1, 1)",
            "Go to move #2 location (0, 0)",
            "You are at move #3",
        ]
    );
    assert_eq!(game.location_of(3), Some(Location { row: 1, col: 2 }));
}

#[test]
fn test_current_entry_not_clickable() {
    let mut game = Game::new();
    play_indices(&mut game, &[4, 0]);
    game.jump_to(0).unwrap();

    let entries = game.move_list();
    assert_eq!(entries[0].label(), "You are at move #0");
    assert!(!entries[0].is_clickable());
    assert!(entries[1].is_clickable());
    assert_eq!(entries[2].label(), "Go to move #2 location (0, 0)");
}

#[test]
fn test_descending_reverses_without_changing_labels() {
    let mut game = Game::new();
    play_indices(&mut game, &[4, 0, 5]);
    game.jump_to(2).unwrap();
    let ascending: Vec<String> = game.move_list().iter().map(|e| e.label()).collect();

    game.toggle_sort();
    assert_eq!(game.sort(), SortOrder::Descending);
    let mut descending: Vec<String> = game.move_list().iter().map(|e| e.label()).collect();
    assert_eq!(descending[0], "Go to move #3 location (1, 2)");
    assert_eq!(descending[1], "You are at move #2");

    descending.reverse();
    assert_eq!(descending, ascending);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 2);

    game.toggle_sort();
    assert_eq!(game.sort(), SortOrder::Ascending);
}
