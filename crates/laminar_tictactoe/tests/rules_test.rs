//! Tests for win, draw and legality rules.

use laminar_tictactoe::rules::{
    self, LINES, check_winner, is_draw, is_valid_move, valid_moves, winning_line,
};
use laminar_tictactoe::{Board, GameErrorKind, Outcome, Player, Position};

fn board_from(rows: [&str; 3]) -> Board {
    let mut board = Board::new();
    for (row, text) in rows.iter().enumerate() {
        for (col, c) in text.chars().enumerate() {
            let mark = match c {
                'X' => Player::X,
                'O' => Player::O,
                _ => continue,
            };
            board.place(row, col, mark).unwrap();
        }
    }
    board
}

#[test]
fn test_every_line_wins_and_agrees() {
    for (index, line) in LINES.iter().enumerate() {
        for player in [Player::X, Player::O] {
            let mut board = Board::new();
            for (row, col) in line.coords() {
                board.place(row, col, player).unwrap();
            }
            assert_eq!(check_winner(&board), Some(player), "line {index}");
            assert_eq!(winning_line(&board), Some(*line), "line {index}");
        }
    }
}

#[test]
fn test_winning_line_coordinates() {
    let expected = [
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(0, 2), (1, 1), (2, 0)],
    ];
    for (line, coords) in LINES.iter().zip(expected) {
        assert_eq!(line.coords(), coords);
    }
}

#[test]
fn test_winner_and_line_agree_on_mark() {
    let board = board_from(["OX.", "XO.", "X.O"]);
    let line = winning_line(&board).unwrap();
    let [first, ..] = line.positions();
    assert_eq!(board.get(first), check_winner(&board));
    assert!(line.contains(Position::Center));
}

#[test]
fn test_no_winner_without_complete_line() {
    let board = board_from(["XO.", "...", "..."]);
    assert_eq!(check_winner(&board), None);
    assert_eq!(winning_line(&board), None);
}

#[test]
fn test_full_board_draw() {
    let board = board_from(["XOX", "XXO", "OXO"]);
    assert!(board.is_full());
    assert_eq!(check_winner(&board), None);
    assert_eq!(winning_line(&board), None);
    assert!(is_draw(&board));
    assert_eq!(rules::outcome(&board), Outcome::Draw);
}

#[test]
fn test_full_board_with_winner_is_not_draw() {
    let board = board_from(["XXX", "OOX", "OXO"]);
    assert!(board.is_full());
    assert_eq!(check_winner(&board), Some(Player::X));
    assert!(!is_draw(&board));
    assert_eq!(rules::outcome(&board), Outcome::Won(Player::X));
}

#[test]
fn test_unfinished_board_is_not_draw() {
    assert!(!is_draw(&Board::new()));
    let board = board_from(["XXX", "...", "..."]);
    assert!(!is_draw(&board));
    assert_eq!(rules::outcome(&board).winner(), Some(Player::X));
    assert_eq!(rules::outcome(&Board::new()), Outcome::InProgress);
}

#[test]
fn test_is_valid_move() {
    let board = board_from(["X..", "...", "..."]);
    assert!(!is_valid_move(&board, 0, 0).unwrap());
    assert!(is_valid_move(&board, 1, 1).unwrap());

    // Legality ignores turn order and game end.
    let won = board_from(["XXX", "...", "..."]);
    assert!(is_valid_move(&won, 2, 2).unwrap());
}

#[test]
fn test_is_valid_move_out_of_range() {
    let board = Board::new();
    let err = is_valid_move(&board, 3, 0).unwrap_err();
    assert_eq!(err.kind(), GameErrorKind::OutOfRange { row: 3, col: 0 });
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = board_from(["X..", ".O.", "..."]);
    let valid = valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert_eq!(valid.first(), Some(&Position::TopCenter));
    assert_eq!(valid.last(), Some(&Position::BottomRight));
}
