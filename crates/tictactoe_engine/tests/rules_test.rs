//! Property tests for win and full-board detection.

use proptest::prelude::*;
use tictactoe_engine::rules::{LINES, winner};
use tictactoe_engine::{Board, Marker, Position, Square, check_win, is_full, new_board};

/// The winning triples as players number them.
const NUMBERED_LINES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

fn square(code: u8) -> Square {
    match code {
        1 => Square::Occupied(Marker::Cross),
        2 => Square::Occupied(Marker::Nought),
        _ => Square::Empty,
    }
}

fn board_from(squares: &[Square]) -> Board {
    let mut board = new_board();
    for (pos, sq) in Position::iter().zip(squares) {
        if let Square::Occupied(marker) = sq {
            board.place(*marker, pos);
        }
    }
    board
}

fn holds_line(squares: &[Square], marker: Marker) -> bool {
    NUMBERED_LINES
        .iter()
        .any(|line| line.iter().all(|n| squares[n - 1] == Square::Occupied(marker)))
}

fn any_board() -> impl Strategy<Value = Vec<Square>> {
    prop::collection::vec((0u8..3).prop_map(square), 9)
}

fn any_marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::Cross), Just(Marker::Nought)]
}

proptest! {
    #[test]
    fn check_win_matches_numbered_lines(squares in any_board(), marker in any_marker()) {
        let board = board_from(&squares);
        prop_assert_eq!(check_win(&board, marker), holds_line(&squares, marker));
    }

    #[test]
    fn completed_line_wins_only_for_its_marker(
        line in 0usize..8,
        marker in any_marker(),
        others in prop::collection::vec(prop::bool::ANY, 9),
    ) {
        let triple = NUMBERED_LINES[line];
        let rival = marker.opponent();
        let mut squares = [Square::Empty; 9];
        for n in 1..=9 {
            squares[n - 1] = if triple.contains(&n) {
                Square::Occupied(marker)
            } else if others[n - 1] {
                Square::Occupied(rival)
            } else {
                Square::Empty
            };
        }
        // The rival may not own a line of its own.
        prop_assume!(!holds_line(&squares, rival));

        let board = board_from(&squares);
        prop_assert!(check_win(&board, marker));
        prop_assert!(!check_win(&board, rival));
        prop_assert_eq!(winner(&board), Some(marker));
    }

    #[test]
    fn is_full_iff_no_empty_square(squares in any_board()) {
        let board = board_from(&squares);
        prop_assert_eq!(is_full(&board), squares.iter().all(|s| *s != Square::Empty));
    }

    #[test]
    fn place_changes_only_its_square(
        squares in any_board(),
        pick in 0usize..9,
        marker in any_marker(),
    ) {
        let before = board_from(&squares);
        let empties = before.empty_positions();
        prop_assume!(!empties.is_empty());
        let target = empties[pick % empties.len()];

        let mut after = before.clone();
        after.place(marker, target);

        prop_assert!(!after.is_empty(target));
        for pos in Position::iter().filter(|pos| *pos != target) {
            prop_assert_eq!(after.is_empty(pos), before.is_empty(pos));
            prop_assert_eq!(after.get(pos), before.get(pos));
        }
    }
}

#[test]
fn empty_board_has_no_winner() {
    let board = new_board();
    for marker in [Marker::Cross, Marker::Nought] {
        assert!(!check_win(&board, marker));
    }
    assert!(!is_full(&board));
}

#[test]
fn lines_constant_matches_numbering() {
    for (line, numbered) in LINES.iter().zip(NUMBERED_LINES.iter()) {
        let numbers: Vec<usize> = line.iter().map(|pos| pos.number()).collect();
        assert_eq!(numbers, numbered.to_vec());
    }
}

#[test]
fn single_gap_is_not_full() {
    for gap in Position::iter() {
        let mut board = new_board();
        for (i, pos) in Position::iter().filter(|pos| *pos != gap).enumerate() {
            let marker = if i % 2 == 0 { Marker::Cross } else { Marker::Nought };
            board.place(marker, pos);
        }
        assert!(!is_full(&board), "board with {gap} empty reported full");
        board.place(Marker::Cross, gap);
        assert!(is_full(&board));
    }
}
