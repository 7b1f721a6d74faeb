//! Full-board detection for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board is only a draw once [`check_win`](super::check_win) has
/// come back false for the marker that just moved.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_win;
    use super::*;
    use crate::{Marker, Position};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && !check_win(board, Marker::Cross) && !check_win(board, Marker::Nought)
    }

    fn board_from(rows: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::iter().zip(rows.chars().filter(|c| !c.is_whitespace())) {
            match c {
                'X' => board.place(Marker::Cross, pos),
                'O' => board.place(Marker::Nought, pos),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_gap_not_full() {
        let board = board_from("XOX OXX OX.");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = board_from("XOX OXX OXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from("XXX OOX OXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
