//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `marker` holds all three squares of at least one line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, marker: Marker) -> bool {
    let held = Square::Occupied(marker);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == held))
}

/// Returns the marker that owns a complete line, if any.
///
/// Boards reached through legal play have at most one such marker.
pub fn winner(board: &Board) -> Option<Marker> {
    [Marker::Cross, Marker::Nought]
        .into_iter()
        .find(|marker| check_win(board, *marker))
}
