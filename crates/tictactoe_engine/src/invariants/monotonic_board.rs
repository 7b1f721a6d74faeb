//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::phases::Phase;
use crate::{Board, Round};

/// Invariant: board squares are monotonic (never overwritten).
///
/// Replaying the history on an empty board must never land on an occupied
/// square and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    /// Description reported on violation.
    pub const DESCRIPTION: &'static str = "Board squares are monotonic (never overwritten)";
}

impl<P: Phase> Invariant<Round<P>> for MonotonicBoardInvariant {
    fn holds(round: &Round<P>) -> bool {
        let mut reconstructed = Board::new();

        for mov in round.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.place(mov.marker, mov.position);
        }

        reconstructed == *round.board()
    }

    fn description() -> &'static str {
        Self::DESCRIPTION
    }
}
