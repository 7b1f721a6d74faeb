//! Moves as first-class records of what happened in a round.

use crate::{Marker, Player, Position};
use derive_new::new;

/// A player putting their marker on a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The marker that player holds this round.
    pub marker: Marker,
    /// Where the marker went.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.player, self.marker, self.position)
    }
}
