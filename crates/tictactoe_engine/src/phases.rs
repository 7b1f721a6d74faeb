//! Phase types for the round state machine.
//!
//! A round's phase is its type parameter. Only [`AwaitingMove`] carries a
//! player to move, only [`Won`] carries a winner.

use crate::Player;

/// Phase: the round is waiting for `to_move` to place a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AwaitingMove {
    /// The player whose turn it is.
    pub to_move: Player,
}

/// Phase: `winner` completed a line. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Won {
    /// The player who completed a line.
    pub winner: Player,
}

/// Phase: the board filled with no line completed. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Draw;

/// Current status of a round, independent of its phase type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended in a win.
    Won(Player),
    /// Round ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the round accepts no more moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Behaviour shared by every phase type.
pub trait Phase: std::fmt::Debug + Clone {
    /// Status this phase represents.
    fn status(&self) -> GameStatus;

    /// The player to move, if the round still accepts moves.
    fn to_move(&self) -> Option<Player> {
        None
    }
}

impl Phase for AwaitingMove {
    fn status(&self) -> GameStatus {
        GameStatus::InProgress
    }

    fn to_move(&self) -> Option<Player> {
        Some(self.to_move)
    }
}

impl Phase for Won {
    fn status(&self) -> GameStatus {
        GameStatus::Won(self.winner)
    }
}

impl Phase for Draw {
    fn status(&self) -> GameStatus {
        GameStatus::Draw
    }
}
