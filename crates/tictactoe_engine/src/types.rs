//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use derive_more::Display;
use strum::EnumIter;
use tracing::instrument;

/// One of the two symbols a player puts on the board.
///
/// The printable glyph is a presentation concern; `Display` shows the
/// conventional `X` and `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Marker {
    /// The cross, conventionally `X`.
    #[display("X")]
    Cross,
    /// The nought, conventionally `O`.
    #[display("O")]
    Nought,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::Cross => Marker::Nought,
            Marker::Nought => Marker::Cross,
        }
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// The player who picks a marker.
    #[display("Player 1")]
    One,
    /// The player who receives the remaining marker.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Which marker each player holds for a round.
///
/// Built from Player 1's choice; Player 2 always receives the opponent
/// marker, so the two markers can never coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerAssignment {
    player_one: Marker,
}

impl MarkerAssignment {
    /// Assigns `choice` to Player 1 and the opponent marker to Player 2.
    pub fn new(choice: Marker) -> Self {
        Self { player_one: choice }
    }

    /// Marker held by `player`.
    pub fn marker_for(&self, player: Player) -> Marker {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_one.opponent(),
        }
    }

    /// Player holding `marker`.
    pub fn player_for(&self, marker: Marker) -> Player {
        if marker == self.player_one {
            Player::One
        } else {
            Player::Two
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Puts `marker` on the square at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the square is already occupied. Callers check
    /// [`Board::is_empty`] first; markers are never overwritten.
    #[instrument(skip(self))]
    pub fn place(&mut self, marker: Marker, pos: Position) {
        assert!(
            self.is_empty(pos),
            "cannot place {marker} on occupied square {}",
            pos.number()
        );
        self.squares[pos.to_index()] = Square::Occupied(marker);
    }

    /// Returns true if `marker` holds all three squares of any line.
    pub fn check_win(&self, marker: Marker) -> bool {
        rules::check_win(self, marker)
    }

    /// Returns true if no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions whose square is still empty.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
