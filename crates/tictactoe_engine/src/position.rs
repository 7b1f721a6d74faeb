//! The nine board positions and their 1-9 numbering.

use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Players address squares by number, row-major from the top left:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
///
/// Numbers outside 1-9 have no `Position`, so range checks happen once
/// when input is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions in numbering order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for this position (for display and logs).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its index into the board's square array (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The number players type for this position (1-9).
    pub fn number(self) -> usize {
        self.to_index() + 1
    }

    /// Creates position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from the number players type (1-9).
    #[instrument]
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    /// Parses a typed number, ignoring surrounding whitespace.
    ///
    /// Returns `None` for anything that is not an integer in 1-9.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<usize>().ok().and_then(Self::from_number)
    }

    /// Positions in numbering order.
    pub fn iter() -> impl Iterator<Item = Position> {
        <Position as IntoEnumIterator>::iter()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number(), self.label())
    }
}
