//! Pure tic-tac-toe game logic.
//!
//! The engine knows about boards, markers, and whose turn it is. It never
//! reads input or draws anything; a front end asks it questions and feeds it
//! positions that are already known to be legal.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Marker, MarkerAssignment, Player, Position, Round, RoundTransition};
//!
//! let assignment = MarkerAssignment::new(Marker::Cross);
//! let round = Round::new(assignment, Player::One);
//! assert!(round.board().is_empty(Position::Center));
//!
//! match round.place(Position::Center) {
//!     RoundTransition::InProgress(round) => assert_eq!(round.to_move(), Player::Two),
//!     _ => unreachable!("one move never ends a round"),
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod first_player;
pub mod invariants;
mod phases;
mod position;
mod round;
pub mod rules;
mod types;

pub use action::Move;
pub use first_player::choose_first_player;
pub use phases::{AwaitingMove, Draw, GameStatus, Phase, Won};
pub use position::Position;
pub use round::{Round, RoundTransition};
pub use rules::{check_win, is_full};
pub use types::{Board, Marker, MarkerAssignment, Player, Square};

/// Returns a board with all nine squares empty.
pub fn new_board() -> Board {
    Board::new()
}
