//! Typestate round engine for tic-tac-toe.
//!
//! The round's phase is its type parameter, so a finished round has no way
//! to accept another move.

use crate::invariants::{InvariantSet, RoundInvariants};
use crate::phases::{AwaitingMove, Draw, GameStatus, Phase, Won};
use crate::{Board, Marker, MarkerAssignment, Move, Player, Position, choose_first_player};
use rand::Rng;
use tracing::{debug, info, instrument};

/// One round: an empty board played out to a win or a draw.
///
/// - `Round<AwaitingMove>` accepts [`Round::place`]
/// - `Round<Won>` exposes [`Round::winner`]
/// - `Round<Draw>` is read-only
#[derive(Debug, Clone)]
pub struct Round<P> {
    pub(crate) board: Board,
    pub(crate) assignment: MarkerAssignment,
    pub(crate) first_player: Player,
    pub(crate) history: Vec<Move>,
    pub(crate) phase: P,
}

/// Where a placement left the round.
#[derive(Debug, Clone)]
pub enum RoundTransition {
    /// Round continues with the other player.
    InProgress(Round<AwaitingMove>),
    /// The mover completed a line.
    Won(Round<Won>),
    /// The board filled without a line.
    Draw(Round<Draw>),
}

// ─────────────────────────────────────────────────────────────
//  Construction - always starts AwaitingMove on an empty board
// ─────────────────────────────────────────────────────────────

impl Round<AwaitingMove> {
    /// Starts a round on a fresh board with `first_player` to move.
    #[instrument]
    pub fn new(assignment: MarkerAssignment, first_player: Player) -> Self {
        info!(%first_player, "Starting round");
        Self {
            board: Board::new(),
            assignment,
            first_player,
            history: Vec::new(),
            phase: AwaitingMove {
                to_move: first_player,
            },
        }
    }

    /// Starts a round with the opening player drawn from `rng`.
    pub fn start<R: Rng + ?Sized>(assignment: MarkerAssignment, rng: &mut R) -> Self {
        Self::new(assignment, choose_first_player(rng))
    }

    /// Replays a sequence of positions from a fresh round.
    ///
    /// Stops at the first terminal state; positions after it are ignored.
    ///
    /// # Panics
    ///
    /// Panics if a position repeats before the round ends.
    pub fn replay(
        assignment: MarkerAssignment,
        first_player: Player,
        positions: &[Position],
    ) -> RoundTransition {
        let mut transition = RoundTransition::InProgress(Self::new(assignment, first_player));
        for pos in positions {
            transition = match transition {
                RoundTransition::InProgress(round) => round.place(*pos),
                done => return done,
            };
        }
        transition
    }
}

// ─────────────────────────────────────────────────────────────
//  Only AwaitingMove accepts placements (consuming transition)
// ─────────────────────────────────────────────────────────────

impl Round<AwaitingMove> {
    /// Places the current player's marker at `pos`, consuming the round.
    ///
    /// The win check runs before the full-board check, so a move that
    /// completes a line on the last empty square is a win.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is occupied. Check [`Board::is_empty`] first.
    #[instrument(skip(self), fields(position = pos.number(), player = %self.phase.to_move))]
    pub fn place(mut self, pos: Position) -> RoundTransition {
        let mover = self.phase.to_move;
        let marker = self.assignment.marker_for(mover);

        self.board.place(marker, pos);
        self.history.push(Move::new(mover, marker, pos));
        debug!(filled = self.board.filled(), "Marker placed");

        let transition = if self.board.check_win(marker) {
            info!(winner = %mover, "Round won");
            RoundTransition::Won(self.into_phase(Won { winner: mover }))
        } else if self.board.is_full() {
            info!("Round drawn");
            RoundTransition::Draw(self.into_phase(Draw))
        } else {
            RoundTransition::InProgress(self.into_phase(AwaitingMove {
                to_move: mover.other(),
            }))
        };

        debug_assert!(
            transition.invariants_hold(),
            "round invariants violated after placing at {}",
            pos.number()
        );
        transition
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.phase.to_move
    }

    /// Returns the marker of the player to move.
    pub fn marker_to_move(&self) -> Marker {
        self.assignment.marker_for(self.phase.to_move)
    }
}

// ─────────────────────────────────────────────────────────────
//  Won - has winner()
// ─────────────────────────────────────────────────────────────

impl Round<Won> {
    /// Returns the player who completed a line.
    pub fn winner(&self) -> Player {
        self.phase.winner
    }

    /// Returns the winning marker.
    pub fn winning_marker(&self) -> Marker {
        self.assignment.marker_for(self.phase.winner)
    }
}

// ─────────────────────────────────────────────────────────────
//  Common methods available on all phases
// ─────────────────────────────────────────────────────────────

impl<P: Phase> Round<P> {
    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker assignment for this round.
    pub fn assignment(&self) -> MarkerAssignment {
        self.assignment
    }

    /// Returns who opened the round.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.phase.status()
    }

    /// Returns the phase value.
    pub fn phase(&self) -> &P {
        &self.phase
    }

    fn into_phase<Q>(self, phase: Q) -> Round<Q> {
        Round {
            board: self.board,
            assignment: self.assignment,
            first_player: self.first_player,
            history: self.history,
            phase,
        }
    }
}

impl RoundTransition {
    /// Returns the board after the transition.
    pub fn board(&self) -> &Board {
        match self {
            RoundTransition::InProgress(round) => round.board(),
            RoundTransition::Won(round) => round.board(),
            RoundTransition::Draw(round) => round.board(),
        }
    }

    /// Returns the round status after the transition.
    pub fn status(&self) -> GameStatus {
        match self {
            RoundTransition::InProgress(round) => round.status(),
            RoundTransition::Won(round) => round.status(),
            RoundTransition::Draw(round) => round.status(),
        }
    }

    /// Returns the move history after the transition.
    pub fn history(&self) -> &[Move] {
        match self {
            RoundTransition::InProgress(round) => round.history(),
            RoundTransition::Won(round) => round.history(),
            RoundTransition::Draw(round) => round.history(),
        }
    }

    fn invariants_hold(&self) -> bool {
        match self {
            RoundTransition::InProgress(round) => RoundInvariants::check_all(round).is_ok(),
            RoundTransition::Won(round) => RoundInvariants::check_all(round).is_ok(),
            RoundTransition::Draw(round) => RoundInvariants::check_all(round).is_ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crosses_for_one() -> MarkerAssignment {
        MarkerAssignment::new(Marker::Cross)
    }

    #[test]
    fn test_new_round_awaits_first_player() {
        let round = Round::new(crosses_for_one(), Player::Two);
        assert_eq!(round.to_move(), Player::Two);
        assert_eq!(round.marker_to_move(), Marker::Nought);
        assert_eq!(round.status(), GameStatus::InProgress);
        assert!(round.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let round = Round::new(crosses_for_one(), Player::One);
        let RoundTransition::InProgress(round) = round.place(Position::Center) else {
            panic!("first move cannot end the round");
        };
        assert_eq!(round.to_move(), Player::Two);
        let RoundTransition::InProgress(round) = round.place(Position::TopLeft) else {
            panic!("second move cannot end the round");
        };
        assert_eq!(round.to_move(), Player::One);
        assert_eq!(round.history().len(), 2);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_place_on_occupied_panics() {
        let round = Round::new(crosses_for_one(), Player::One);
        let RoundTransition::InProgress(round) = round.place(Position::Center) else {
            panic!("first move cannot end the round");
        };
        let _ = round.place(Position::Center);
    }

    #[test]
    fn test_replay_stops_at_terminal_state() {
        use Position::*;
        let transition = Round::replay(
            crosses_for_one(),
            Player::One,
            &[TopLeft, MiddleLeft, TopCenter, Center, TopRight, BottomRight],
        );
        let RoundTransition::Won(round) = transition else {
            panic!("Player 1 completes the top row");
        };
        assert_eq!(round.winner(), Player::One);
        assert_eq!(round.winning_marker(), Marker::Cross);
        assert_eq!(round.history().len(), 5);
    }
}
