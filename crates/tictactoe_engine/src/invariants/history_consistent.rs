//! History consistency invariant: every move used its player's marker.

use super::Invariant;
use crate::Round;
use crate::phases::Phase;

/// Invariant: each recorded move carries the marker assigned to its player.
pub struct HistoryConsistentInvariant;

impl HistoryConsistentInvariant {
    /// Description reported on violation.
    pub const DESCRIPTION: &'static str = "Every move uses the marker assigned to its player";
}

impl<P: Phase> Invariant<Round<P>> for HistoryConsistentInvariant {
    fn holds(round: &Round<P>) -> bool {
        let assignment = round.assignment();
        round
            .history()
            .iter()
            .all(|mov| assignment.marker_for(mov.player) == mov.marker)
    }

    fn description() -> &'static str {
        Self::DESCRIPTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, MarkerAssignment, Move, Player, Position, RoundTransition};

    #[test]
    fn test_played_moves_hold() {
        use Position::*;
        let transition = Round::replay(
            MarkerAssignment::new(Marker::Nought),
            Player::One,
            &[Center, TopLeft, BottomRight],
        );
        let RoundTransition::InProgress(round) = transition else {
            panic!("no line is complete yet");
        };
        assert!(HistoryConsistentInvariant::holds(&round));
    }

    #[test]
    fn test_wrong_marker_violates() {
        let mut round = Round::new(MarkerAssignment::new(Marker::Nought), Player::One);
        round
            .history
            .push(Move::new(Player::One, Marker::Cross, Position::Center));
        assert!(!HistoryConsistentInvariant::holds(&round));
    }
}
