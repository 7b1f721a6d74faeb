//! Alternating turn invariant: players take strict turns.

use super::Invariant;
use crate::Round;
use crate::phases::Phase;

/// Invariant: players alternate, starting with the round's first player.
///
/// While the round is in progress, the player to move is the one the
/// history length implies.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    /// Description reported on violation.
    pub const DESCRIPTION: &'static str = "Players alternate turns starting with the first player";
}

impl<P: Phase> Invariant<Round<P>> for AlternatingTurnInvariant {
    fn holds(round: &Round<P>) -> bool {
        let history = round.history();

        if let Some(first) = history.first()
            && first.player != round.first_player()
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        match round.phase().to_move() {
            Some(to_move) => {
                let expected = if history.len() % 2 == 0 {
                    round.first_player()
                } else {
                    round.first_player().other()
                };
                to_move == expected
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        Self::DESCRIPTION
    }
}
