//! Coin toss for who opens a round.

use crate::Player;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks the opening player with even odds from the supplied source.
///
/// This is the only random decision in the engine. Callers pass the source
/// so everything downstream stays reproducible under a seeded RNG.
#[instrument(skip(rng))]
pub fn choose_first_player<R: Rng + ?Sized>(rng: &mut R) -> Player {
    let player = if rng.gen_range(0..2) == 0 {
        Player::Two
    } else {
        Player::One
    };
    debug!(%player, "Chose first player");
    player
}
