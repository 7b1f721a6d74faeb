//! The outer replay loop: rounds until the players say stop.

use crate::config::MarkerSymbols;
use crate::prompt::{Console, PromptError, choose_markers, choose_position, confirm};
use crate::render::BoardRenderer;
use derive_getters::Getters;
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{Player, Round, RoundTransition, choose_first_player};
use tracing::{info, instrument};

const WELCOME: &str = "Welcome to Tic Tac Toe!";
const READY: &str = "Are you ready to play? (y/n): ";
const AGAIN: &str = "Would you like to play again? (y/n): ";
const FAREWELL: &str = "Thank you for playing!";

/// How a single round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A player completed a line.
    Won(Player),
    /// The board filled with no line.
    Draw,
    /// The players were not ready, so nothing was played.
    Skipped,
}

/// Tally over a whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds played to a result.
    rounds: u32,
    /// Rounds won by Player 1.
    player_one_wins: u32,
    /// Rounds won by Player 2.
    player_two_wins: u32,
    /// Rounds drawn.
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won(Player::One) => self.player_one_wins += 1,
            RoundOutcome::Won(Player::Two) => self.player_two_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
            RoundOutcome::Skipped => return,
        }
        self.rounds += 1;
    }
}

/// A game session between two players at one console.
pub struct Session<R, W, G> {
    console: Console<R, W>,
    renderer: BoardRenderer,
    symbols: MarkerSymbols,
    rng: G,
}

impl<R: BufRead, W: Write, G: Rng> Session<R, W, G> {
    /// Creates a session. `rng` decides who opens each round.
    pub fn new(
        console: Console<R, W>,
        renderer: BoardRenderer,
        symbols: MarkerSymbols,
        rng: G,
    ) -> Self {
        Self {
            console,
            renderer,
            symbols,
            rng,
        }
    }

    /// Plays rounds until the players decline another.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary, PromptError> {
        let mut summary = SessionSummary::default();
        self.console.say(WELCOME)?;

        loop {
            let outcome = self.play_round()?;
            info!(?outcome, "Round finished");
            summary.record(outcome);

            if !confirm(&mut self.console, AGAIN)? {
                break;
            }
        }

        self.console.say(FAREWELL)?;
        info!(?summary, "Session over");
        Ok(summary)
    }

    /// Plays one round from marker choice to its result.
    ///
    /// Declining the readiness question ends the round before any move.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<RoundOutcome, PromptError> {
        let assignment = choose_markers(&mut self.console, &self.symbols)?;
        let first = choose_first_player(&mut self.rng);
        self.console.say(format_args!("{first} will go first!"))?;

        if !confirm(&mut self.console, READY)? {
            info!("Players not ready");
            return Ok(RoundOutcome::Skipped);
        }

        let mut round = Round::new(assignment, first);
        loop {
            self.renderer
                .render(round.board(), self.console.output_mut())?;

            let player = round.to_move();
            let symbol = self.symbols.symbol(round.marker_to_move());
            let pos = choose_position(&mut self.console, round.board(), player, symbol)?;

            round = match round.place(pos) {
                RoundTransition::InProgress(next) => next,
                RoundTransition::Won(done) => {
                    self.renderer.render(done.board(), self.console.output_mut())?;
                    self.console
                        .say(format_args!("Congratulations {}! You WIN!", done.winner()))?;
                    return Ok(RoundOutcome::Won(done.winner()));
                }
                RoundTransition::Draw(done) => {
                    self.renderer.render(done.board(), self.console.output_mut())?;
                    self.console.say("The game is a DRAW!")?;
                    return Ok(RoundOutcome::Draw);
                }
            };
        }
    }

    /// Consumes the session, returning the console output.
    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_ignores_skipped_rounds() {
        let mut summary = SessionSummary::default();
        summary.record(RoundOutcome::Won(Player::Two));
        summary.record(RoundOutcome::Skipped);
        summary.record(RoundOutcome::Draw);
        assert_eq!(*summary.rounds(), 2);
        assert_eq!(*summary.player_one_wins(), 0);
        assert_eq!(*summary.player_two_wins(), 1);
        assert_eq!(*summary.draws(), 1);
    }
}
