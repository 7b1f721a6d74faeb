//! Re-prompting console input.
//!
//! Every question the game asks goes through [`Console::ask`], which keeps
//! asking until an answer both parses and passes a validity check. The
//! engine only ever sees answers that got through.

use crate::config::MarkerSymbols;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Marker, MarkerAssignment, Player, Position};
use tracing::{debug, instrument};

/// Errors from talking to the players.
#[derive(Debug, Display, Error)]
pub enum PromptError {
    /// Input ended before a valid answer arrived.
    #[display("Input closed while waiting for an answer")]
    InputClosed,

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::Io(err)
    }
}

/// A line-oriented console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Asks `question` until an answer parses and passes `valid`.
    ///
    /// Rejected answers are dropped and the question is repeated. Closed
    /// input ends the loop with [`PromptError::InputClosed`].
    #[instrument(skip(self, parse, valid))]
    pub fn ask<T, P, V>(&mut self, question: &str, parse: P, valid: V) -> Result<T, PromptError>
    where
        T: std::fmt::Debug,
        P: Fn(&str) -> Option<T>,
        V: Fn(&T) -> bool,
    {
        let mut raw = Vec::new();
        loop {
            write!(self.output, "{question}")?;
            self.output.flush()?;

            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                debug!("Input closed");
                return Err(PromptError::InputClosed);
            }
            // Undecodable bytes become U+FFFD and fail to parse like any typo
            let line = String::from_utf8_lossy(&raw);

            match parse(&line) {
                Some(answer) if valid(&answer) => {
                    debug!(?answer, "Answer accepted");
                    return Ok(answer);
                }
                Some(answer) => debug!(?answer, "Answer parsed but not allowed"),
                None => debug!(input = line.trim(), "Answer did not parse"),
            }
        }
    }

    /// Output stream, for drawing between questions.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Reads y/yes/n/no in any case.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Asks Player 1 for a marker until they name one of the two symbols.
pub fn choose_markers<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    symbols: &MarkerSymbols,
) -> Result<MarkerAssignment, PromptError> {
    let question = format!(
        "{}, choose {} or {}: ",
        Player::One,
        symbols.symbol(Marker::Cross),
        symbols.symbol(Marker::Nought)
    );
    let choice = console.ask(&question, |answer| symbols.parse(answer), |_| true)?;
    Ok(MarkerAssignment::new(choice))
}

/// Asks `player` for a position until they name an empty square.
pub fn choose_position<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board: &Board,
    player: Player,
    symbol: char,
) -> Result<Position, PromptError> {
    let question = format!("{player} ({symbol}), choose your next position from 1-9: ");
    console.ask(&question, Position::parse, |pos| board.is_empty(*pos))
}

/// Asks a yes/no question until answered.
pub fn confirm<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<bool, PromptError> {
    console.ask(question, parse_yes_no, |_| true)
}
