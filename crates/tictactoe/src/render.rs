//! Board drawing with a pluggable screen-clearing sink.

use crate::config::{AppConfig, ClearStyle, MarkerSymbols};
use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use tictactoe_engine::{Board, Square};
use tracing::instrument;

/// Something that can wipe what was drawn before.
pub trait RenderSink {
    /// Clears prior output on `out`.
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Scrolls old output away with blank lines. Works on any stream.
#[derive(Debug, Clone, Copy)]
pub struct NewlineSink {
    lines: usize,
}

impl NewlineSink {
    /// Creates a sink printing `lines` blank lines per clear.
    pub fn new(lines: usize) -> Self {
        Self { lines }
    }
}

impl RenderSink for NewlineSink {
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", "\n".repeat(self.lines))
    }
}

/// Erases the terminal and homes the cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiSink;

impl RenderSink for AnsiSink {
    fn clear(&mut self, out: &mut dyn Write) -> io::Result<()> {
        out.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
        out.flush()
    }
}

/// Draws boards as three `a|b|c` rows.
pub struct BoardRenderer {
    symbols: MarkerSymbols,
    sink: Box<dyn RenderSink>,
}

impl BoardRenderer {
    /// Creates a renderer with an explicit sink.
    pub fn new(symbols: MarkerSymbols, sink: Box<dyn RenderSink>) -> Self {
        Self { symbols, sink }
    }

    /// Creates the renderer the configuration asks for.
    #[instrument(skip(config), fields(clear = %config.clear()))]
    pub fn from_config(config: &AppConfig) -> Self {
        let sink: Box<dyn RenderSink> = match config.clear() {
            ClearStyle::Newlines => Box::new(NewlineSink::new(*config.clear_lines())),
            ClearStyle::Ansi => Box::new(AnsiSink),
        };
        Self::new(*config.symbols(), sink)
    }

    /// Formats the board, blank squares as spaces.
    pub fn format(&self, board: &Board) -> String {
        board
            .squares()
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        Square::Empty => ' ',
                        Square::Occupied(marker) => self.symbols.symbol(*marker),
                    })
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .map(|row| row + "\n")
            .collect()
    }

    /// Clears prior output, then draws the board.
    pub fn render(&mut self, board: &Board, out: &mut dyn Write) -> io::Result<()> {
        self.sink.clear(out)?;
        write!(out, "{}", self.format(board))?;
        out.flush()
    }
}
