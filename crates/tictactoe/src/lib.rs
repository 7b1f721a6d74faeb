//! Terminal front end for two-player tic-tac-toe.
//!
//! Everything that touches the outside world lives here: command-line flags,
//! configuration, prompts that re-ask until they get a usable answer, board
//! drawing, and the session loop. Game rules come from [`tictactoe_engine`].
//!
//! # Architecture
//!
//! - **Console**: validated questions over any `BufRead`/`Write` pair
//! - **Renderer**: draws the board after clearing through a [`RenderSink`]
//! - **Session**: welcome, rounds, replay prompt, farewell
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use std::io::Cursor;
//! use tictactoe::{AppConfig, BoardRenderer, Console, Session};
//!
//! let config = AppConfig::default();
//! let console = Console::new(Cursor::new(b"x\nn\nn\n".to_vec()), Vec::new());
//! let renderer = BoardRenderer::from_config(&config);
//! let rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let mut session = Session::new(console, renderer, *config.symbols(), rng);
//! let summary = session.run().unwrap();
//! assert_eq!(*summary.rounds(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod prompt;
mod render;
mod session;

// Crate-level exports - Command line and configuration
pub use cli::Cli;
pub use config::{AppConfig, ClearStyle, ConfigError, MarkerSymbols};

// Crate-level exports - Logging
pub use logging::{DEFAULT_FILTER, init_tracing};

// Crate-level exports - Console input
pub use prompt::{
    Console, PromptError, choose_markers, choose_position, confirm, parse_yes_no,
};

// Crate-level exports - Rendering
pub use render::{AnsiSink, BoardRenderer, NewlineSink, RenderSink};

// Crate-level exports - Session loop
pub use session::{RoundOutcome, Session, SessionSummary};
