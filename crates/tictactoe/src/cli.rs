//! Command-line interface for tictactoe.

use crate::config::ClearStyle;
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe at the terminal prompt", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the first-player coin toss (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How to clear the screen before drawing the board
    #[arg(long, value_enum)]
    pub clear: Option<ClearStyle>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.seed.is_none());
        assert!(cli.clear.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--config",
            "game.toml",
            "--seed",
            "42",
            "--clear",
            "ansi",
            "--log-file",
            "game.log",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.clear, Some(ClearStyle::Ansi));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_unknown_clear_style_rejected() {
        assert!(Cli::try_parse_from(["tictactoe", "--clear", "sparkle"]).is_err());
    }
}
