//! Game configuration: defaults, an optional TOML file, then CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::Marker;
use tracing::{debug, info, instrument};

/// How the screen is cleared before the board is drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ClearStyle {
    /// Push old output off screen with blank lines.
    #[default]
    Newlines,
    /// Erase the terminal with ANSI control sequences.
    Ansi,
}

/// Printable glyphs for the two markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MarkerSymbols {
    /// Glyph for [`Marker::Cross`].
    cross: char,
    /// Glyph for [`Marker::Nought`].
    nought: char,
}

impl MarkerSymbols {
    /// Creates a symbol pair. Use [`MarkerSymbols::validate`] before play.
    pub fn new(cross: char, nought: char) -> Self {
        Self { cross, nought }
    }

    /// Glyph printed for `marker`.
    pub fn symbol(&self, marker: Marker) -> char {
        match marker {
            Marker::Cross => self.cross,
            Marker::Nought => self.nought,
        }
    }

    /// Reads a typed answer as a marker, ignoring case and surrounding
    /// whitespace.
    pub fn parse(&self, input: &str) -> Option<Marker> {
        let mut chars = input.trim().chars();
        let typed = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        [Marker::Cross, Marker::Nought]
            .into_iter()
            .find(|marker| same_letter(typed, self.symbol(*marker)))
    }

    /// Checks that the glyphs can be told apart when typed.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConfigError> {
        for glyph in [self.cross, self.nought] {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::new(format!(
                    "Marker symbol {glyph:?} is not printable"
                )));
            }
            if glyph.is_ascii_digit() {
                return Err(ConfigError::new(format!(
                    "Marker symbol {glyph:?} would be confused with a position"
                )));
            }
        }
        if same_letter(self.cross, self.nought) {
            return Err(ConfigError::new(format!(
                "Marker symbols {:?} and {:?} must differ",
                self.cross, self.nought
            )));
        }
        Ok(())
    }
}

impl Default for MarkerSymbols {
    fn default() -> Self {
        Self::new('X', 'O')
    }
}

fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}

/// Configuration for a game session.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Glyphs for the two markers.
    #[serde(default)]
    symbols: MarkerSymbols,

    /// How the screen is cleared between board draws.
    #[serde(default)]
    clear: ClearStyle,

    /// Blank lines printed by the newline clear style.
    #[serde(default = "default_clear_lines")]
    clear_lines: usize,

    /// Where tracing output goes. Stderr when unset.
    #[serde(default)]
    log_file: Option<PathBuf>,
}

fn default_clear_lines() -> usize {
    15
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            symbols: MarkerSymbols::default(),
            clear: ClearStyle::default(),
            clear_lines: default_clear_lines(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(clear = %config.clear, "Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration for a run.
    ///
    /// Starts from the file named by `--config` (or defaults), applies the
    /// remaining flags on top, then validates the result.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(clear) = cli.clear {
            self.clear = clear;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = Some(log_file.clone());
        }
        self
    }

    /// Checks every setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.symbols.validate()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
