//! Tests for layered configuration loading.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use tictactoe::{AppConfig, ClearStyle, Cli, MarkerSymbols};

/// Writes `content` to `game.toml` inside `dir` and returns its path.
fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("game.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_full_file_loads() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r##"clear = "ansi"
clear_lines = 4
log_file = "game.log"

[symbols]
cross = "#"
nought = "@"
"##,
    );

    let config = AppConfig::from_file(&path).expect("Config should load");
    assert_eq!(*config.clear(), ClearStyle::Ansi);
    assert_eq!(*config.clear_lines(), 4);
    assert_eq!(config.log_file().as_deref(), Some(PathBuf::from("game.log").as_path()));
    assert_eq!(*config.symbols(), MarkerSymbols::new('#', '@'));
}

#[test]
fn test_no_file_means_defaults() {
    let config = AppConfig::load(&Cli::default()).expect("Defaults are valid");
    assert_eq!(*config.clear(), ClearStyle::Newlines);
    assert_eq!(*config.clear_lines(), 15);
    assert_eq!(*config.symbols(), MarkerSymbols::default());
    assert!(config.log_file().is_none());
}

#[test]
fn test_flags_override_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "clear = \"ansi\"\nlog_file = \"from_file.log\"\n");

    let cli = Cli {
        config: Some(path),
        clear: Some(ClearStyle::Newlines),
        log_file: Some(PathBuf::from("from_flag.log")),
        ..Cli::default()
    };
    let config = AppConfig::load(&cli).expect("Config should load");
    assert_eq!(*config.clear(), ClearStyle::Newlines);
    assert_eq!(
        config.log_file().as_deref(),
        Some(PathBuf::from("from_flag.log").as_path())
    );
}

#[test]
fn test_clashing_symbols_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "[symbols]\ncross = \"a\"\nnought = \"A\"\n");

    let cli = Cli {
        config: Some(path),
        ..Cli::default()
    };
    let err = AppConfig::load(&cli).unwrap_err();
    assert!(err.message.contains("must differ"));
}

#[test]
fn test_invalid_toml_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "this is not valid toml !!!@@@");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_rejected() {
    let err = AppConfig::from_file("/this/path/does/not/exist/game.toml").unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
