use std::path::PathBuf;

/// Errors produced by board generation and mine queries.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size must be at least {min}, got {size}")]
    BoardTooSmall { size: usize, min: usize },

    #[error("number of mines must be in range [0, {max}], got {mines}")]
    TooManyMines { mines: usize, max: usize },

    #[error("{name} must be in range [0, {max}], got {value}")]
    PositionOutOfRange {
        name: &'static str,
        value: usize,
        max: usize,
    },

    #[error("board has not been generated")]
    NotGenerated,
}

/// Errors that can abort a game session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}
