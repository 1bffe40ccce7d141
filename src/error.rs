use std::path::PathBuf;

use crate::game::COLS;

/// Reasons the engine rejects a move. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game over")]
    GameOver,

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (0-{})", COLS - 1)]
    InvalidColumn { column: usize },
}

impl GameError {
    /// Engine errors never poison the engine; the caller can always continue
    /// with another column or a reset.
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Whether the caller should offer a reset rather than another column.
    pub fn needs_reset(&self) -> bool {
        matches!(self, GameError::GameOver)
    }
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

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },
}
