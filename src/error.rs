use std::path::PathBuf;

/// Errors from a checked move on the live game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("That is not a valid column.")]
    InvalidColumn(usize),

    #[error("That column is full.")]
    ColumnFull(usize),

    #[error("The game is already over.")]
    GameOver,
}

/// Errors from parsing a column typed by a human.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Use a value 0..{max}")]
    NotANumber { max: usize },

    #[error(transparent)]
    Move(#[from] MoveError),
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
}
