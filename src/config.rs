use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ai::DEFAULT_DEPTH;
use crate::error::ConfigError;
use crate::game::{Board, Player, COLS, ROWS, WIN_LENGTH};

/// Largest board edge accepted. Keeps whole-board scores well inside `i32`
/// and the grid inside a terminal.
pub const MAX_BOARD_EDGE: usize = 16;

/// Deepest search accepted; the tree grows as `cols^depth`.
pub const MAX_DEPTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

impl BoardConfig {
    /// Empty board of the configured size
    pub fn build(&self) -> Board {
        Board::with_size(self.rows, self.cols)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Seat the computer plays. Red always moves first.
    pub computer: Player,
}

impl Default for PlayConfig {
    fn default() -> Self {
        PlayConfig {
            computer: Player::Yellow,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub play: PlayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let edges = WIN_LENGTH..=MAX_BOARD_EDGE;
        if !edges.contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in {WIN_LENGTH}..={MAX_BOARD_EDGE}"
            )));
        }
        if !edges.contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in {WIN_LENGTH}..={MAX_BOARD_EDGE}"
            )));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
