use std::path::Path;

use tracing::warn;

use crate::board::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::error::ConfigError;

/// Shortest line that can win a game
pub const MIN_WIN_CONDITION: usize = 3;

/// Validated per-game settings, fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    grid_size: usize,
    win_condition: usize,
}

impl GameConfig {
    /// Build a config, checking `3 <= grid_size <= 10` and
    /// `3 <= win_condition <= grid_size`.
    pub fn new(grid_size: usize, win_condition: usize) -> Result<Self, ConfigError> {
        let config = GameConfig {
            grid_size,
            win_condition,
        };
        if let Err(e) = config.validate() {
            warn!(error = %e, "rejected game configuration");
            return Err(e);
        }
        Ok(config)
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn win_condition(&self) -> usize {
        self.win_condition
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::InvalidGridSize {
                size: self.grid_size,
            });
        }
        if !(MIN_WIN_CONDITION..=self.grid_size).contains(&self.win_condition) {
            return Err(ConfigError::InvalidWinCondition {
                win_condition: self.win_condition,
                grid_size: self.grid_size,
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_size: MIN_GRID_SIZE,
            win_condition: MIN_WIN_CONDITION,
        }
    }
}

/// Application settings, loadable from TOML.
///
/// These are the values the setup form starts with and returns to on reset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid_size: usize,
    pub win_condition: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let game = GameConfig::default();
        AppConfig {
            grid_size: game.grid_size(),
            win_condition: game.win_condition(),
        }
    }
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game_config().map(|_| ())
    }

    /// Convert to a validated [`GameConfig`].
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.grid_size, self.win_condition)
    }
}
