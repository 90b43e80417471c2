use std::path::PathBuf;

/// Errors raised while building or loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid grid size {size}: grid size must be between 3 and 10")]
    InvalidGridSize { size: usize },

    #[error(
        "invalid win condition {win_condition}: win condition must be between 3 and the grid size ({grid_size})"
    )]
    InvalidWinCondition {
        win_condition: usize,
        grid_size: usize,
    },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
