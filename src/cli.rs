//! Command-line interface for the ninarow binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;
use crate::error::ConfigError;

/// N-in-a-row - generalized tic-tac-toe on a configurable grid
#[derive(Parser, Debug)]
#[command(name = "ninarow")]
#[command(about = "N-in-a-row on a configurable square grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with the default grid size and win condition
    #[arg(short, long, default_value = "ninarow.toml")]
    pub config: PathBuf,

    /// Default grid size shown on the setup screen (3-10)
    #[arg(long)]
    pub grid_size: Option<usize>,

    /// Default win condition shown on the setup screen (3-grid size)
    #[arg(long)]
    pub win_condition: Option<usize>,
}

impl Cli {
    /// Load the config file (if present) and apply command-line overrides
    pub fn app_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load_or_default(&self.config)?;
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(win_condition) = self.win_condition {
            config.win_condition = win_condition;
        }
        config.validate()?;
        Ok(config)
    }
}
