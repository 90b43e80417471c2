//! N-in-a-row: generalized tic-tac-toe on a configurable square grid
//!
//! Two players alternate placing `X` and `O` on a grid of 3x3 up to 10x10.
//! The first player to complete an unbroken line of `win_condition` marks
//! (horizontally, vertically, or on either diagonal) wins. A full board with
//! no such line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation (marks, positions, fullness)
//! - [`rules`]: Win detection around the last move
//! - [`game`]: Turn state machine owning one game session
//! - [`config`]: Validated game configuration and TOML app settings
//! - [`error`]: Configuration error types
//! - [`cli`]: Command-line arguments for the `ninarow` binary
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use ninarow::{GameConfig, GameSession, MoveOutcome, Mark, Pos};
//!
//! let mut session = GameSession::new();
//! session.start(GameConfig::new(3, 3).unwrap()).unwrap();
//!
//! for col in 0..2 {
//!     session.play(Pos::new(0, col)); // X
//!     session.play(Pos::new(1, col)); // O
//! }
//! let outcome = session.play(Pos::new(0, 2));
//! assert!(matches!(outcome, MoveOutcome::Won { winner: Mark::X, .. }));
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use config::{AppConfig, GameConfig, MIN_WIN_CONDITION};
pub use error::ConfigError;
pub use game::{GameSession, MoveOutcome, Phase};
pub use rules::has_win_at;
