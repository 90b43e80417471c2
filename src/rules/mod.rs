//! Game rules for N-in-a-row
//!
//! Only one rule decides the game: an unbroken line of `win_condition`
//! marks through the last move wins.

pub mod win;

// Re-exports for convenient access
pub use win::{count_direction, find_winning_line, has_win_at, DIRECTIONS};
