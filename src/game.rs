//! Turn state machine for one game session
//!
//! A [`GameSession`] owns the board, configuration, current mark and phase.
//! Moves are handled to completion: place the mark, check for a win, check
//! for a draw, then hand the turn to the other player.
//!
//! ```text
//! Setup --start--> InProgress --win--> Won
//!                      |  ^     --full--> Draw
//!                      +--+ (next turn)
//! Won / Draw / InProgress --reset--> Setup
//! ```

use tracing::{debug, info, trace};

use crate::board::{Board, Mark, Pos};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::rules::find_winning_line;

/// Phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a configuration
    Setup,
    InProgress,
    /// Terminal: the given mark completed a line
    Won(Mark),
    /// Terminal: board filled with no line
    Draw,
}

impl Phase {
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }
}

/// Result of a move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move applied, game goes on with `next` to play
    Continue { next: Mark },
    /// Move completed a line
    Won { winner: Mark, line: Vec<Pos> },
    /// Move filled the last cell without a line
    Draw,
    /// Occupied cell, out of range, wrong mark, or no game in progress
    Ignored,
}

/// Board of the running game plus everything needed to advance it
#[derive(Debug, Clone)]
struct Game {
    board: Board,
    config: GameConfig,
    current: Mark,
    winning_line: Option<Vec<Pos>>,
}

/// One player-facing game session
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    game: Option<Game>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// New session in the `Setup` phase
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            game: None,
        }
    }

    /// Start a fresh game. `X` moves first.
    ///
    /// `config` is already validated by [`GameConfig::new`]; on error the
    /// session is left untouched.
    pub fn start(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        let board = Board::new(config.grid_size())?;

        info!(
            grid_size = config.grid_size(),
            win_condition = config.win_condition(),
            "game started"
        );
        self.game = Some(Game {
            board,
            config,
            current: Mark::X,
            winning_line: None,
        });
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Play the current mark at `pos`
    pub fn play(&mut self, pos: Pos) -> MoveOutcome {
        match self.current_mark() {
            Some(mark) => self.play_mark(pos, mark),
            None => {
                trace!(?pos, phase = ?self.phase, "move ignored: no game in progress");
                MoveOutcome::Ignored
            }
        }
    }

    /// Play `mark` at `pos`; ignored unless it is `mark`'s turn
    pub fn play_mark(&mut self, pos: Pos, mark: Mark) -> MoveOutcome {
        if self.phase != Phase::InProgress {
            trace!(?pos, phase = ?self.phase, "move ignored: no game in progress");
            return MoveOutcome::Ignored;
        }
        let Some(game) = self.game.as_mut() else {
            return MoveOutcome::Ignored;
        };
        if mark != game.current {
            trace!(?pos, %mark, "move ignored: not this mark's turn");
            return MoveOutcome::Ignored;
        }
        if !game.board.place(pos, mark) {
            trace!(?pos, "move ignored: cell unavailable");
            return MoveOutcome::Ignored;
        }
        debug!(row = pos.row, col = pos.col, %mark, "move applied");

        let win_condition = game.config.win_condition();
        if let Some(line) = find_winning_line(&game.board, pos, mark, win_condition) {
            info!(winner = %mark, "game won");
            game.winning_line = Some(line.clone());
            self.phase = Phase::Won(mark);
            return MoveOutcome::Won { winner: mark, line };
        }

        if game.board.is_full() {
            info!("game drawn");
            self.phase = Phase::Draw;
            return MoveOutcome::Draw;
        }

        game.current = mark.opponent();
        MoveOutcome::Continue { next: game.current }
    }

    /// Discard the current game and return to `Setup`
    pub fn reset(&mut self) {
        info!(phase = ?self.phase, "session reset");
        self.game = None;
        self.phase = Phase::Setup;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Board of the current or finished game
    pub fn board(&self) -> Option<&Board> {
        self.game.as_ref().map(|g| &g.board)
    }

    pub fn config(&self) -> Option<GameConfig> {
        self.game.as_ref().map(|g| g.config)
    }

    /// Mark to move next, only while a game is in progress
    pub fn current_mark(&self) -> Option<Mark> {
        match self.phase {
            Phase::InProgress => self.game.as_ref().map(|g| g.current),
            _ => None,
        }
    }

    /// Cells of the winning run once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.game.as_ref()?.winning_line.as_deref()
    }

    /// Status text for players
    pub fn status_message(&self) -> String {
        match self.phase {
            Phase::Setup => "Choose a grid size and win condition".to_string(),
            Phase::InProgress => {
                let mark = self.current_mark().unwrap_or(Mark::X);
                format!("Player {mark}'s turn")
            }
            Phase::Won(winner) => format!("Player {winner} wins!"),
            Phase::Draw => "It's a draw!".to_string(),
        }
    }
}
