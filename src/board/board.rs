//! Square game board

use super::{Mark, Pos, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::error::ConfigError;

/// Square grid of marks, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    ///
    /// Fails with [`ConfigError::InvalidGridSize`] outside
    /// [`MIN_GRID_SIZE`]..=[`MAX_GRID_SIZE`].
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(ConfigError::InvalidGridSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row < self.size && pos.col < self.size {
            Some(pos.row * self.size + pos.col)
        } else {
            None
        }
    }

    /// Whether signed coordinates fall on a board of `size`
    #[inline]
    pub fn in_bounds_for(size: usize, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < size && (col as usize) < size
    }

    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        Self::in_bounds_for(self.size, row, col)
    }

    /// Get mark at position (out of range reads as empty)
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.index(pos).map_or(Mark::Empty, |i| self.cells[i])
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i] == Mark::Empty)
    }

    /// Place a mark on an empty cell.
    ///
    /// Occupied or out-of-range cells and `Mark::Empty` leave the board
    /// untouched and return `false`.
    pub fn place(&mut self, pos: Pos, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }
        match self.index(pos) {
            Some(i) if self.cells[i] == Mark::Empty => {
                self.cells[i] = mark;
                true
            }
            _ => false,
        }
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&m| m != Mark::Empty)
    }

    /// Number of marks on the board
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Mark::Empty).count()
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }
}
