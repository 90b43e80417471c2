//! Board representation for N-in-a-row

pub mod board;


// Re-exports
pub use board::Board;

/// Smallest supported grid (3x3)
pub const MIN_GRID_SIZE: usize = 3;
/// Largest supported grid (10x10)
pub const MAX_GRID_SIZE: usize = 10;

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    /// Player A, always moves first
    X,
    /// Player B
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Symbol shown to players ("X", "O", or "" for an empty cell)
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `dist` cells along `(dr, dc)`; `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, dist: isize, size: usize) -> Option<Pos> {
        let r = self.row as isize + dr * dist;
        let c = self.col as isize + dc * dist;
        if Board::in_bounds_for(size, r, c) {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
