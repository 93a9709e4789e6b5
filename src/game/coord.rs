use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the board as `(row, col)`.
///
/// Coordinates are signed so that a step off the edge (for example `(-1, 0)`)
/// is representable and can be rejected by validation instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the cell reached by stepping `(d_row, d_col)` from here.
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    pub fn manhattan_distance(self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Board size in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: i32,
    pub cols: i32,
}

impl Dimensions {
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        (self.rows.max(0) as usize) * (self.cols.max(0) as usize)
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }

    /// Row-major index of an in-bounds cell.
    pub fn index_of(&self, pos: Position) -> usize {
        (pos.row * self.cols + pos.col) as usize
    }

    pub fn position_of(&self, index: usize) -> Position {
        let index = index as i32;
        Position::new(index / self.cols, index % self.cols)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
