use core::fmt;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::N_SMALLVEC_SIZE;

/// A cell coordinate, 0-indexed from the top-left corner.
///
/// The derived ordering compares the row first and the column second. Searches use this order
/// to break ties between equally promising nodes, which makes results reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// True if the two positions share a side.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The four orthogonal neighbours (up, left, right, down). Some of them may lie outside of
    /// any given grid.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Position; N_SMALLVEC_SIZE]> {
        let Position { row, col } = *self;
        SmallVec::from_buf([
            Position::new(row - 1, col),
            Position::new(row, col - 1),
            Position::new(row, col + 1),
            Position::new(row + 1, col),
        ])
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Position {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
