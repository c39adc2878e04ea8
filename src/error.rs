//! Error types. Every failure the engine can produce is returned as a value.

use thiserror::Error;

use crate::Position;

/// Violations of the grid invariants. These indicate a bug in the caller rather than a
/// situation a user can recover from.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be at least 1x1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("position {position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
}

/// Why no route could be reported. The messages are meant to be shown to the user as is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteError {
    #[error("You have not set starting location!")]
    NoStart,

    #[error("You have not set target location!")]
    NoEnd,

    #[error("You have not set starting and target location!")]
    NoStartAndEnd,

    #[error("Unable to find path from starting location to target location!")]
    Unreachable,

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors while parsing the ASCII form of a [Board](crate::Board).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("unknown cell symbol '{symbol}' at {position}")]
    UnknownSymbol { symbol: char, position: Position },

    #[error("second '{symbol}' marker at {position}")]
    DuplicateMarker { symbol: char, position: Position },

    #[error(transparent)]
    Grid(#[from] GridError),
}
