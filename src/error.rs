//! Error types for the rule engine and its text front end.

use crate::board::Point;
use crate::constants::{MAX_SIZE, MIN_SIZE};

/// Why a move could not be committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("illegal move: {0:?} is off the board")]
    OutOfBounds(Point),

    #[error("illegal move: {0:?} is not empty")]
    Occupied(Point),

    #[error("illegal move: {0:?} is suicide")]
    Suicide(Point),
}

/// Errors parsing a GTP vertex such as `D4`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VertexError {
    #[error("invalid coordinate: {0:?}")]
    Malformed(String),

    #[error("coordinate {0} is outside the board")]
    OffBoard(String),

    #[error("column {0} has no GTP letter")]
    NoColumnLetter(usize),
}

/// A board size the text front end cannot address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unacceptable size, must be {min}..={max} (got {0})", min = MIN_SIZE, max = MAX_SIZE)]
pub struct SizeError(pub usize);

/// Errors building a board from a text diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    #[error("diagram has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, col {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: char },
}
