//! Errors raised while building grids and patterns

use thiserror::Error;

/// Input validation failures at grid and pattern construction boundaries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid size must be positive")]
    ZeroSize,

    #[error("Grid size {size} is too large")]
    TooLarge { size: usize },

    #[error("Row {row} has length {len}, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("Grid must be square, got {height} rows of width {width}")]
    NotSquare { width: usize, height: usize },

    #[error("Pattern '{name}' spans {height}x{width} and does not fit a {size}x{size} grid")]
    PatternTooLarge {
        name: String,
        width: usize,
        height: usize,
        size: usize,
    },

    #[error("Invalid character '{ch}' at position ({row}, {col}). Only '0' and '1' are allowed")]
    InvalidCharacter { ch: char, row: usize, col: usize },

    #[error("Pattern '{0}' has no live cells")]
    EmptyPattern(String),
}
