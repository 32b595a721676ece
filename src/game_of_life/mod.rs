//! Game of Life core functionality

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use error::GridError;
pub use grid::{Grid, MAX_GRID_SIZE};
pub use patterns::{Pattern, PatternKind};
pub use rules::{GameOfLifeRules, MAX_NEIGHBORS};
