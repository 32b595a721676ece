//! Built-in seed patterns

use super::error::GridError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];
const BEACON: &[(usize, usize)] = &[
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (2, 2),
    (2, 3),
    (3, 2),
    (3, 3),
];

/// Selects one of the built-in patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Glider,
    Block,
    Blinker,
    Beacon,
}

impl PatternKind {
    pub fn pattern(self) -> Pattern {
        match self {
            PatternKind::Glider => Pattern::glider(),
            PatternKind::Block => Pattern::block(),
            PatternKind::Blinker => Pattern::blinker(),
            PatternKind::Beacon => Pattern::beacon(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Glider => "glider",
            PatternKind::Block => "block",
            PatternKind::Blinker => "blinker",
            PatternKind::Beacon => "beacon",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A finite set of live cells, relative to the pattern's top-left anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Build a pattern from (row, col) offsets
    pub fn from_offsets(name: impl Into<String>, cells: &[(usize, usize)]) -> Self {
        Self {
            name: name.into(),
            cells: cells.to_vec(),
        }
    }

    /// Parse a pattern from rows of '1' (alive) and '0' (dead)
    pub fn from_rows(name: impl Into<String>, rows: &str) -> Result<Self, GridError> {
        let name = name.into();
        let lines: Vec<&str> = rows
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect();

        let width = lines.first().map_or(0, |line| line.len());
        let mut cells = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '0' => {}
                    '1' => cells.push((row, col)),
                    _ => return Err(GridError::InvalidCharacter { ch, row, col }),
                }
            }
        }

        if cells.is_empty() {
            return Err(GridError::EmptyPattern(name));
        }

        Ok(Self { name, cells })
    }

    /// The reference 5-cell glider, travelling toward increasing row and column
    pub fn glider() -> Self {
        Self::from_offsets("glider", GLIDER)
    }

    /// 2x2 still life
    pub fn block() -> Self {
        Self::from_offsets("block", BLOCK)
    }

    /// Period-2 oscillator, horizontal phase
    pub fn blinker() -> Self {
        Self::from_offsets("blinker", BLINKER)
    }

    /// Period-2 oscillator made of two diagonal blocks
    pub fn beacon() -> Self {
        Self::from_offsets("beacon", BEACON)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows spanned by the live cells, counted from the anchor
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Columns spanned by the live cells, counted from the anchor
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }
}
