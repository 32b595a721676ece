//! Square toroidal grid for Game of Life

use super::error::GridError;
use super::patterns::Pattern;
use itertools::iproduct;
use std::fmt;

/// Largest side length accepted from configuration
pub const MAX_GRID_SIZE: usize = 1024;

/// Represents a square Game of Life grid whose edges wrap around
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid of `size` x `size` cells
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let cell_count = size.checked_mul(size).ok_or(GridError::TooLarge { size })?;

        Ok(Self {
            size,
            cells: vec![false; cell_count],
        })
    }

    /// Create a grid from a square 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = cells.len();
        if height == 0 {
            return Err(GridError::ZeroSize);
        }

        let width = cells[0].len();
        for (row, line) in cells.iter().enumerate() {
            if line.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    len: line.len(),
                    expected: width,
                });
            }
        }

        if width != height {
            return Err(GridError::NotSquare { width, height });
        }

        Ok(Self {
            size: height,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell states
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Convert in-range 2D coordinates to a 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Normalize `coord + delta` into `0..size`
    #[inline]
    pub fn wrap(&self, coord: usize, delta: isize) -> usize {
        let size = self.size as isize;
        ((coord % self.size) as isize + delta).rem_euclid(size) as usize
    }

    /// Get cell value at coordinates, wrapping out-of-range values
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row % self.size, col % self.size)]
    }

    /// Set cell value at coordinates, wrapping out-of-range values
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        let idx = self.index(row % self.size, col % self.size);
        self.cells[idx] = value;
    }

    /// Count the live cells among the 8 wrapped neighbors of (row, col)
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| {
                self.cells[self.index(self.wrap(row, dr), self.wrap(col, dc))]
            })
            .count() as u8
    }

    /// Mark every cell of `pattern` live, anchored at `offset` (row, col)
    pub fn seed(&mut self, pattern: &Pattern, offset: (usize, usize)) -> Result<(), GridError> {
        if pattern.height() > self.size || pattern.width() > self.size {
            return Err(GridError::PatternTooLarge {
                name: pattern.name().to_string(),
                width: pattern.width(),
                height: pattern.height(),
                size: self.size,
            });
        }

        let (anchor_row, anchor_col) = offset;
        for &(row, col) in pattern.cells() {
            self.set(anchor_row % self.size + row, anchor_col % self.size + col, true);
        }
        Ok(())
    }

    /// Count total living cells
    pub fn count_live(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.size, 0..self.size)
            .filter(|&(row, col)| self.cells[self.index(row, col)])
            .collect()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for &cell in row {
                write!(f, "{}", if cell { 'X' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
