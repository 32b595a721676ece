//! Game of Life rules implementation

use super::Grid;

/// Largest possible count in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    #[inline]
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        neighbor_count == 3 || (current_state && neighbor_count == 2)
    }

    /// Write the successor of `current` into `next`.
    ///
    /// Every cell is computed from `current` alone, so no cell observes
    /// another cell's already-updated value. Callers pair it with a scratch
    /// grid of the same size.
    pub(crate) fn evolve_into(current: &Grid, next: &mut Grid) {
        debug_assert_eq!(current.size(), next.size());

        let size = current.size();
        for row in 0..size {
            for col in 0..size {
                let neighbors = current.live_neighbors(row, col);
                let alive = Self::should_be_alive(current.get(row, col), neighbors);
                next.set(row, col, alive);
            }
        }
    }

    /// Apply Game of Life rules to evolve the grid one generation forward
    pub fn evolve(current: &Grid) -> Grid {
        let mut next = current.clone();
        Self::evolve_into(current, &mut next);
        next
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(grid: Grid, generations: usize) -> Grid {
        let mut current = grid;
        let mut scratch = current.clone();
        for _ in 0..generations {
            Self::evolve_into(&current, &mut scratch);
            std::mem::swap(&mut current, &mut scratch);
        }
        current
    }
}
