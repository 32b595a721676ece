//! Generation-by-generation simulation driver

use super::renderer::{Frame, Renderer};
use crate::config::Settings;
use crate::game_of_life::{GameOfLifeRules, Grid};
use anyhow::{Context, Result};
use log::{debug, info, trace};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub generation: u64,
    pub live_cells: usize,
}

/// A toroidal Game of Life universe and its generation counter
pub struct Simulation {
    settings: Settings,
    current: Grid,
    scratch: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a simulation seeded with the configured pattern
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate().context("Invalid simulation settings")?;

        let size = settings.grid.size;
        let pattern = settings.pattern.kind.pattern();
        let offset = settings.pattern.anchor(size);

        let mut grid = Grid::new(size)?;
        grid.seed(&pattern, offset)
            .with_context(|| format!("Failed to seed pattern '{}'", pattern.name()))?;

        debug!(
            "seeded {} ({} cells) at {:?} on a {}x{} grid",
            pattern.name(),
            pattern.len(),
            offset,
            size,
            size
        );

        Self::with_grid(settings, grid)
    }

    /// Create a simulation from an explicit starting grid (useful for testing)
    pub fn with_grid(mut settings: Settings, grid: Grid) -> Result<Self> {
        settings.grid.size = grid.size();
        let scratch = Grid::new(grid.size())?;

        Ok(Self {
            settings,
            current: grid,
            scratch,
            generation: 0,
        })
    }

    /// Replace the current grid with its successor and bump the generation counter
    pub fn advance(&mut self) {
        GameOfLifeRules::evolve_into(&self.current, &mut self.scratch);
        std::mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!("advanced to generation {}", self.generation);
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn live_cells(&self) -> usize {
        self.current.count_live()
    }

    /// Snapshot of the current state for rendering
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            generation: self.generation,
            live_cells: self.live_cells(),
            grid: &self.current,
        }
    }

    /// Render, advance and pause for the configured number of generations, then render the final state
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<RunSummary> {
        let generations = self.settings.simulation.generations;
        let delay = self.settings.simulation.delay();
        debug!(
            "running {} generations from generation {} with {:?} delay",
            generations, self.generation, delay
        );

        for _ in 0..generations {
            renderer.render(&self.frame())?;
            self.advance();
            renderer.pause(delay);
        }

        renderer.finish(&self.frame()).context("Failed to render final generation")?;

        let summary = RunSummary {
            generation: self.generation,
            live_cells: self.live_cells(),
        };
        info!(
            "finished at generation {} with {} live cells",
            summary.generation, summary.live_cells
        );
        Ok(summary)
    }
}
