//! Conway's Game of Life on a toroidal grid
//!
//! This library provides the grid model, the update rule, and a renderer-driven
//! simulation loop for printing successive generations to a terminal.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{GameOfLifeRules, Grid, Pattern, PatternKind};
pub use simulation::{Renderer, RunSummary, Simulation};

use anyhow::Result;

/// Main entry point for running a configured simulation against a renderer
pub fn run_simulation<R: Renderer + ?Sized>(settings: Settings, renderer: &mut R) -> Result<RunSummary> {
    let mut simulation = Simulation::new(settings)?;
    simulation.run(renderer)
}
