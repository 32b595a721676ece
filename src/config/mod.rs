//! Configuration management for the toroidal Game of Life simulation

pub mod settings;

pub use settings::{
    CliOverrides, DisplayConfig, GridConfig, OutputFormat, PatternConfig, Settings,
    SimulationConfig,
};
