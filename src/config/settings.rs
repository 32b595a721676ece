//! Configuration settings for the toroidal Game of Life simulation

use crate::game_of_life::{PatternKind, MAX_GRID_SIZE};
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub pattern: PatternConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: u64,
    pub delay_ms: u64,
}

impl SimulationConfig {
    /// Pause between rendered generations
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    pub kind: PatternKind,
    /// Top-left anchor as (row, col); the grid center when absent
    #[serde(default)]
    pub offset: Option<(usize, usize)>,
}

impl PatternConfig {
    /// Resolve the anchor for a grid of the given size
    pub fn anchor(&self, size: usize) -> (usize, usize) {
        self.offset.unwrap_or((size / 2, size / 2))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub live_glyph: char,
    pub dead_glyph: char,
    pub clear_screen: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig { size: 25 },
            simulation: SimulationConfig {
                generations: 1_000,
                delay_ms: 200,
            },
            pattern: PatternConfig {
                kind: PatternKind::Glider,
                offset: None,
            },
            display: DisplayConfig {
                live_glyph: 'X',
                dead_glyph: '.',
                clear_screen: true,
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let size = self.grid.size;
        if size == 0 {
            anyhow::bail!("Grid size must be positive");
        }
        if size > MAX_GRID_SIZE {
            anyhow::bail!("Grid size {} exceeds the maximum of {}", size, MAX_GRID_SIZE);
        }

        let pattern = self.pattern.kind.pattern();
        if pattern.height() > size || pattern.width() > size {
            anyhow::bail!(
                "Pattern '{}' spans {}x{} and does not fit a {}x{} grid",
                pattern.name(),
                pattern.height(),
                pattern.width(),
                size,
                size
            );
        }

        if let Some((row, col)) = self.pattern.offset {
            if row >= size || col >= size {
                anyhow::bail!(
                    "Pattern offset ({}, {}) lies outside the {}x{} grid",
                    row, col, size, size
                );
            }
        }

        if self.display.live_glyph == self.display.dead_glyph {
            anyhow::bail!(
                "Live and dead glyphs must differ, both are '{}'",
                self.display.live_glyph
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.grid.size = size;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if let Some(kind) = cli_overrides.pattern {
            self.pattern.kind = kind;
        }
        if let Some(format) = cli_overrides.format {
            self.display.format = format;
        }
        if cli_overrides.no_clear {
            self.display.clear_screen = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<usize>,
    pub generations: Option<u64>,
    pub delay_ms: Option<u64>,
    pub pattern: Option<PatternKind>,
    pub format: Option<OutputFormat>,
    pub no_clear: bool,
}
