//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use crate::simulation::Frame;

/// ANSI sequence that clears the screen and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Trailing line shown under every intermediate frame
pub const EXIT_HINT: &str = "Press Ctrl+C to exit";

/// Format frames for terminal output
pub struct FrameFormatter;

impl FrameFormatter {
    /// Header line with generation number and live cell count
    pub fn format_header(generation: u64, live_cells: usize, is_final: bool) -> String {
        let label = if is_final { "Final Generation" } else { "Generation" };
        format!(
            "Conway's Game of Life - {}: {} | Live Cells: {}",
            label, generation, live_cells
        )
    }

    /// Format a grid inside a box-drawing border
    pub fn format_grid_bordered(grid: &Grid, live_glyph: char, dead_glyph: char) -> String {
        let border = "─".repeat(grid.size() + 2);
        let mut output = String::new();

        output.push('┌');
        output.push_str(&border);
        output.push_str("┐\n");

        for row in grid.cells().chunks(grid.size()) {
            output.push_str("│ ");
            output.extend(row.iter().map(|&cell| if cell { live_glyph } else { dead_glyph }));
            output.push_str(" │\n");
        }

        output.push('└');
        output.push_str(&border);
        output.push_str("┘\n");
        output
    }

    /// Format a complete frame: optional clear, header, bordered grid and, unless final, the exit hint
    pub fn format_frame(frame: &Frame<'_>, display: &DisplayConfig, is_final: bool) -> String {
        let mut output = String::new();

        if display.clear_screen {
            output.push_str(CLEAR_SCREEN);
        }

        output.push_str(&Self::format_header(frame.generation, frame.live_cells, is_final));
        output.push('\n');
        output.push_str(&Self::format_grid_bordered(
            frame.grid,
            display.live_glyph,
            display.dead_glyph,
        ));

        if !is_final {
            output.push_str(EXIT_HINT);
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
