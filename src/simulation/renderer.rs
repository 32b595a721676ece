//! Frame renderers for the simulation driver

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use crate::utils::FrameFormatter;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;

/// A snapshot of the simulation handed to a renderer
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub generation: u64,
    pub live_cells: usize,
    pub grid: &'a Grid,
}

/// Output side of the driver loop
pub trait Renderer {
    /// Draw an intermediate generation
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Draw the state left after the last generation
    fn finish(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Wait between generations
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Clears the terminal and redraws a bordered grid for every frame
pub struct TerminalRenderer<W: Write> {
    out: W,
    display: DisplayConfig,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(display: DisplayConfig) -> Self {
        Self::new(io::stdout(), display)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self { out, display }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, frame: &Frame<'_>, is_final: bool) -> Result<()> {
        let text = FrameFormatter::format_frame(frame, &self.display, is_final);
        self.out
            .write_all(text.as_bytes())
            .and_then(|_| self.out.flush())
            .with_context(|| format!("Failed to write generation {}", frame.generation))
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.write_frame(frame, false)
    }

    fn finish(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.write_frame(frame, true)
    }
}

#[derive(Debug, Serialize)]
struct FrameRecord {
    generation: u64,
    live_cells: usize,
    size: usize,
    #[serde(rename = "final")]
    is_final: bool,
    cells: Vec<(usize, usize)>,
}

/// Writes one JSON object per frame, newline delimited
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl JsonRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, frame: &Frame<'_>, is_final: bool) -> Result<()> {
        let record = FrameRecord {
            generation: frame.generation,
            live_cells: frame.live_cells,
            size: frame.grid.size(),
            is_final,
            cells: frame.grid.living_cells(),
        };

        serde_json::to_writer(&mut self.out, &record)
            .context("Failed to serialize frame")?;
        writeln!(self.out)
            .and_then(|_| self.out.flush())
            .with_context(|| format!("Failed to write generation {}", frame.generation))
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.write_record(frame, false)
    }

    fn finish(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.write_record(frame, true)
    }
}

/// A frame captured by [`RecordingRenderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedFrame {
    pub generation: u64,
    pub live_cells: usize,
    pub grid: Grid,
    pub is_final: bool,
}

/// Headless renderer that keeps every frame in memory and never sleeps
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RecordedFrame>,
    pub pauses: Vec<Duration>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, frame: &Frame<'_>, is_final: bool) {
        self.frames.push(RecordedFrame {
            generation: frame.generation,
            live_cells: frame.live_cells,
            grid: frame.grid.clone(),
            is_final,
        });
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.record(frame, false);
        Ok(())
    }

    fn finish(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.record(frame, true);
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        self.pauses.push(delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::game_of_life::Pattern;

    fn glider_grid() -> Grid {
        let mut grid = Grid::new(5).unwrap();
        grid.seed(&Pattern::glider(), (0, 0)).unwrap();
        grid
    }

    #[test]
    fn test_terminal_renderer_output() {
        let grid = glider_grid();
        let frame = Frame { generation: 3, live_cells: 5, grid: &grid };

        let mut display = Settings::default().display;
        display.clear_screen = false;
        let mut renderer = TerminalRenderer::new(Vec::new(), display);
        renderer.render(&frame).unwrap();
        renderer.finish(&frame).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Conway's Game of Life - Generation: 3 | Live Cells: 5");
        assert_eq!(lines[2], "│ .X... │");
        assert_eq!(lines[4], "│ XXX.. │");
        assert_eq!(lines[7], "└───────┘");
        assert_eq!(lines[8], "Press Ctrl+C to exit");
        assert_eq!(lines[9], "Conway's Game of Life - Final Generation: 3 | Live Cells: 5");
        assert_eq!(lines.len(), 9 + 8);
    }

    #[test]
    fn test_json_renderer_output() {
        let grid = glider_grid();
        let frame = Frame { generation: 1, live_cells: 5, grid: &grid };

        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&frame).unwrap();
        renderer.finish(&frame).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let records: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["generation"], 1);
        assert_eq!(records[0]["size"], 5);
        assert_eq!(records[0]["final"], false);
        assert_eq!(records[1]["final"], true);
        assert_eq!(records[0]["cells"].as_array().unwrap().len(), 5);
        assert_eq!(records[0]["cells"][0], serde_json::json!([0, 1]));
    }

    #[test]
    fn test_recording_renderer_never_sleeps() {
        let grid = glider_grid();
        let frame = Frame { generation: 0, live_cells: 5, grid: &grid };

        let mut renderer = RecordingRenderer::new();
        renderer.render(&frame).unwrap();
        renderer.pause(Duration::from_secs(3600));
        renderer.finish(&frame).unwrap();

        assert_eq!(renderer.frames.len(), 2);
        assert!(!renderer.frames[0].is_final);
        assert!(renderer.frames[1].is_final);
        assert_eq!(renderer.pauses, vec![Duration::from_secs(3600)]);
    }
}
