//! Simulation driver and renderers

pub mod engine;
pub mod renderer;

pub use engine::{RunSummary, Simulation};
pub use renderer::{
    Frame, JsonRenderer, RecordedFrame, RecordingRenderer, Renderer, TerminalRenderer,
};
