//! Output helpers shared by the renderers and the CLI

pub mod display;

pub use display::{Color, ColorOutput, FrameFormatter, CLEAR_SCREEN, EXIT_HINT};
