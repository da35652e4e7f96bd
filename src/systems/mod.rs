//! Application systems
//!
//! Window, rendering and per-frame simulation, kept out of main.rs so they can
//! be tested on their own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem, MAX_FRAME_TIME};
pub use window::{format_title, TitleStats, WindowError, WindowSystem};
