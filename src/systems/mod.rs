//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod demo;
mod render;
mod simulation;
mod window;

pub use demo::{ActiveDemo, AirDefenseRun, LightingRun};
pub use render::{RenderError, RenderSystem};
pub use simulation::FramePacer;
pub use window::{WindowError, WindowSystem};
