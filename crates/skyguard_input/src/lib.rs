//! Keyboard input handling
//!
//! This crate turns held keys into camera motion for the lighting demo
//! and into steering thrust for the air-defense drone.

mod camera_controller;
mod drone_controller;

pub use camera_controller::{CameraControl, CameraController};
pub use drone_controller::DroneController;
