//! Skyguard Rendering Library
//!
//! This crate provides the wgpu glue for both demos: surface management,
//! a walking free camera, and two pipelines.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::FreeCamera`] - yaw/pitch first-person camera
//! - [`pipeline::FlatPipeline`] - unlit coloured triangles for the game board
//! - [`pipeline::LitPipeline`] - Gouraud/Phong shading for the lighting scene
//! - [`renderable`] - turns simulation state into vertex lists

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod renderable;

pub use camera::FreeCamera;
pub use renderable::{
    board_view_projection, AirDefenseGeometry, CheckerboardGeometry, LightingGeometry,
};
