//! Rendering pipeline components
//!
//! Two render pipelines: flat colour for the air-defense board and
//! multi-light shading for the lighting scene.

pub mod types;
pub mod flat_pipeline;
pub mod lit_pipeline;
mod vertex_buffer;

// Re-export types
pub use types::{
    FlatUniforms, FlatVertex, GpuDirectionalLight, GpuMaterial, GpuPointLight, GpuSpotLight,
    LitUniforms, LitVertex,
};

// Re-export pipelines
pub use flat_pipeline::FlatPipeline;
pub use lit_pipeline::{LitPipeline, DEPTH_FORMAT};
