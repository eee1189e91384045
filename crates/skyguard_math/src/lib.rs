//! Skyguard Mathematics Library
//!
//! This crate provides the small vector and matrix toolkit shared by the
//! air-defense game and the lighting demo.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector for the game board
//! - [`Vec3`] - 3D vector for the lighting scene and camera
//! - [`Mat4`] - column-major 4x4 matrix with projection/view helpers
//!
//! ## Shapes
//!
//! - [`circle_fan`] - circle tessellated as a triangle fan
//! - [`unit_cube`] - 36-vertex unit cube with normals and UVs

mod vec2;
mod vec3;
pub mod mat4;
pub mod shape;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use mat4::Mat4;
pub use shape::{circle_fan, fan_to_triangles, unit_cube, CubeFace, MeshVertex, CIRCLE_RESOLUTION};
