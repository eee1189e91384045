//! 2D kinematics for Skyguard
//!
//! This crate provides the closed-form routines the air-defense game runs
//! every frame:
//! - Collision shapes (circles, screen bounds)
//! - Circle-distance collision detection
//! - Collision filtering via layer masks
//! - Steering towards a target

pub mod collision;
pub mod shapes;
pub mod steering;

// Re-export commonly used types
pub use collision::{circles_collide, CollisionFilter, CollisionLayer};
pub use shapes::{Bounds2D, Circle};
pub use steering::steer_towards;
