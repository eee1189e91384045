//! Simulation state for Skyguard
//!
//! This crate owns everything that changes from frame to frame, with no
//! GPU or window types involved:
//!
//! - [`AirDefense`] - the drone-versus-helicopters game
//! - [`LightingScene`] - a RON-described scene of lit cuboids
//! - [`LightingDemo`] - a scene plus its animation state and lighting model

pub mod air_defense;
pub mod lighting;

pub use air_defense::{
    AirDefense, AirDefenseConfig, Drone, DroneState, GameEvent, GamePhase, Helicopter,
    HelicopterKey,
};
pub use lighting::{
    LightingDemo, LightingModel, LightingScene, Oscillator, SceneLoadError, SceneObject,
};

// Re-export commonly used types from skyguard_math for convenience
pub use skyguard_math::{Vec2, Vec3};
