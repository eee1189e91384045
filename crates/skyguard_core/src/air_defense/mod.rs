//! Air-defense game
//!
//! The player launches an interceptor drone from the base and steers it
//! into helicopters converging on the city centre. Everything lives on a
//! 2D board in normalized screen units, both axes running -1.0..=1.0.

mod entities;
mod events;
pub mod hud;
mod spawn;
mod state;

pub use entities::{pulse_color, Drone, DroneState, Helicopter, HelicopterKey};
pub use events::{GameEvent, GamePhase};
pub use spawn::{spawn_point, ScreenEdge};
pub use state::AirDefense;

use serde::{Deserialize, Serialize};
use skyguard_math::Vec2;
use skyguard_physics::Circle;

/// Tunables for one game
///
/// Speeds are in board units per second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirDefenseConfig {
    /// Drones available per game
    pub drone_count: u32,
    /// Helicopters spawned per game
    pub helicopter_count: usize,
    pub drone_speed: f32,
    pub helicopter_speed: f32,
    pub drone_radius: f32,
    pub helicopter_radius: f32,
    /// Launch base
    pub base: Circle,
    /// Defended city centre
    pub city: Circle,
    /// RNG seed for spawn points (None = from entropy)
    pub seed: Option<u64>,
}

impl Default for AirDefenseConfig {
    fn default() -> Self {
        Self {
            drone_count: 7,
            helicopter_count: 5,
            drone_speed: 0.6,
            helicopter_speed: 0.2,
            drone_radius: 0.03,
            helicopter_radius: 0.03,
            base: Circle::new(Vec2::new(0.0, -0.45), 0.07),
            city: Circle::new(Vec2::new(0.42, 0.08), 0.017),
            seed: None,
        }
    }
}

impl AirDefenseConfig {
    /// Builder: fix the spawn seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
