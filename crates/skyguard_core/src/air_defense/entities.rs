//! Drone and helicopter entities

use slotmap::new_key_type;

use skyguard_math::Vec2;
use skyguard_physics::{Circle, CollisionFilter};

new_key_type! {
    /// Key to a helicopter in the fleet
    ///
    /// Destroyed helicopters are removed from the slot map, so a stale key
    /// simply fails to resolve.
    pub struct HelicopterKey;
}

/// Whether the drone is sitting on the base or under player control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DroneState {
    Docked,
    Airborne,
}

/// The player's interceptor
#[derive(Clone, Debug)]
pub struct Drone {
    pub position: Vec2,
    pub radius: f32,
    pub state: DroneState,
    pub filter: CollisionFilter,
}

impl Drone {
    /// A drone docked at `base`
    pub fn docked(base: Vec2, radius: f32) -> Self {
        Self {
            position: base,
            radius,
            state: DroneState::Docked,
            filter: CollisionFilter::drone(),
        }
    }

    pub fn is_airborne(&self) -> bool {
        self.state == DroneState::Airborne
    }

    /// Take off from `base`
    pub fn launch(&mut self, base: Vec2) {
        self.position = base;
        self.state = DroneState::Airborne;
    }

    /// Return to `base`
    pub fn dock(&mut self, base: Vec2) {
        self.position = base;
        self.state = DroneState::Docked;
    }

    pub fn collider(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }
}

/// An incoming helicopter
#[derive(Clone, Debug)]
pub struct Helicopter {
    pub position: Vec2,
    pub radius: f32,
    pub filter: CollisionFilter,
}

impl Helicopter {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            radius,
            filter: CollisionFilter::helicopter(),
        }
    }

    pub fn collider(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    /// Warning colour for this helicopter, see [`pulse_color`]
    pub fn color(&self, city: Vec2, elapsed: f32) -> [f32; 3] {
        pulse_color(self.position.distance(city), elapsed)
    }
}

/// Red pulse that quickens as a helicopter closes on the city
///
/// `distance` is to the city centre, `elapsed` is seconds since the game
/// started. Red stays at 1 while green and blue dip together.
pub fn pulse_color(distance: f32, elapsed: f32) -> [f32; 3] {
    let pulse_speed = 5.0 + 10.0 * (1.0 - distance);
    let p = 0.5 + 0.5 * (elapsed * pulse_speed).sin();
    [1.0, 1.0 - p, 1.0 - p]
}
