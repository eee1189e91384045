//! Collision shapes for the 2D board
//!
//! These are lightweight primitives used for collision detection,
//! separate from the renderable circle fans in skyguard_math.

use serde::{Deserialize, Serialize};
use skyguard_math::Vec2;

/// A circle defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle at the given center with the given radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if a point is inside or on the circle
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }
}

/// An axis-aligned rectangle on the board
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2D {
    /// Create bounds from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// The visible screen in normalized device coordinates
    pub fn screen() -> Self {
        Self::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0))
    }

    /// Check if a point is inside or on the bounds
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True when any coordinate lies strictly outside the bounds
    pub fn is_outside(&self, point: Vec2) -> bool {
        !self.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_contains() {
        let c = Circle::new(Vec2::new(0.0, -0.45), 0.07);
        assert!(c.contains(Vec2::new(0.0, -0.45)));
        assert!(c.contains(Vec2::new(0.05, -0.45)));
        assert!(!c.contains(Vec2::new(0.0, -0.3)));
    }

    #[test]
    fn test_screen_bounds_edges_are_inside() {
        let screen = Bounds2D::screen();
        assert!(screen.contains(Vec2::new(1.0, -1.0)));
        assert!(screen.contains(Vec2::ZERO));
        assert!(!screen.is_outside(Vec2::new(-1.0, 1.0)));
    }

    #[test]
    fn test_screen_bounds_outside() {
        let screen = Bounds2D::screen();
        assert!(screen.is_outside(Vec2::new(1.001, 0.0)));
        assert!(screen.is_outside(Vec2::new(0.0, -1.2)));
    }
}
