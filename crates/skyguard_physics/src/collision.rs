//! Collision detection for board circles
//!
//! Everything on the board is a circle, so detection reduces to a
//! center-distance check. Also provides collision filtering via layer masks.

use bitflags::bitflags;

use crate::shapes::Circle;

bitflags! {
    /// Collision layers for filtering which objects can collide
    ///
    /// Each layer is a bit in a 32-bit mask. Objects can belong to multiple layers
    /// and can define which layers they collide with via a collision mask.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CollisionLayer: u32 {
        /// Player-controlled interceptor
        const DRONE = 1 << 0;
        /// Incoming helicopters
        const HELICOPTER = 1 << 1;
        /// The defended city centre
        const CITY = 1 << 2;
        /// All layers (collide with everything)
        const ALL = 0xFFFFFFFF;
    }
}

/// Collision filter determining what an object collides with
///
/// Two objects A and B collide if:
/// - (A.layer & B.mask) != 0, AND
/// - (B.layer & A.mask) != 0
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollisionFilter {
    /// Which layer(s) this object belongs to
    pub layer: CollisionLayer,
    /// Which layer(s) this object can collide with
    pub mask: CollisionLayer,
}

impl Default for CollisionFilter {
    fn default() -> Self {
        Self {
            layer: CollisionLayer::empty(),
            mask: CollisionLayer::ALL,
        }
    }
}

impl CollisionFilter {
    /// Create a new collision filter with specified layer and mask
    pub fn new(layer: CollisionLayer, mask: CollisionLayer) -> Self {
        Self { layer, mask }
    }

    /// Check if this filter allows collision with another filter
    pub fn collides_with(&self, other: &Self) -> bool {
        self.layer.intersects(other.mask) && other.layer.intersects(self.mask)
    }

    /// Drones only hit helicopters
    pub fn drone() -> Self {
        Self::new(CollisionLayer::DRONE, CollisionLayer::HELICOPTER)
    }

    /// Helicopters are hit by drones and breach the city
    pub fn helicopter() -> Self {
        Self::new(
            CollisionLayer::HELICOPTER,
            CollisionLayer::DRONE | CollisionLayer::CITY,
        )
    }

    /// The city only reacts to helicopters
    pub fn city() -> Self {
        Self::new(CollisionLayer::CITY, CollisionLayer::HELICOPTER)
    }
}

/// True iff the center distance is strictly less than the sum of radii
///
/// Touching circles do not collide.
pub fn circles_collide(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_math::Vec2;

    #[test]
    fn test_circles_collide_overlapping() {
        let drone = Circle::new(Vec2::new(0.0, 0.0), 0.03);
        let heli = Circle::new(Vec2::new(0.05, 0.0), 0.03);
        assert!(circles_collide(&drone, &heli));
    }

    #[test]
    fn test_circles_collide_touching_is_not_a_hit() {
        let a = Circle::new(Vec2::new(0.0, 0.0), 0.5);
        let b = Circle::new(Vec2::new(1.0, 0.0), 0.5);
        assert!(!circles_collide(&a, &b));
    }

    #[test]
    fn test_circles_collide_is_symmetric() {
        let cases = [
            (Circle::new(Vec2::new(0.1, 0.2), 0.03), Circle::new(Vec2::new(0.14, 0.2), 0.03)),
            (Circle::new(Vec2::new(-0.9, 0.5), 0.03), Circle::new(Vec2::new(0.42, 0.08), 0.017)),
            (Circle::new(Vec2::ZERO, 0.2), Circle::new(Vec2::new(0.0, 0.25), 0.1)),
        ];
        for (a, b) in cases {
            assert_eq!(circles_collide(&a, &b), circles_collide(&b, &a));
        }
    }

    #[test]
    fn test_collision_filter_drone_vs_helicopter() {
        let drone = CollisionFilter::drone();
        let heli = CollisionFilter::helicopter();
        assert!(drone.collides_with(&heli));
        assert!(heli.collides_with(&drone));
    }

    #[test]
    fn test_collision_filter_helicopter_vs_city() {
        assert!(CollisionFilter::helicopter().collides_with(&CollisionFilter::city()));
    }

    #[test]
    fn test_collision_filter_drone_ignores_city() {
        let drone = CollisionFilter::drone();
        assert!(!drone.collides_with(&CollisionFilter::city()));
        assert!(!CollisionFilter::city().collides_with(&drone));
    }

    #[test]
    fn test_empty_layer_collides_with_nothing() {
        let scenery = CollisionFilter::default();
        for filter in [CollisionFilter::drone(), CollisionFilter::helicopter(), CollisionFilter::city()] {
            assert!(!scenery.collides_with(&filter));
        }
    }

    #[test]
    fn test_collision_filter_helicopters_pass_through_each_other() {
        let heli = CollisionFilter::helicopter();
        assert!(!heli.collides_with(&heli));
    }

    #[test]
    fn test_collision_layer_bitflags() {
        let combined = CollisionLayer::DRONE | CollisionLayer::CITY;
        assert!(combined.contains(CollisionLayer::DRONE));
        assert!(!combined.contains(CollisionLayer::HELICOPTER));
        assert!(CollisionLayer::ALL.contains(combined));
    }
}
