//! Seek steering on the 2D board

use skyguard_math::Vec2;

/// Advance `position` by `step` along the unit direction towards `target`
///
/// A mover already at the target stays put, and a step longer than the
/// remaining distance lands exactly on the target.
pub fn steer_towards(position: Vec2, target: Vec2, step: f32) -> Vec2 {
    let delta = target - position;
    let distance = delta.length();

    if distance <= f32::EPSILON {
        return position;
    }
    if step >= distance {
        return target;
    }

    position + delta * (step / distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY: Vec2 = Vec2::new(0.42, 0.08);

    #[test]
    fn test_steer_moves_by_step() {
        let next = steer_towards(Vec2::new(-1.0, 0.08), CITY, 0.1);
        assert!((next.x - (-0.9)).abs() < 1e-6);
        assert!((next.y - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_steer_at_target_is_fixed_point() {
        assert_eq!(steer_towards(CITY, CITY, 0.5), CITY);
    }

    #[test]
    fn test_steer_does_not_overshoot() {
        let start = Vec2::new(0.40, 0.08);
        assert_eq!(steer_towards(start, CITY, 1.0), CITY);
    }

    #[test]
    fn test_steer_distance_is_monotonic() {
        let mut pos = Vec2::new(1.0, 0.73);
        let mut last = pos.distance(CITY);
        for _ in 0..500 {
            pos = steer_towards(pos, CITY, 0.004);
            let d = pos.distance(CITY);
            assert!(d <= last);
            last = d;
        }
        assert_eq!(pos, CITY);
    }

    #[test]
    fn test_steer_zero_step() {
        let start = Vec2::new(0.0, -1.0);
        assert_eq!(steer_towards(start, CITY, 0.0), start);
    }
}
