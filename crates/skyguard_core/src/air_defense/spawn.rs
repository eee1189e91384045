//! Helicopter spawn points on the screen edge

use rand::Rng;

use skyguard_math::Vec2;

/// One of the four screen edges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenEdge {
    Right,
    Top,
    Left,
    Bottom,
}

impl ScreenEdge {
    pub const ALL: [ScreenEdge; 4] = [
        ScreenEdge::Right,
        ScreenEdge::Top,
        ScreenEdge::Left,
        ScreenEdge::Bottom,
    ];

    /// Point on this edge, `along` in [0, 1) on the free axis
    pub fn point(self, along: f32) -> Vec2 {
        match self {
            ScreenEdge::Right => Vec2::new(1.0, along),
            ScreenEdge::Top => Vec2::new(along, 1.0),
            ScreenEdge::Left => Vec2::new(-1.0, along),
            ScreenEdge::Bottom => Vec2::new(along, -1.0),
        }
    }
}

/// Random spawn point: a uniform edge, and a free coordinate `k / 100`
pub fn spawn_point<R: Rng>(rng: &mut R) -> Vec2 {
    let edge = ScreenEdge::ALL[rng.gen_range(0..ScreenEdge::ALL.len())];
    let along = rng.gen_range(0..100u32) as f32 / 100.0;
    edge.point(along)
}
