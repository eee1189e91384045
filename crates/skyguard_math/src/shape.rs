//! Procedural shapes
//!
//! Flat circles for the air-defense board and a unit cube for the
//! lighting scene. Shapes are pure geometry: no colors or materials.

use crate::{Vec2, Vec3};

/// Default number of rim segments for board circles
pub const CIRCLE_RESOLUTION: usize = 30;

/// Tessellate a circle as a triangle fan in the XZ plane (y = 0)
///
/// The board's 2D `y` axis maps to world `z`. The first vertex is the
/// center, followed by `resolution + 1` rim vertices; the last rim vertex
/// repeats the first so the fan closes. Returns `resolution + 2` vertices
/// for every `resolution`; below 3 the fan is degenerate and covers no area.
pub fn circle_fan(radius: f32, center: Vec2, resolution: usize) -> Vec<Vec3> {
    let segments = resolution.max(1) as f32;
    let mut fan = Vec::with_capacity(resolution + 2);
    fan.push(Vec3::new(center.x, 0.0, center.y));

    for i in 0..=resolution {
        let angle = std::f32::consts::TAU * i as f32 / segments;
        fan.push(Vec3::new(
            center.x + radius * angle.cos(),
            0.0,
            center.y + radius * angle.sin(),
        ));
    }

    fan
}

/// Expand a triangle fan into a triangle list
///
/// wgpu has no fan topology, so `[c, a, b, c', ...]` becomes
/// `[c, a, b, c, b, c', ...]`. Fans with fewer than 3 vertices yield nothing.
pub fn fan_to_triangles(fan: &[Vec3]) -> Vec<Vec3> {
    if fan.len() < 3 {
        return Vec::new();
    }

    let center = fan[0];
    fan[1..]
        .windows(2)
        .flat_map(|rim| [center, rim[0], rim[1]])
        .collect()
}

/// A vertex of a lit mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: [f32; 2],
}

/// Faces of the unit cube, in vertex-buffer order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CubeFace {
    Front,
    Left,
    Right,
    Bottom,
    Top,
    Back,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Front,
        CubeFace::Left,
        CubeFace::Right,
        CubeFace::Bottom,
        CubeFace::Top,
        CubeFace::Back,
    ];

    /// Outward normal, plus the (u, v) tangent axes with `u × v = normal`
    fn basis(self) -> (Vec3, Vec3, Vec3) {
        match self {
            CubeFace::Front => (Vec3::Z, Vec3::X, Vec3::Y),
            CubeFace::Left => (-Vec3::X, Vec3::Z, Vec3::Y),
            CubeFace::Right => (Vec3::X, -Vec3::Z, Vec3::Y),
            CubeFace::Bottom => (-Vec3::Y, Vec3::X, Vec3::Z),
            CubeFace::Top => (Vec3::Y, Vec3::X, -Vec3::Z),
            CubeFace::Back => (-Vec3::Z, -Vec3::X, Vec3::Y),
        }
    }

    /// The six vertices (two counter-clockwise triangles) of this face
    pub fn vertices(self) -> [MeshVertex; 6] {
        let (n, u, v) = self.basis();
        let corner = |su: f32, sv: f32, uv: [f32; 2]| MeshVertex {
            position: n * 0.5 + u * (0.5 * su) + v * (0.5 * sv),
            normal: n,
            uv,
        };

        let ld = corner(-1.0, -1.0, [0.0, 0.0]);
        let rd = corner(1.0, -1.0, [1.0, 0.0]);
        let lu = corner(-1.0, 1.0, [0.0, 1.0]);
        let ru = corner(1.0, 1.0, [1.0, 1.0]);

        [ld, rd, lu, rd, ru, lu]
    }
}

/// Unit cube centered at the origin (side length 1), 36 vertices
pub fn unit_cube() -> Vec<MeshVertex> {
    CubeFace::ALL.iter().flat_map(|face| face.vertices()).collect()
}
