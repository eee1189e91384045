//! Renderable geometry builders
//!
//! Converts simulation state into per-frame vertex lists. Board circles
//! are translated on the CPU and flattened into a single triangle list;
//! lighting cuboids are expanded into world-space triangles.

use skyguard_core::air_defense::hud;
use skyguard_core::lighting::{CuboidFaces, CuboidInstance};
use skyguard_core::{AirDefense, LightingDemo};
use skyguard_math::{
    circle_fan, fan_to_triangles, mat4, unit_cube, CubeFace, Mat4, MeshVertex, Vec2, Vec3,
    CIRCLE_RESOLUTION,
};

use crate::pipeline::{FlatVertex, LitVertex};

/// Background behind the board
pub const BOARD_CLEAR_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Board camera pose and lens
pub const BOARD_EYE: Vec3 = Vec3::new(0.0, 1.0, -1.2);
pub const BOARD_FOV_DEGREES: f32 = 90.0;
pub const BOARD_NEAR: f32 = 0.1;
pub const BOARD_FAR: f32 = 100.0;

/// Map texture stand-in covering the whole board
const MAP_CHECKER: CheckerboardGeometry =
    CheckerboardGeometry::new([0.58, 0.66, 0.52], [0.5, 0.58, 0.45], 0.125);

/// Projection * view * model for the board
///
/// The model matrix mirrors X so board +x reads to the right from an eye
/// behind the board looking towards +Z.
pub fn board_view_projection(aspect: f32) -> Mat4 {
    let projection = mat4::perspective_rh(BOARD_FOV_DEGREES.to_radians(), aspect, BOARD_NEAR, BOARD_FAR);
    let view = mat4::look_at_rh(BOARD_EYE, Vec3::ZERO, Vec3::Y);
    mat4::mul(projection, mat4::mul(view, mat4::mirror_x()))
}

/// Lift a board point onto the XZ plane
fn board_point(p: Vec2) -> [f32; 3] {
    [p.x, 0.0, p.y]
}

/// Triangle list for one frame of the air-defense board
#[derive(Clone, Debug, Default)]
pub struct AirDefenseGeometry {
    pub vertices: Vec<FlatVertex>,
}

impl AirDefenseGeometry {
    /// Draw order: map, base, drone icons, LED, city, drone, helicopters
    pub fn build(game: &AirDefense) -> Self {
        let mut geometry = Self::default();

        if game.map_visible() {
            geometry.vertices.extend(MAP_CHECKER.quads(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)));
        }

        let base = game.base();
        geometry.add_circle(base.center, base.radius, hud::BASE_COLOR);

        for center in hud::drone_icon_centers(game.drones_left()) {
            geometry.add_circle(center, hud::DRONE_ICON_RADIUS, hud::DRONE_ICON_COLOR);
        }

        geometry.add_circle(hud::LED_CENTER, hud::LED_BACKGROUND_RADIUS, hud::LED_BACKGROUND_COLOR);
        geometry.add_circle(
            hud::LED_CENTER,
            hud::LED_BULB_RADIUS,
            hud::led_color(game.helicopters_remaining()),
        );

        let city = game.city();
        geometry.add_circle(city.center, city.radius, hud::CITY_COLOR);

        let drone = game.drone();
        if drone.is_airborne() {
            geometry.add_circle(drone.position, drone.radius, hud::DRONE_COLOR);
        }

        for (_, helicopter) in game.helicopters() {
            let color = helicopter.color(city.center, game.elapsed());
            geometry.add_circle(helicopter.position, helicopter.radius, color);
        }

        geometry
    }

    /// Append a filled circle
    pub fn add_circle(&mut self, center: Vec2, radius: f32, color: [f32; 3]) {
        let fan = circle_fan(radius, center, CIRCLE_RESOLUTION);
        self.vertices.extend(
            fan_to_triangles(&fan)
                .into_iter()
                .map(|v| FlatVertex::new(v.to_array(), color)),
        );
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Triangle list for one frame of the lighting scene
#[derive(Clone, Debug, Default)]
pub struct LightingGeometry {
    pub vertices: Vec<LitVertex>,
}

impl LightingGeometry {
    pub fn build(demo: &LightingDemo) -> Self {
        let cube = unit_cube();
        let top = CubeFace::Top.vertices();

        let mut geometry = Self::default();
        for instance in demo.instances() {
            let mesh: &[MeshVertex] = match instance.faces {
                CuboidFaces::All => &cube,
                CuboidFaces::Top => &top,
            };
            geometry.add_cuboid(&instance, mesh);
        }
        geometry
    }

    /// Append `mesh` scaled and translated by `instance`
    ///
    /// Scales are axis-aligned, so cube normals keep their direction.
    fn add_cuboid(&mut self, instance: &CuboidInstance, mesh: &[MeshVertex]) {
        let translation = Vec3::from(instance.translation);
        let scale = Vec3::from(instance.scale);
        let emissive = if instance.emissive { 1.0 } else { 0.0 };

        self.vertices.extend(mesh.iter().map(|v| LitVertex {
            position: (translation + v.position.component_mul(scale)).to_array(),
            normal: v.normal.to_array(),
            uv: v.uv,
            color: instance.color,
            emissive,
        }));
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Procedural checkerboard used as the map backdrop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckerboardGeometry {
    /// Colors for the checkerboard pattern
    pub color_a: [f32; 3],
    pub color_b: [f32; 3],
    /// Size of each checker cell
    pub cell_size: f32,
}

impl CheckerboardGeometry {
    /// Create a new checkerboard with the given colors and cell size
    pub const fn new(color_a: [f32; 3], color_b: [f32; 3], cell_size: f32) -> Self {
        Self { color_a, color_b, cell_size }
    }

    /// Get the color for a board position
    pub fn color_for_position(&self, x: f32, y: f32) -> [f32; 3] {
        let cell_x = (x / self.cell_size).floor() as i32;
        let cell_y = (y / self.cell_size).floor() as i32;

        if (cell_x + cell_y).rem_euclid(2) == 0 {
            self.color_a
        } else {
            self.color_b
        }
    }

    /// One coloured quad (two triangles) per cell covering `min..max`
    pub fn quads(&self, min: Vec2, max: Vec2) -> Vec<FlatVertex> {
        if self.cell_size <= 0.0 || max.x <= min.x || max.y <= min.y {
            return Vec::new();
        }

        let cols = ((max.x - min.x) / self.cell_size).ceil() as usize;
        let rows = ((max.y - min.y) / self.cell_size).ceil() as usize;
        let mut vertices = Vec::with_capacity(cols * rows * 6);

        for row in 0..rows {
            for col in 0..cols {
                let x0 = min.x + col as f32 * self.cell_size;
                let y0 = min.y + row as f32 * self.cell_size;
                let x1 = (x0 + self.cell_size).min(max.x);
                let y1 = (y0 + self.cell_size).min(max.y);
                let color = self.color_for_position(
                    (x0 + x1) * 0.5,
                    (y0 + y1) * 0.5,
                );

                let corners = [
                    Vec2::new(x0, y0),
                    Vec2::new(x1, y0),
                    Vec2::new(x0, y1),
                    Vec2::new(x1, y0),
                    Vec2::new(x1, y1),
                    Vec2::new(x0, y1),
                ];
                vertices.extend(corners.iter().map(|c| FlatVertex::new(board_point(*c), color)));
            }
        }

        vertices
    }
}
