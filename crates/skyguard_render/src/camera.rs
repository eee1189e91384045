//! First-person camera for the lighting demo
//!
//! The camera has a 3D position and Euler yaw/pitch angles in degrees.
//! It walks: every local move pins the eye back to a fixed height, so
//! looking up and pressing W does not lift it off the floor.

use skyguard_core::lighting::CameraSpawn;
use skyguard_input::CameraControl;
use skyguard_math::{mat4, Mat4, Vec3};

/// Pitch limit in degrees, short of straight up/down where `right` degenerates
pub const PITCH_LIMIT: f32 = 89.0;

const WORLD_UP: Vec3 = Vec3::Y;

/// Yaw/pitch camera
#[derive(Clone, Debug, PartialEq)]
pub struct FreeCamera {
    pub position: Vec3,
    /// Degrees; -90 looks down -Z
    yaw: f32,
    /// Degrees, always within ±[`PITCH_LIMIT`]
    pitch: f32,
    /// Units per second
    pub move_speed: f32,
    /// Degrees per second
    pub look_speed: f32,
    pub eye_height: f32,
}

impl Default for FreeCamera {
    fn default() -> Self {
        Self::from_spawn(&CameraSpawn::default())
    }
}

impl FreeCamera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            move_speed: 8.0,
            look_speed: 64.0,
            eye_height: 2.0,
        }
    }

    /// Place the camera at a scene's spawn, already standing at eye height
    pub fn from_spawn(spawn: &CameraSpawn) -> Self {
        let mut camera = Self::new(spawn.position.into(), spawn.yaw, spawn.pitch);
        camera.eye_height = spawn.eye_height;
        camera.position.y = spawn.eye_height;
        camera
    }

    /// Builder: override move and look speeds
    pub fn with_speeds(mut self, move_speed: f32, look_speed: f32) -> Self {
        self.move_speed = move_speed;
        self.look_speed = look_speed;
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit view direction
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalized()
    }

    pub fn right(&self) -> Vec3 {
        self.front().cross(WORLD_UP).normalized()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front()).normalized()
    }

    /// Point one unit ahead of the eye
    pub fn target(&self) -> Vec3 {
        self.position + self.front()
    }

    /// Turn by `dx`/`dy` input scaled by look speed
    pub fn rotate(&mut self, dx: f32, dy: f32, dt: f32) {
        self.yaw += dx * self.look_speed * dt;
        self.pitch = (self.pitch + dy * self.look_speed * dt).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Strafe by `dx` and walk by `dy`, then drop back to eye height
    pub fn move_local(&mut self, dx: f32, dy: f32, dt: f32) {
        let step = self.move_speed * dt;
        self.position += self.right() * (dx * step) + self.front() * (dy * step);
        self.position.y = self.eye_height;
    }

    /// Right-handed look-at view matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at_rh(self.position, self.target(), WORLD_UP)
    }
}

impl CameraControl for FreeCamera {
    fn move_local(&mut self, right: f32, forward: f32, dt: f32) {
        FreeCamera::move_local(self, right, forward, dt);
    }

    fn rotate(&mut self, yaw: f32, pitch: f32, dt: f32) {
        FreeCamera::rotate(self, yaw, pitch, dt);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
