//! Camera controller for first-person keyboard navigation
//!
//! Controls:
//! - W/S: Forward/backward
//! - A/D: Left/right strafe
//! - Arrow keys: Look around (yaw/pitch)

use skyguard_math::Vec3;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Camera controller for handling input
#[derive(Debug, Default)]
pub struct CameraController {
    // Movement state
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,

    // Look state
    look_left: bool,
    look_right: bool,
    look_up: bool,
    look_down: bool,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was consumed.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.left = pressed; true }
            KeyCode::KeyD => { self.right = pressed; true }
            KeyCode::ArrowLeft => { self.look_left = pressed; true }
            KeyCode::ArrowRight => { self.look_right = pressed; true }
            KeyCode::ArrowUp => { self.look_up = pressed; true }
            KeyCode::ArrowDown => { self.look_down = pressed; true }
            _ => false,
        }
    }

    /// Update the camera based on held keys
    ///
    /// Returns the camera position for debug display.
    pub fn update<C: CameraControl>(&self, camera: &mut C, dt: f32) -> Vec3 {
        let (forward, right) = self.movement_input();
        let (yaw, pitch) = self.look_input();

        if right != 0.0 || forward != 0.0 {
            camera.move_local(right, forward, dt);
        }
        if yaw != 0.0 || pitch != 0.0 {
            camera.rotate(yaw, pitch, dt);
        }

        camera.position()
    }

    /// Get raw movement input
    ///
    /// Returns (forward, right) input values in range -1.0 to 1.0.
    pub fn movement_input(&self) -> (f32, f32) {
        let forward = (self.forward as i32 - self.backward as i32) as f32;
        let right = (self.right as i32 - self.left as i32) as f32;
        (forward, right)
    }

    /// Get raw look input
    ///
    /// Returns (yaw, pitch) input values in range -1.0 to 1.0.
    pub fn look_input(&self) -> (f32, f32) {
        let yaw = (self.look_right as i32 - self.look_left as i32) as f32;
        let pitch = (self.look_up as i32 - self.look_down as i32) as f32;
        (yaw, pitch)
    }

    /// Check if any movement keys are pressed
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Release every held key (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Move along the camera's right and front vectors, scaled by its speed
    fn move_local(&mut self, right: f32, forward: f32, dt: f32);
    /// Turn by yaw/pitch input, scaled by the camera's look speed
    fn rotate(&mut self, yaw: f32, pitch: f32, dt: f32);
    fn position(&self) -> Vec3;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the calls the controller makes
    #[derive(Default)]
    struct MockCamera {
        position: Vec3,
        moves: Vec<(f32, f32, f32)>,
        rotations: Vec<(f32, f32, f32)>,
    }

    impl CameraControl for MockCamera {
        fn move_local(&mut self, right: f32, forward: f32, dt: f32) {
            self.moves.push((right, forward, dt));
            self.position += Vec3::new(right, 0.0, -forward);
        }

        fn rotate(&mut self, yaw: f32, pitch: f32, dt: f32) {
            self.rotations.push((yaw, pitch, dt));
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    #[test]
    fn test_idle_controller_leaves_camera_alone() {
        let controller = CameraController::new();
        let mut camera = MockCamera::default();
        controller.update(&mut camera, 0.016);
        assert!(camera.moves.is_empty());
        assert!(camera.rotations.is_empty());
    }

    #[test]
    fn test_wasd_drives_move_local() {
        let mut controller = CameraController::new();
        assert!(controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
        assert!(controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed));
        assert!(controller.is_moving());

        let mut camera = MockCamera::default();
        let pos = controller.update(&mut camera, 0.5);
        assert_eq!(camera.moves, vec![(1.0, 1.0, 0.5)]);
        assert_eq!(pos, Vec3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        assert_eq!(controller.movement_input(), (0.0, 0.0));
    }

    #[test]
    fn test_arrows_drive_rotate() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);

        let mut camera = MockCamera::default();
        controller.update(&mut camera, 0.1);
        assert_eq!(camera.rotations, vec![(-1.0, 1.0, 0.1)]);
    }

    #[test]
    fn test_release_stops_motion() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyS, ElementState::Released);
        assert!(!controller.is_moving());
    }

    #[test]
    fn test_unrelated_key_not_consumed() {
        let mut controller = CameraController::new();
        assert!(!controller.process_keyboard(KeyCode::Space, ElementState::Pressed));
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowDown, ElementState::Pressed);
        controller.clear();
        assert_eq!(controller.movement_input(), (0.0, 0.0));
        assert_eq!(controller.look_input(), (0.0, 0.0));
    }
}
