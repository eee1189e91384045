//! Arrow-key steering for the interceptor drone

use skyguard_math::Vec2;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks the held arrow keys
#[derive(Debug, Default)]
pub struct DroneController {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl DroneController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was consumed.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowUp => { self.up = pressed; true }
            KeyCode::ArrowDown => { self.down = pressed; true }
            KeyCode::ArrowLeft => { self.left = pressed; true }
            KeyCode::ArrowRight => { self.right = pressed; true }
            _ => false,
        }
    }

    /// Board-space thrust, each axis in -1.0..=1.0
    ///
    /// Axes are independent, so diagonals are faster than straight lines.
    pub fn thrust(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f32,
            (self.up as i32 - self.down as i32) as f32,
        )
    }

    /// Release every held key
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_keys_no_thrust() {
        assert_eq!(DroneController::new().thrust(), Vec2::ZERO);
    }

    #[test]
    fn test_diagonal_thrust() {
        let mut controller = DroneController::new();
        controller.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        assert_eq!(controller.thrust(), Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_release_and_clear() {
        let mut controller = DroneController::new();
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowDown, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Released);
        assert_eq!(controller.thrust(), Vec2::new(0.0, -1.0));

        controller.clear();
        assert_eq!(controller.thrust(), Vec2::ZERO);
    }

    #[test]
    fn test_wasd_not_consumed() {
        let mut controller = DroneController::new();
        assert!(!controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
    }
}
