//! Input mapping from raw events to semantic actions
//!
//! Maps key presses to one-shot actions like Launch, Restart, Exit.
//! Held keys (arrows, WASD) are NOT mapped here - they go directly to the
//! demo's controller.

use skyguard_core::LightingModel;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::config::DemoKind;

/// One-shot actions triggered by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Restart the game, or reset the camera in the lighting demo (R key)
    Reset,
    /// Launch or recall the drone (Space)
    ToggleLaunch,
    /// Detonate the airborne drone (X)
    Detonate,
    /// Hide (1) or show (2) the map
    ShowMap(bool),
    /// Switch lighting model (1-4)
    SelectModel(LightingModel),
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Only fresh presses map: releases and auto-repeat return `None`, so
    /// every action is edge-triggered.
    pub fn map_keyboard(
        demo: DemoKind,
        key: KeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputAction> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        match key {
            KeyCode::Escape => return Some(InputAction::Exit),
            KeyCode::KeyF => return Some(InputAction::ToggleFullscreen),
            KeyCode::KeyR => return Some(InputAction::Reset),
            _ => {}
        }

        match demo {
            DemoKind::AirDefense => match key {
                KeyCode::Space => Some(InputAction::ToggleLaunch),
                KeyCode::KeyX => Some(InputAction::Detonate),
                KeyCode::Digit1 => Some(InputAction::ShowMap(false)),
                KeyCode::Digit2 => Some(InputAction::ShowMap(true)),
                _ => None,
            },
            DemoKind::Lighting => number_key(key)
                .and_then(LightingModel::from_number_key)
                .map(InputAction::SelectModel),
        }
    }
}

fn number_key(key: KeyCode) -> Option<u8> {
    match key {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(1),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(2),
        KeyCode::Digit3 | KeyCode::Numpad3 => Some(3),
        KeyCode::Digit4 | KeyCode::Numpad4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(demo: DemoKind, key: KeyCode) -> Option<InputAction> {
        InputMapper::map_keyboard(demo, key, ElementState::Pressed, false)
    }

    #[test]
    fn test_common_keys() {
        for demo in [DemoKind::AirDefense, DemoKind::Lighting] {
            assert_eq!(press(demo, KeyCode::Escape), Some(InputAction::Exit));
            assert_eq!(press(demo, KeyCode::KeyF), Some(InputAction::ToggleFullscreen));
            assert_eq!(press(demo, KeyCode::KeyR), Some(InputAction::Reset));
        }
    }

    #[test]
    fn test_air_defense_keys() {
        let demo = DemoKind::AirDefense;
        assert_eq!(press(demo, KeyCode::Space), Some(InputAction::ToggleLaunch));
        assert_eq!(press(demo, KeyCode::KeyX), Some(InputAction::Detonate));
        assert_eq!(press(demo, KeyCode::Digit1), Some(InputAction::ShowMap(false)));
        assert_eq!(press(demo, KeyCode::Digit2), Some(InputAction::ShowMap(true)));
        assert_eq!(press(demo, KeyCode::Digit3), None);
    }

    #[test]
    fn test_lighting_model_keys() {
        let demo = DemoKind::Lighting;
        assert_eq!(
            press(demo, KeyCode::Digit1),
            Some(InputAction::SelectModel(LightingModel::Gouraud))
        );
        assert_eq!(
            press(demo, KeyCode::Numpad4),
            Some(InputAction::SelectModel(LightingModel::PhongMaterialTexture))
        );
        assert_eq!(press(demo, KeyCode::Space), None);
        assert_eq!(press(demo, KeyCode::KeyX), None);
    }

    #[test]
    fn test_held_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::ArrowUp, KeyCode::ArrowLeft] {
            assert_eq!(press(DemoKind::Lighting, key), None, "Key {:?} should not be mapped", key);
            assert_eq!(press(DemoKind::AirDefense, key), None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_release_and_repeat_ignored() {
        let demo = DemoKind::AirDefense;
        assert_eq!(
            InputMapper::map_keyboard(demo, KeyCode::Space, ElementState::Released, false),
            None
        );
        assert_eq!(
            InputMapper::map_keyboard(demo, KeyCode::Space, ElementState::Pressed, true),
            None
        );
    }
}
