//! The running demo and the input that drives it
//!
//! Owns the simulation state of whichever demo was selected, routes held
//! keys to its controller and one-shot actions to its commands, and steps
//! it once per frame.

use skyguard_core::{AirDefense, AirDefenseConfig, GameEvent, LightingDemo, LightingModel, LightingScene};
use skyguard_input::{CameraController, DroneController};
use skyguard_render::FreeCamera;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::config::{AppConfig, DemoKind, InputConfig};
use crate::input::InputAction;

/// Air-defense game plus its steering input
pub struct AirDefenseRun {
    pub game: AirDefense,
    controller: DroneController,
}

impl AirDefenseRun {
    pub fn new(config: AirDefenseConfig) -> Self {
        let game = AirDefense::new(config);
        log::info!(
            "Air defense: {} helicopters inbound, {} drones ready",
            game.helicopters_remaining(),
            game.drones_left()
        );
        Self {
            game,
            controller: DroneController::new(),
        }
    }

    fn apply(&mut self, action: InputAction) -> Vec<GameEvent> {
        match action {
            InputAction::ToggleLaunch => self.game.toggle_launch().into_iter().collect(),
            InputAction::Detonate => self.game.detonate(),
            InputAction::ShowMap(visible) => self.game.set_map_visible(visible).into_iter().collect(),
            InputAction::Reset => {
                self.game.restart();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        self.game.update(dt, self.controller.thrust())
    }

    fn status(&self) -> String {
        let phase = if self.game.phase().is_over() {
            format!(" [{:?} - R to restart]", self.game.phase())
        } else {
            String::new()
        };
        format!(
            "drones {} | helicopters {}{}",
            self.game.drones_left(),
            self.game.helicopters_remaining(),
            phase
        )
    }
}

/// Lighting scene plus the walking camera
pub struct LightingRun {
    pub demo: LightingDemo,
    pub camera: FreeCamera,
    controller: CameraController,
    input: InputConfig,
}

impl LightingRun {
    pub fn new(scene: LightingScene, model: LightingModel, input: InputConfig) -> Self {
        let camera = Self::spawn_camera(&scene, &input);
        Self {
            demo: LightingDemo::new(scene, model),
            camera,
            controller: CameraController::new(),
            input,
        }
    }

    fn spawn_camera(scene: &LightingScene, input: &InputConfig) -> FreeCamera {
        FreeCamera::from_spawn(&scene.camera).with_speeds(input.move_speed, input.look_speed)
    }

    fn apply(&mut self, action: InputAction) {
        match action {
            InputAction::SelectModel(model) => {
                self.demo.set_model(model);
            }
            InputAction::Reset => {
                self.camera = Self::spawn_camera(self.demo.scene(), &self.input);
                log::info!("Camera reset to starting position");
            }
            _ => {}
        }
    }

    fn update(&mut self, dt: f32) {
        self.controller.update(&mut self.camera, dt);
        self.demo.update(dt);
    }

    fn status(&self) -> String {
        let p = self.camera.position;
        format!(
            "{} | {} | ({:.1}, {:.1}, {:.1})",
            self.demo.scene().name,
            self.demo.model().label(),
            p.x,
            p.y,
            p.z
        )
    }
}

/// Whichever demo this process runs
pub enum ActiveDemo {
    AirDefense(AirDefenseRun),
    Lighting(LightingRun),
}

impl ActiveDemo {
    /// Build the configured demo; a lighting scene that fails to load falls back to the lab
    pub fn from_config(config: &AppConfig) -> Self {
        match config.demo.kind {
            DemoKind::AirDefense => ActiveDemo::AirDefense(AirDefenseRun::new(config.air_defense())),
            DemoKind::Lighting => {
                let scene = LightingScene::load_or_default(&config.lighting.scene);
                ActiveDemo::Lighting(LightingRun::new(
                    scene,
                    config.lighting.model,
                    config.input.clone(),
                ))
            }
        }
    }

    pub fn kind(&self) -> DemoKind {
        match self {
            ActiveDemo::AirDefense(_) => DemoKind::AirDefense,
            ActiveDemo::Lighting(_) => DemoKind::Lighting,
        }
    }

    /// Feed a held-key change to the demo's controller
    ///
    /// Returns true if the key was consumed.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match self {
            ActiveDemo::AirDefense(run) => run.controller.process_keyboard(key, state),
            ActiveDemo::Lighting(run) => run.controller.process_keyboard(key, state),
        }
    }

    /// Run a one-shot action, returning any game events it caused
    pub fn apply(&mut self, action: InputAction) -> Vec<GameEvent> {
        let events = match self {
            ActiveDemo::AirDefense(run) => run.apply(action),
            ActiveDemo::Lighting(run) => {
                run.apply(action);
                Vec::new()
            }
        };
        log_events(&events);
        events
    }

    /// Advance one frame
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let events = match self {
            ActiveDemo::AirDefense(run) => run.update(dt),
            ActiveDemo::Lighting(run) => {
                run.update(dt);
                Vec::new()
            }
        };
        log_events(&events);
        events
    }

    /// Release every held key (e.g. when the window loses focus)
    pub fn clear_input(&mut self) {
        match self {
            ActiveDemo::AirDefense(run) => run.controller.clear(),
            ActiveDemo::Lighting(run) => run.controller.clear(),
        }
    }

    /// Short state summary for the window title
    pub fn status(&self) -> String {
        match self {
            ActiveDemo::AirDefense(run) => run.status(),
            ActiveDemo::Lighting(run) => run.status(),
        }
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        log::info!("{}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::GamePhase;

    fn air_defense() -> ActiveDemo {
        let mut config = AppConfig::default();
        config.demo.seed = Some(3);
        ActiveDemo::from_config(&config)
    }

    fn lighting() -> ActiveDemo {
        ActiveDemo::Lighting(LightingRun::new(
            LightingScene::lab(),
            LightingModel::Phong,
            InputConfig::default(),
        ))
    }

    #[test]
    fn test_launch_and_detonate() {
        let mut demo = air_defense();
        assert_eq!(demo.apply(InputAction::ToggleLaunch), vec![GameEvent::DroneLaunched]);

        let events = demo.apply(InputAction::Detonate);
        assert!(matches!(events[0], GameEvent::DroneDetonated { .. }));
        let ActiveDemo::AirDefense(run) = &demo else {
            panic!("expected the air-defense demo");
        };
        assert_eq!(run.game.drones_left(), 6);
    }

    #[test]
    fn test_held_arrow_steers_drone() {
        let mut demo = air_defense();
        demo.apply(InputAction::ToggleLaunch);
        assert!(demo.process_keyboard(KeyCode::ArrowUp, ElementState::Pressed));
        demo.update(0.1);

        let ActiveDemo::AirDefense(run) = &demo else {
            panic!("expected the air-defense demo");
        };
        let start = run.game.base().center;
        assert!(run.game.drone().position.y > start.y);
    }

    #[test]
    fn test_clear_input_stops_drone() {
        let mut demo = air_defense();
        demo.apply(InputAction::ToggleLaunch);
        demo.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        demo.clear_input();
        demo.update(0.1);

        let ActiveDemo::AirDefense(run) = &demo else {
            panic!("expected the air-defense demo");
        };
        assert_eq!(run.game.drone().position, run.game.base().center);
    }

    #[test]
    fn test_reset_restarts_game() {
        let mut demo = air_defense();
        demo.apply(InputAction::ToggleLaunch);
        demo.apply(InputAction::Detonate);
        demo.apply(InputAction::Reset);

        let ActiveDemo::AirDefense(run) = &demo else {
            panic!("expected the air-defense demo");
        };
        assert_eq!(run.game.drones_left(), 7);
        assert_eq!(run.game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_lighting_model_switch_and_camera_reset() {
        let mut demo = lighting();
        demo.apply(InputAction::SelectModel(LightingModel::Gouraud));
        demo.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        demo.update(0.1);

        let ActiveDemo::Lighting(run) = &demo else {
            panic!("expected the lighting demo");
        };
        assert_eq!(run.demo.model(), LightingModel::Gouraud);
        assert!(run.camera.position.z < 2.0);

        demo.apply(InputAction::Reset);
        let ActiveDemo::Lighting(run) = &demo else {
            panic!("expected the lighting demo");
        };
        assert_eq!(run.camera.position.z, 2.0);
    }

    #[test]
    fn test_game_keys_do_nothing_in_lighting() {
        let mut demo = lighting();
        assert!(demo.apply(InputAction::ToggleLaunch).is_empty());
        assert_eq!(demo.kind(), DemoKind::Lighting);
    }

    #[test]
    fn test_status_text() {
        assert!(air_defense().status().starts_with("drones 7 | helicopters 5"));
        assert!(lighting().status().contains("Phong"));
    }
}
