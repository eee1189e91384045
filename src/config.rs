//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SKY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use skyguard_core::{AirDefenseConfig, LightingModel};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Which demo to run
    #[serde(default)]
    pub demo: DemoConfig,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Lighting demo camera lens
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Air-defense rules
    #[serde(default)]
    pub game: AirDefenseConfig,
    /// Lighting demo scene and model
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SKY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SKY_WINDOW__WIDTH=1200 -> window.width = 1200
        figment = figment.merge(Env::prefixed("SKY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Game rules with the demo seed applied
    pub fn air_defense(&self) -> AirDefenseConfig {
        let mut game = self.game.clone();
        if let Some(seed) = self.demo.seed {
            game.seed = Some(seed);
        }
        game
    }

    /// Window title, falling back to the demo's own
    pub fn window_title(&self) -> String {
        self.window
            .title
            .clone()
            .unwrap_or_else(|| self.demo.kind.default_title().to_string())
    }
}

/// The two demos sharing this binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    #[default]
    AirDefense,
    Lighting,
}

impl DemoKind {
    pub fn default_title(self) -> &'static str {
        match self {
            DemoKind::AirDefense => "Protiv-vazdusna odbrana Novog Sada",
            DemoKind::Lighting => "Phong",
        }
    }
}

impl FromStr for DemoKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "air-defense" => Ok(DemoKind::AirDefense),
            "lighting" => Ok(DemoKind::Lighting),
            other => Err(ConfigError::new(format!(
                "unknown demo '{}' (expected air-defense or lighting)",
                other
            ))),
        }
    }
}

/// Demo selection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub kind: DemoKind,
    /// Fixed spawn seed for the air-defense game
    pub seed: Option<u64>,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title (defaults to the demo's title)
    pub title: Option<String>,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 900,
            height: 900,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Camera movement speed (units per second)
    pub move_speed: f32,
    /// Camera look speed (degrees per second)
    pub look_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: 8.0,
            look_speed: 64.0,
        }
    }
}

/// Lighting demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// RON scene file
    pub scene: PathBuf,
    /// Model active at start
    pub model: LightingModel,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            scene: PathBuf::from("scenes/lighting_lab.ron"),
            model: LightingModel::default(),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Frame rate the loop sleeps towards
    pub target_fps: f32,
    /// Upper bound on a single frame's dt in seconds
    pub max_frame_time: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            target_fps: 60.0,
            max_frame_time: 0.25,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 900);
        assert_eq!(config.demo.kind, DemoKind::AirDefense);
        assert_eq!(config.game.drone_count, 7);
        assert_eq!(config.lighting.model, LightingModel::PhongMaterialTexture);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[window]"));
        assert!(toml.contains("drone_speed"));
        assert!(toml.contains("kind = \"air-defense\""));
    }

    #[test]
    fn test_demo_kind_from_str() {
        assert_eq!("lighting".parse::<DemoKind>().unwrap(), DemoKind::Lighting);
        assert_eq!("air-defense".parse::<DemoKind>().unwrap(), DemoKind::AirDefense);
        let err = "pong".parse::<DemoKind>().unwrap_err();
        assert!(err.to_string().contains("pong"));
    }

    #[test]
    fn test_demo_seed_overrides_game_seed() {
        let mut config = AppConfig::default();
        config.game.seed = Some(1);
        assert_eq!(config.air_defense().seed, Some(1));
        config.demo.seed = Some(9);
        assert_eq!(config.air_defense().seed, Some(9));
    }

    #[test]
    fn test_window_title_follows_demo() {
        let mut config = AppConfig::default();
        assert_eq!(config.window_title(), "Protiv-vazdusna odbrana Novog Sada");
        config.demo.kind = DemoKind::Lighting;
        assert_eq!(config.window_title(), "Phong");
        config.window.title = Some("Custom".into());
        assert_eq!(config.window_title(), "Custom");
    }
}
