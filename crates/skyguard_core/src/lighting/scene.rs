//! Lighting scene description
//!
//! Scenes are loaded from RON files and describe everything the lighting
//! demo draws: cuboid objects, the three lights, the material, and the
//! animations that drive them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use super::lights::{DirectionalLight, Material, PointLight, SpotLight};
use super::oscillator::Oscillator;

/// A serializable lighting scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingScene {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Background color [r, g, b, a]
    pub clear_color: [f32; 4],
    /// Where the camera starts
    #[serde(default)]
    pub camera: CameraSpawn,
    pub directional: DirectionalLight,
    pub point: PointLight,
    pub spot: SpotLight,
    #[serde(default)]
    pub material: Material,
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub animations: Vec<Animation>,
}

/// Camera start pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSpawn {
    pub position: [f32; 3],
    /// Degrees; -90 looks down -Z
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    /// Height the walking camera is pinned to
    pub eye_height: f32,
}

impl Default for CameraSpawn {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 2.0],
            yaw: -90.0,
            pitch: 0.0,
            eye_height: 2.0,
        }
    }
}

/// Which faces of the cuboid are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuboidFaces {
    #[default]
    All,
    /// Only the +Y face (water surfaces)
    Top,
}

/// Square grid repetition of an object on the XZ plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Cell indices run `from..to` on both axes
    pub from: i32,
    pub to: i32,
    /// Distance between neighbouring cells
    pub spacing: f32,
}

/// A cuboid in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub translation: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 3],
    /// Drawn unlit in its base colour (light markers)
    #[serde(default)]
    pub emissive: bool,
    #[serde(default)]
    pub faces: CuboidFaces,
    #[serde(default)]
    pub grid: Option<Grid>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, translation: [f32; 3], scale: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            translation,
            scale,
            color,
            emissive: false,
            faces: CuboidFaces::All,
            grid: None,
        }
    }

    /// Builder: mark as an unlit light marker
    pub fn emissive(mut self) -> Self {
        self.emissive = true;
        self
    }

    /// Builder: draw only the top face
    pub fn top_only(mut self) -> Self {
        self.faces = CuboidFaces::Top;
        self
    }

    /// Builder: repeat on a grid
    pub fn with_grid(mut self, from: i32, to: i32, spacing: f32) -> Self {
        self.grid = Some(Grid { from, to, spacing });
        self
    }

    /// Every translation this object is drawn at
    pub fn placements(&self) -> Vec<[f32; 3]> {
        let [x, y, z] = self.translation;
        match &self.grid {
            None => vec![self.translation],
            Some(grid) => {
                let mut out = Vec::new();
                for i in grid.from..grid.to {
                    for j in grid.from..grid.to {
                        out.push([
                            x + i as f32 * grid.spacing,
                            y,
                            z + j as f32 * grid.spacing,
                        ]);
                    }
                }
                out
            }
        }
    }
}

/// What an animation drives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnimationTarget {
    /// Point light ambient and diffuse become `color * value`
    PointLightIntensity { color: [f32; 3] },
    /// Named object is raised by `value` on Y
    ObjectOffsetY { object: String },
}

/// An oscillator bound to a scene parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub oscillator: Oscillator,
    pub target: AnimationTarget,
}

impl LightingScene {
    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse and validate a scene from RON text
    pub fn from_ron(contents: &str) -> Result<Self, SceneLoadError> {
        let scene: Self = ron::from_str(contents)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load a scene, falling back to [`LightingScene::lab`] on any error
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(scene) => {
                log::info!(
                    "Loaded lighting scene '{}' ({} objects) from {}",
                    scene.name,
                    scene.objects.len(),
                    path.display()
                );
                scene
            }
            Err(e) => {
                log::warn!(
                    "Failed to load lighting scene {}: {}. Using built-in lab scene",
                    path.display(),
                    e
                );
                Self::lab()
            }
        }
    }

    /// Check animation targets exist and oscillators start in range
    pub fn validate(&self) -> Result<(), SceneLoadError> {
        for animation in &self.animations {
            if let AnimationTarget::ObjectOffsetY { object } = &animation.target {
                if !self.objects.iter().any(|o| &o.name == object) {
                    return Err(SceneLoadError::Invalid(format!(
                        "animation targets unknown object '{}'",
                        object
                    )));
                }
            }
            let osc = &animation.oscillator;
            if osc.min > osc.max {
                return Err(SceneLoadError::Invalid(format!(
                    "oscillator range {}..{} is inverted",
                    osc.min, osc.max
                )));
            }
            if !(osc.rate >= 0.0 && osc.rate.is_finite()) {
                return Err(SceneLoadError::Invalid(format!(
                    "oscillator rate {} must be a non-negative number",
                    osc.rate
                )));
            }
            if !(osc.min..=osc.max).contains(&osc.value) {
                return Err(SceneLoadError::Invalid(format!(
                    "oscillator value {} lies outside {}..{}",
                    osc.value, osc.min, osc.max
                )));
            }
        }
        Ok(())
    }

    /// Find an object by name
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// The lab scene: tiled floor, a plinth, stand-in models, a flickering
    /// red fire, and a red spotlight
    pub fn lab() -> Self {
        let marker = [0.5, 0.5, 0.5];
        let red = [1.0, 0.0, 0.0];

        Self {
            name: "Lighting lab".to_string(),
            clear_color: [0.2, 0.2, 1.0, 1.0],
            camera: CameraSpawn::default(),
            directional: DirectionalLight {
                direction: [1.0, -1.0, 0.0],
                ambient: [0.0, 0.0, 0.1],
                diffuse: [0.0, 0.0, 0.1],
                specular: [1.0, 1.0, 1.0],
            },
            point: PointLight {
                position: [0.0, 0.2, 0.0],
                ambient: [0.0, 0.2, 0.0],
                diffuse: [0.0, 0.5, 0.0],
                specular: [1.0, 1.0, 1.0],
                constant: 1.0,
                linear: 0.092,
                quadratic: 0.032,
            },
            spot: SpotLight {
                position: [0.0, 3.5, -2.0],
                direction: [0.0, -1.0, 1.0],
                ambient: [0.2, 0.0, 0.0],
                diffuse: [0.5, 0.0, 0.0],
                specular: [1.0, 1.0, 1.0],
                constant: 1.0,
                linear: 0.092,
                quadratic: 0.032,
                inner_cutoff: 12.5,
                outer_cutoff: 17.5,
            },
            material: Material::default(),
            objects: vec![
                SceneObject::new("plinth", [5.0, 0.0, 0.0], [2.05, 0.1, 3.3], [0.8, 0.6, 0.4]),
                SceneObject::new("floor", [0.0, -2.0, 0.0], [4.0, 0.1, 4.0], [0.7, 0.7, 0.7])
                    .with_grid(-2, 4, 4.0),
                SceneObject::new("statue", [0.0, 1.0, 4.0], [1.0, 2.0, 1.0], [0.6, 0.6, 0.6]),
                SceneObject::new("fox", [4.0, 1.0, -4.0], [1.2, 0.8, 0.6], [0.9, 0.5, 0.2]),
                SceneObject::new("fire", [0.0, 0.2, 0.0], marker, red).emissive(),
                SceneObject::new("spotlight", [0.0, 3.5, -2.0], marker, red).emissive(),
            ],
            animations: vec![Animation {
                oscillator: Oscillator::new(0.0, 1.0, 0.6, 0.5),
                target: AnimationTarget::PointLightIntensity { color: [1.0, 0.0, 0.0] },
            }],
        }
    }

    /// The island scene: a sunlit deer on an island, clouds, and a rising
    /// and falling sea
    pub fn island() -> Self {
        let cloud = [0.95, 0.95, 0.95];

        Self {
            name: "Island".to_string(),
            clear_color: [0.2, 0.2, 0.6, 1.0],
            camera: CameraSpawn::default(),
            directional: DirectionalLight {
                direction: [-3.0, -3.0, 0.0],
                ambient: [0.0, 0.0, 0.0],
                diffuse: [1.0, 1.0, 1.0],
                specular: [1.0, 1.0, 1.0],
            },
            point: PointLight {
                position: [0.0, 0.0, 0.0],
                ambient: [0.1, 0.1, 0.0],
                diffuse: [0.8, 0.5, 0.0],
                specular: [1.0, 1.0, 0.0],
                constant: 1.0,
                linear: 0.8,
                quadratic: 2.0,
            },
            spot: SpotLight {
                position: [3.0, 2.0, -2.0],
                direction: [0.0, -1.0, 1.0],
                ambient: [0.5, 0.0, 0.0],
                diffuse: [0.5, 0.0, 0.0],
                specular: [0.5, 0.0, 0.0],
                constant: 1.0,
                linear: 0.092,
                quadratic: 0.032,
                inner_cutoff: 5.5,
                outer_cutoff: 17.5,
            },
            material: Material::default(),
            objects: vec![
                SceneObject::new("sea", [-3.0, -0.1, -4.0], [25.0, 1.0, 25.0], [0.1, 0.3, 0.7])
                    .top_only(),
                SceneObject::new("island", [-3.0, 0.0, -6.0], [4.0, 1.0, 4.0], [0.85, 0.75, 0.5]),
                SceneObject::new("deer", [-3.0, 1.0, -6.0], [0.3, 0.6, 0.6], [0.6, 0.4, 0.2]),
                SceneObject::new("cloud_1", [-8.0, 8.6, -1.5], [6.0, 1.4, 7.6], cloud),
                SceneObject::new("cloud_2", [-8.0, 9.6, -1.2], [4.8, 1.0, 6.4], cloud),
                SceneObject::new("cloud_3", [2.0, 8.6, -10.5], [6.0, 1.4, 5.1], cloud),
                SceneObject::new("cloud_4", [2.0, 9.6, -10.2], [5.4, 1.0, 4.2], cloud),
                SceneObject::new("cloud_5", [2.0, 9.6, 2.2], [9.0, 1.0, 7.0], cloud),
            ],
            animations: vec![Animation {
                oscillator: Oscillator::new(-0.1, 0.1, 0.05, 0.0),
                target: AnimationTarget::ObjectOffsetY { object: "sea".to_string() },
            }],
        }
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
    /// Parsed, but internally inconsistent
    Invalid(String),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneLoadError::Invalid(msg) => write!(f, "Invalid scene: {}", msg),
        }
    }
}

impl std::error::Error for SceneLoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_scenes_validate() {
        assert!(LightingScene::lab().validate().is_ok());
        assert!(LightingScene::island().validate().is_ok());
    }

    #[test]
    fn test_floor_grid_placements() {
        let scene = LightingScene::lab();
        let floor = scene.object("floor").unwrap();
        let tiles = floor.placements();
        assert_eq!(tiles.len(), 36);
        assert!(tiles.contains(&[-8.0, -2.0, -8.0]));
        assert!(tiles.contains(&[12.0, -2.0, 12.0]));
        assert!(!tiles.contains(&[16.0, -2.0, 0.0]));
    }

    #[test]
    fn test_single_placement_without_grid() {
        let obj = SceneObject::new("box", [1.0, 2.0, 3.0], [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]);
        assert_eq!(obj.placements(), vec![[1.0, 2.0, 3.0]]);
    }

    #[test]
    fn test_ron_round_trip() {
        let scene = LightingScene::island();
        let text = ron::ser::to_string_pretty(&scene, ron::ser::PrettyConfig::new()).unwrap();
        let parsed = LightingScene::from_ron(&text).unwrap();
        assert_eq!(parsed, scene);
    }

    #[test]
    fn test_unknown_animation_target_is_invalid() {
        let mut scene = LightingScene::lab();
        scene.animations.push(Animation {
            oscillator: Oscillator::new(0.0, 1.0, 1.0, 0.0),
            target: AnimationTarget::ObjectOffsetY { object: "ghost".to_string() },
        });
        assert!(matches!(scene.validate(), Err(SceneLoadError::Invalid(_))));
    }

    fn island_with_sea(oscillator: &str) -> String {
        let text = fs::read_to_string(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("../../scenes/island.ron"),
        )
        .unwrap();
        text.replace("(min: -0.1, max: 0.1, rate: 0.05, value: 0.0)", oscillator)
    }

    #[test]
    fn test_negative_rate_is_invalid() {
        let text = island_with_sea("(min: -0.1, max: 0.1, rate: -0.05, value: 0.0)");
        assert!(matches!(
            LightingScene::from_ron(&text),
            Err(SceneLoadError::Invalid(_))
        ));
    }

    #[test]
    fn test_value_outside_range_is_invalid() {
        let text = island_with_sea("(min: -0.1, max: 0.1, rate: 0.05, value: 5.0)");
        let err = LightingScene::from_ron(&text).unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_loaded_oscillator_stays_in_range() {
        let text = island_with_sea("(min: -0.1, max: 0.1, rate: 0.05, value: 0.0)");
        let mut scene = LightingScene::from_ron(&text).unwrap();
        let osc = &mut scene.animations[0].oscillator;
        for _ in 0..100 {
            let v = osc.step(0.5);
            assert!((-0.1..=0.1).contains(&v), "{} escaped the range", v);
        }
    }

    #[test]
    fn test_parse_error() {
        let result = LightingScene::from_ron("(name: \"broken\"");
        assert!(matches!(result, Err(SceneLoadError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_lab() {
        let scene = LightingScene::load_or_default("does/not/exist.ron");
        assert_eq!(scene.name, LightingScene::lab().name);
    }
}
