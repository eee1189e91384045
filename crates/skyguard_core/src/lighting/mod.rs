//! Phong lighting demo
//!
//! A scene of procedural cuboids lit by a directional light, a point light,
//! and a spotlight, shaded with one of four selectable lighting models.

mod demo;
mod lights;
mod model;
mod oscillator;
mod scene;

pub use demo::{CuboidInstance, LightingDemo};
pub use lights::{attenuation, spot_intensity, DirectionalLight, Material, PointLight, SpotLight};
pub use model::LightingModel;
pub use oscillator::Oscillator;
pub use scene::{
    Animation, AnimationTarget, CameraSpawn, CuboidFaces, Grid, LightingScene, SceneLoadError,
    SceneObject,
};
