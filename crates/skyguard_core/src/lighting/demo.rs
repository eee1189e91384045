//! Runtime state of the lighting demo

use super::lights::PointLight;
use super::model::LightingModel;
use super::scene::{AnimationTarget, CuboidFaces, LightingScene};

/// One cuboid to draw this frame, with animations applied
#[derive(Clone, Debug, PartialEq)]
pub struct CuboidInstance {
    pub translation: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 3],
    pub emissive: bool,
    pub faces: CuboidFaces,
}

/// A scene plus the state that changes while it runs
pub struct LightingDemo {
    scene: LightingScene,
    model: LightingModel,
    elapsed: f32,
}

impl LightingDemo {
    pub fn new(scene: LightingScene, model: LightingModel) -> Self {
        Self {
            scene,
            model,
            elapsed: 0.0,
        }
    }

    pub fn scene(&self) -> &LightingScene {
        &self.scene
    }

    pub fn model(&self) -> LightingModel {
        self.model
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Switch lighting model; returns true if it changed
    pub fn set_model(&mut self, model: LightingModel) -> bool {
        if self.model == model {
            return false;
        }
        log::info!("Lighting model: {}", model.label());
        self.model = model;
        true
    }

    /// Advance every animation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        for animation in &mut self.scene.animations {
            animation.oscillator.step(dt);
        }
    }

    /// The point light with intensity animations applied
    pub fn point_light(&self) -> PointLight {
        let mut light = self.scene.point.clone();
        for animation in &self.scene.animations {
            if let AnimationTarget::PointLightIntensity { color } = &animation.target {
                let v = animation.oscillator.value;
                let scaled = [color[0] * v, color[1] * v, color[2] * v];
                light.ambient = scaled;
                light.diffuse = scaled;
            }
        }
        light
    }

    /// Current Y offset of a named object (0.0 when unanimated)
    pub fn object_offset_y(&self, name: &str) -> f32 {
        self.scene
            .animations
            .iter()
            .filter_map(|a| match &a.target {
                AnimationTarget::ObjectOffsetY { object } if object == name => {
                    Some(a.oscillator.value)
                }
                _ => None,
            })
            .sum()
    }

    /// Every cuboid to draw, grids expanded and offsets applied
    pub fn instances(&self) -> Vec<CuboidInstance> {
        let mut out = Vec::new();
        for object in &self.scene.objects {
            let offset = self.object_offset_y(&object.name);
            for [x, y, z] in object.placements() {
                out.push(CuboidInstance {
                    translation: [x, y + offset, z],
                    scale: object.scale,
                    color: object.color,
                    emissive: object.emissive,
                    faces: object.faces,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_flickers_red() {
        let mut demo = LightingDemo::new(LightingScene::lab(), LightingModel::Phong);
        assert_eq!(demo.point_light().ambient, [0.5, 0.0, 0.0]);

        demo.update(0.5);
        let light = demo.point_light();
        assert!((light.diffuse[0] - 0.8).abs() < 1e-5);
        assert_eq!(light.diffuse[1], 0.0);
        assert_eq!(light.ambient, light.diffuse);
    }

    #[test]
    fn test_point_light_untouched_without_animation() {
        let demo = LightingDemo::new(LightingScene::island(), LightingModel::Phong);
        assert_eq!(demo.point_light(), LightingScene::island().point);
    }

    #[test]
    fn test_sea_bobs() {
        let mut demo = LightingDemo::new(LightingScene::island(), LightingModel::Phong);
        assert_eq!(demo.object_offset_y("sea"), 0.0);
        demo.update(1.0);
        assert!((demo.object_offset_y("sea") - 0.05).abs() < 1e-6);
        assert_eq!(demo.object_offset_y("deer"), 0.0);

        let sea = demo
            .instances()
            .into_iter()
            .find(|i| i.faces == CuboidFaces::Top)
            .unwrap();
        assert!((sea.translation[1] - (-0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_instances_expand_grid() {
        let demo = LightingDemo::new(LightingScene::lab(), LightingModel::Gouraud);
        // 36 floor tiles plus five single objects
        assert_eq!(demo.instances().len(), 41);
        assert_eq!(demo.instances().iter().filter(|i| i.emissive).count(), 2);
    }

    #[test]
    fn test_set_model_reports_change() {
        let mut demo = LightingDemo::new(LightingScene::lab(), LightingModel::Gouraud);
        assert!(!demo.set_model(LightingModel::Gouraud));
        assert!(demo.set_model(LightingModel::PhongMaterial));
        assert_eq!(demo.model(), LightingModel::PhongMaterial);
    }
}
