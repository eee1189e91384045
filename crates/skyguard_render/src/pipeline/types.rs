//! GPU-compatible data types for the flat and lit pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.
//! Uniform members are padded to `vec4<f32>` so the WGSL uniform layout
//! rules need no implicit padding.

use bytemuck::{Pod, Zeroable};
use skyguard_core::lighting::{DirectionalLight, LightingModel, Material, PointLight, SpotLight};
use skyguard_math::{mat4, Mat4, Vec3};

/// An unlit board vertex
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct FlatVertex {
    /// World position (board circles lie in the XZ plane)
    pub position: [f32; 3],
    /// RGB color
    pub color: [f32; 3],
}

impl FlatVertex {
    pub fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// A world-space vertex of the lighting scene
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LitVertex {
    pub position: [f32; 3],
    /// Unit surface normal
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    /// Base RGB color
    pub color: [f32; 3],
    /// 1.0 draws the base color unlit
    pub emissive: f32,
}

impl Default for LitVertex {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            normal: [0.0, 1.0, 0.0],
            uv: [0.0; 2],
            color: [1.0; 3],
            emissive: 0.0,
        }
    }
}

/// Uniforms for the flat pipeline
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FlatUniforms {
    /// projection * view * model
    pub mvp: [[f32; 4]; 4],
}

impl Default for FlatUniforms {
    fn default() -> Self {
        Self { mvp: mat4::IDENTITY }
    }
}

fn pad(v: [f32; 3], w: f32) -> [f32; 4] {
    [v[0], v[1], v[2], w]
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct GpuDirectionalLight {
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

impl From<&DirectionalLight> for GpuDirectionalLight {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            direction: pad(light.direction, 0.0),
            ambient: pad(light.ambient, 0.0),
            diffuse: pad(light.diffuse, 0.0),
            specular: pad(light.specular, 0.0),
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct GpuPointLight {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// (constant, linear, quadratic, unused)
    pub attenuation: [f32; 4],
}

impl From<&PointLight> for GpuPointLight {
    fn from(light: &PointLight) -> Self {
        Self {
            position: pad(light.position, 1.0),
            ambient: pad(light.ambient, 0.0),
            diffuse: pad(light.diffuse, 0.0),
            specular: pad(light.specular, 0.0),
            attenuation: [light.constant, light.linear, light.quadratic, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct GpuSpotLight {
    pub position: [f32; 4],
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// (constant, linear, quadratic, unused)
    pub attenuation: [f32; 4],
    /// (cos inner, cos outer, unused, unused)
    pub cutoff: [f32; 4],
}

impl From<&SpotLight> for GpuSpotLight {
    fn from(light: &SpotLight) -> Self {
        let (inner, outer) = light.cutoff_cosines();
        Self {
            position: pad(light.position, 1.0),
            direction: pad(light.direction, 0.0),
            ambient: pad(light.ambient, 0.0),
            diffuse: pad(light.diffuse, 0.0),
            specular: pad(light.specular, 0.0),
            attenuation: [light.constant, light.linear, light.quadratic, 0.0],
            cutoff: [inner, outer, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct GpuMaterial {
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    /// Specular color in xyz, shininess in w
    pub specular: [f32; 4],
}

impl From<&Material> for GpuMaterial {
    fn from(material: &Material) -> Self {
        Self {
            ambient: pad(material.ambient, 0.0),
            diffuse: pad(material.diffuse, 0.0),
            specular: pad(material.specular, material.shininess),
        }
    }
}

/// Uniforms for the lit pipeline
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LitUniforms {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position in xyz
    pub camera_position: [f32; 4],
    pub directional: GpuDirectionalLight,
    pub point: GpuPointLight,
    pub spot: GpuSpotLight,
    pub material: GpuMaterial,
    /// x: shading mode (0 Gouraud, 1 Phong, 2 material, 3 textured)
    pub settings: [u32; 4],
}

impl Default for LitUniforms {
    fn default() -> Self {
        Self {
            view_proj: mat4::IDENTITY,
            camera_position: [0.0; 4],
            directional: GpuDirectionalLight::default(),
            point: GpuPointLight::default(),
            spot: GpuSpotLight::default(),
            material: GpuMaterial::default(),
            settings: [0; 4],
        }
    }
}

impl LitUniforms {
    pub fn new(
        view_proj: Mat4,
        camera_position: Vec3,
        directional: &DirectionalLight,
        point: &PointLight,
        spot: &SpotLight,
        material: &Material,
        model: LightingModel,
    ) -> Self {
        Self {
            view_proj,
            camera_position: pad(camera_position.to_array(), 1.0),
            directional: directional.into(),
            point: point.into(),
            spot: spot.into(),
            material: material.into(),
            settings: [model.shader_mode(), 0, 0, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_core::LightingScene;

    #[test]
    fn test_vertex_sizes() {
        assert_eq!(std::mem::size_of::<FlatVertex>(), 24);
        assert_eq!(std::mem::size_of::<LitVertex>(), 48);
    }

    #[test]
    fn test_uniform_sizes_are_vec4_aligned() {
        assert_eq!(std::mem::size_of::<FlatUniforms>(), 64);
        assert_eq!(std::mem::size_of::<GpuDirectionalLight>(), 64);
        assert_eq!(std::mem::size_of::<GpuPointLight>(), 80);
        assert_eq!(std::mem::size_of::<GpuSpotLight>(), 112);
        assert_eq!(std::mem::size_of::<GpuMaterial>(), 48);
        assert_eq!(std::mem::size_of::<LitUniforms>(), 400);
        assert_eq!(std::mem::size_of::<LitUniforms>() % 16, 0);
    }

    #[test]
    fn test_lit_uniforms_from_scene() {
        let scene = LightingScene::lab();
        let uniforms = LitUniforms::new(
            mat4::IDENTITY,
            Vec3::new(0.0, 2.0, 2.0),
            &scene.directional,
            &scene.point,
            &scene.spot,
            &scene.material,
            LightingModel::PhongMaterial,
        );

        assert_eq!(uniforms.settings[0], 2);
        assert_eq!(uniforms.camera_position, [0.0, 2.0, 2.0, 1.0]);
        assert_eq!(uniforms.material.specular[3], scene.material.shininess);
        let (inner, outer) = scene.spot.cutoff_cosines();
        assert_eq!(uniforms.spot.cutoff[..2], [inner, outer]);
        assert_eq!(uniforms.point.attenuation[0], scene.point.constant);
    }
}
