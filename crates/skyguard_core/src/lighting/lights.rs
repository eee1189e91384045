//! Light sources, material, and the falloff terms the shader evaluates

use serde::{Deserialize, Serialize};

/// Sun-like light with parallel rays
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub direction: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

/// Omnidirectional light with distance attenuation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// Cone light with a soft edge between the inner and outer cut-offs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
    /// Full-intensity half-angle in degrees
    pub inner_cutoff: f32,
    /// Zero-intensity half-angle in degrees
    pub outer_cutoff: f32,
}

impl SpotLight {
    /// (inner, outer) cut-offs as cosines, the form the shader compares against
    pub fn cutoff_cosines(&self) -> (f32, f32) {
        (
            self.inner_cutoff.to_radians().cos(),
            self.outer_cutoff.to_radians().cos(),
        )
    }
}

/// Phong material coefficients
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: [1.0, 1.0, 1.0],
            diffuse: [0.8, 0.5, 0.5],
            specular: [1.0, 1.0, 1.0],
            shininess: 128.0,
        }
    }
}

/// Distance falloff `1 / (kc + kl·d + kq·d²)`
pub fn attenuation(constant: f32, linear: f32, quadratic: f32, distance: f32) -> f32 {
    1.0 / (constant + linear * distance + quadratic * distance * distance)
}

/// Spotlight edge factor, all arguments as cosines
///
/// `theta` is the cosine between the spot direction and the direction to
/// the fragment. 1.0 inside the inner cone, 0.0 outside the outer cone,
/// and linear in between.
pub fn spot_intensity(theta: f32, inner: f32, outer: f32) -> f32 {
    let epsilon = inner - outer;
    if epsilon <= 0.0 {
        return if theta >= inner { 1.0 } else { 0.0 };
    }
    ((theta - outer) / epsilon).clamp(0.0, 1.0)
}
