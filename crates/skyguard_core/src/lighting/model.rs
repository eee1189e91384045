//! Lighting model selection

use serde::{Deserialize, Serialize};

/// How the lit pipeline shades a fragment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightingModel {
    /// Lighting evaluated per vertex and interpolated
    Gouraud,
    /// Lighting evaluated per fragment with the object's base colour
    Phong,
    /// Per-fragment lighting using the scene material coefficients
    PhongMaterial,
    /// Material lighting with a procedural checker as the diffuse map
    #[default]
    PhongMaterialTexture,
}

impl LightingModel {
    pub const ALL: [LightingModel; 4] = [
        LightingModel::Gouraud,
        LightingModel::Phong,
        LightingModel::PhongMaterial,
        LightingModel::PhongMaterialTexture,
    ];

    /// Model bound to number key `n` (1-based)
    pub fn from_number_key(n: u8) -> Option<Self> {
        match n {
            1..=4 => Some(Self::ALL[(n - 1) as usize]),
            _ => None,
        }
    }

    /// Value written to the shader's `mode` uniform
    pub fn shader_mode(self) -> u32 {
        match self {
            LightingModel::Gouraud => 0,
            LightingModel::Phong => 1,
            LightingModel::PhongMaterial => 2,
            LightingModel::PhongMaterialTexture => 3,
        }
    }

    pub fn uses_material(self) -> bool {
        matches!(
            self,
            LightingModel::PhongMaterial | LightingModel::PhongMaterialTexture
        )
    }

    /// Human-readable name for logs and the window title
    pub fn label(self) -> &'static str {
        match self {
            LightingModel::Gouraud => "Gouraud",
            LightingModel::Phong => "Phong",
            LightingModel::PhongMaterial => "Phong + material",
            LightingModel::PhongMaterialTexture => "Phong + material + texture",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys() {
        assert_eq!(LightingModel::from_number_key(1), Some(LightingModel::Gouraud));
        assert_eq!(
            LightingModel::from_number_key(4),
            Some(LightingModel::PhongMaterialTexture)
        );
        assert_eq!(LightingModel::from_number_key(0), None);
        assert_eq!(LightingModel::from_number_key(5), None);
    }

    #[test]
    fn test_shader_modes_are_distinct() {
        let modes: Vec<u32> = LightingModel::ALL.iter().map(|m| m.shader_mode()).collect();
        assert_eq!(modes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_material_models() {
        assert!(!LightingModel::Phong.uses_material());
        assert!(LightingModel::PhongMaterial.uses_material());
    }
}
