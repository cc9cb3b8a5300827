//! Entity and Material types
//!
//! An Entity is a named body in the world with a material to draw it with.

use orbitsim_physics::BodyKey;
use serde::{Serialize, Deserialize};

/// A simple material with just a base color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Material {
    /// Create a new material with the given RGBA color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            base_color: [r, g, b, a],
        }
    }

    /// Create a new opaque material with the given RGB color
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse a CSS hex color: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`
    ///
    /// The leading `#` is optional. Returns None for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();

        let rgba = match digits.len() {
            3 => [nibble(0)?, nibble(1)?, nibble(2)?, 255],
            4 => [nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?],
            6 => [byte(0)?, byte(2)?, byte(4)?, 255],
            8 => [byte(0)?, byte(2)?, byte(4)?, byte(6)?],
            _ => return None,
        };

        Some(Self::new(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        ))
    }

    /// Black material
    pub const BLACK: Self = Self { base_color: [0.0, 0.0, 0.0, 1.0] };

    /// White material
    pub const WHITE: Self = Self { base_color: [1.0, 1.0, 1.0, 1.0] };

    /// Earth blue (`#39f`)
    pub const EARTH: Self = Self { base_color: [0.2, 0.6, 1.0, 1.0] };

    /// Moon orange (`#f82`)
    pub const MOON: Self = Self { base_color: [1.0, 0.533_333_3, 0.133_333_3, 1.0] };

    /// Sun yellow (`#fd3`)
    pub const SUN: Self = Self { base_color: [1.0, 0.866_666_7, 0.2, 1.0] };
}

/// A body in the world with a name and a material
///
/// Position, velocity and mass live in the gravity system; the entity only
/// holds the key to its body.
#[derive(Clone, Debug)]
pub struct Entity {
    /// Name for lookup and debug output
    pub name: String,
    /// The entity's material
    pub material: Material,
    /// Key of the body in the gravity system
    pub body: BodyKey,
}

impl Entity {
    /// Create a new entity for the given body
    pub fn new(name: impl Into<String>, body: BodyKey) -> Self {
        Self {
            name: name.into(),
            material: Material::default(),
            body,
        }
    }

    /// Set the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitsim_math::Vec2;
    use orbitsim_physics::{Body, GravitySystem};

    fn key() -> BodyKey {
        let mut system = GravitySystem::new();
        system
            .add_body(Body::new(1.0, Vec2::ZERO, Vec2::ZERO, 1.0))
            .unwrap()
    }

    #[test]
    fn test_material_default_is_black() {
        let m = Material::default();
        assert_eq!(m.base_color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_material_from_rgb() {
        let m = Material::from_rgb(0.5, 0.6, 0.7);
        assert_eq!(m.base_color, [0.5, 0.6, 0.7, 1.0]);
    }

    #[test]
    fn test_from_hex_short() {
        assert_eq!(Material::from_hex("#39f"), Some(Material::EARTH));
        let moon = Material::from_hex("#f82").unwrap();
        for (a, b) in moon.base_color.iter().zip(Material::MOON.base_color.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_from_hex_long_and_alpha() {
        let m = Material::from_hex("ff000080").unwrap();
        assert_eq!(m.base_color[0], 1.0);
        assert_eq!(m.base_color[1], 0.0);
        assert!((m.base_color[3] - 128.0 / 255.0).abs() < 1e-6);

        let m = Material::from_hex("#3399ff").unwrap();
        assert_eq!(m, Material::EARTH);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Material::from_hex("").is_none());
        assert!(Material::from_hex("#12").is_none());
        assert!(Material::from_hex("#ggg").is_none());
        assert!(Material::from_hex("#12345").is_none());
        assert!(Material::from_hex("#é1").is_none());
    }

    #[test]
    fn test_entity_new() {
        let body = key();
        let entity = Entity::new("earth", body).with_material(Material::EARTH);
        assert_eq!(entity.name, "earth");
        assert_eq!(entity.body, body);
        assert_eq!(entity.material, Material::EARTH);
    }
}
