//! Material and lighting descriptions for the scene.
//!
//! These are plain values; the renderer packs them into GPU instance data.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// #87CEEB
pub const SKY_BLUE: [f32; 3] = [0.529, 0.808, 0.922];

/// Approximation of a physically based translucent surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalMaterial {
    pub color: [f32; 3],
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub transmission: f32,
    pub thickness: f32,
    pub ior: f32,
    pub reflectivity: f32,
}

pub const ICE: PhysicalMaterial = PhysicalMaterial {
    color: [0.8, 0.95, 1.0],
    opacity: 0.7,
    roughness: 0.1,
    metalness: 0.0,
    transmission: 0.9,
    thickness: 0.5,
    ior: 1.31, // ice
    reflectivity: 0.3,
};

/// Flat, opaque-looking cube used by `CubeStyle::Simple`.
pub const ICE_SIMPLE: PhysicalMaterial = PhysicalMaterial {
    color: SKY_BLUE,
    opacity: 0.8,
    roughness: 0.1,
    metalness: 0.1,
    transmission: 0.0,
    thickness: 0.0,
    ior: 1.5,
    reflectivity: 0.5,
};

pub const WATER: PhysicalMaterial = PhysicalMaterial {
    color: [0.4, 0.7, 1.0],
    opacity: 0.8,
    roughness: 0.0,
    metalness: 0.0,
    transmission: 0.95,
    thickness: 0.1,
    ior: 1.33, // water
    reflectivity: 0.5,
};

/// Unlit colour, used for the glow inside the cube.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicMaterial {
    pub color: [f32; 3],
    pub opacity: f32,
}

pub const ICE_GLOW: BasicMaterial = BasicMaterial {
    color: SKY_BLUE,
    opacity: 0.1,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CubeStyle {
    /// Refractive ice with an inner glow.
    #[default]
    Refractive,
    /// Plain translucent cube without the glow.
    Simple,
}

impl CubeStyle {
    pub fn material(self) -> PhysicalMaterial {
        match self {
            CubeStyle::Refractive => ICE,
            CubeStyle::Simple => ICE_SIMPLE,
        }
    }

    #[inline]
    pub fn has_glow(self) -> bool {
        matches!(self, CubeStyle::Refractive)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub color: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    /// Directional light, stored as the position it shines from.
    pub sun: PointLight,
    pub fill: PointLight,
}

pub const LIGHTING: Lighting = Lighting {
    ambient: 0.3,
    sun: PointLight {
        position: Vec3::new(10.0, 10.0, 5.0),
        intensity: 1.0,
        color: [1.0, 1.0, 1.0],
    },
    fill: PointLight {
        position: Vec3::new(-10.0, -10.0, -5.0),
        intensity: 0.5,
        color: SKY_BLUE,
    },
};

/// Soft blob shadow on a ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactShadow {
    pub y: f32,
    pub opacity: f32,
    pub scale: f32,
    pub blur: f32,
    pub far: f32,
}

pub const CONTACT_SHADOW: ContactShadow = ContactShadow {
    y: crate::constants::SHADOW_PLANE_Y,
    opacity: crate::constants::SHADOW_OPACITY,
    scale: crate::constants::SHADOW_SCALE,
    blur: crate::constants::SHADOW_BLUR,
    far: crate::constants::SHADOW_FAR,
};

// Page background gradient, top then bottom
pub const SKY_TOP: [f32; 3] = [0.729, 0.902, 0.992]; // #BAE6FD
pub const SKY_BOTTOM: [f32; 3] = [0.576, 0.773, 0.992]; // #93C5FD
