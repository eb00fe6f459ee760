//! Surface materials and the point light.

use glint_math::{Color, Vec3};

/// Relative weights of the four shading contributions.
///
/// Weights are not normalized; they need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Albedo {
    pub diffuse: f32,
    pub specular: f32,
    pub reflection: f32,
    pub refraction: f32,
}

impl Albedo {
    /// Create albedo weights. Negative weights are clamped to zero.
    pub fn new(diffuse: f32, specular: f32, reflection: f32, refraction: f32) -> Self {
        let weights = [diffuse, specular, reflection, refraction];
        if weights.iter().any(|w| *w < 0.0) {
            log::warn!("Negative albedo weight in {:?}, clamping to 0", weights);
        }
        let [diffuse, specular, reflection, refraction] = weights.map(|w| w.max(0.0));
        Self {
            diffuse,
            specular,
            reflection,
            refraction,
        }
    }
}

impl From<[f32; 4]> for Albedo {
    fn from([d, s, rl, rr]: [f32; 4]) -> Self {
        Albedo::new(d, s, rl, rr)
    }
}

/// Phong-style material with optional mirror reflection and refraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base surface color
    pub diffuse: Color,
    /// Contribution weights
    pub albedo: Albedo,
    /// Phong specular exponent
    pub specular_exponent: f32,
    /// Index of refraction; only meaningful when `albedo.refraction > 0`
    pub refractive_index: f32,
}

impl Material {
    /// Create an opaque material (refractive index 0).
    pub fn new(diffuse: Color, albedo: impl Into<Albedo>, specular_exponent: f32) -> Self {
        Self {
            diffuse,
            albedo: albedo.into(),
            specular_exponent,
            refractive_index: 0.0,
        }
    }

    /// Set the index of refraction.
    pub fn with_refractive_index(mut self, refractive_index: f32) -> Self {
        self.refractive_index = refractive_index;
        if self.albedo.refraction > 0.0 && refractive_index <= 0.0 {
            log::warn!(
                "Material refracts (weight {}) but has refractive index {}; refraction will be black",
                self.albedo.refraction,
                refractive_index
            );
        }
        self
    }

    pub fn ivory() -> Self {
        Material::new(Color::new(100.0, 100.0, 80.0), [0.6, 0.3, 0.1, 0.0], 50.0)
    }

    pub fn rubber() -> Self {
        Material::new(Color::new(80.0, 0.0, 0.0), [0.9, 0.1, 0.0, 0.0], 10.0)
    }

    pub fn mirror() -> Self {
        Material::new(Color::WHITE, [0.0, 10.0, 0.8, 0.0], 1500.0)
    }

    pub fn glass() -> Self {
        Material::new(Color::WHITE, [0.0, 0.5, 0.1, 0.8], 150.0).with_refractive_index(1.5)
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Scalar intensity (>= 0)
    pub intensity: f32,
    pub color: Color,
}

impl Light {
    pub fn new(position: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            position,
            intensity: intensity.max(0.0),
            color,
        }
    }
}
