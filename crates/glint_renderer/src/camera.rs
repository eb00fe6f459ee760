//! Pinhole camera for primary ray generation.
//!
//! The camera sits at the world origin looking down -Z with +Y up. There is
//! no camera transform and one ray per pixel, through the pixel center.

use glint_math::{Ray, Vec3};

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Cached computed values
    aspect_ratio: f32,
    half_height: f32,
}

impl Camera {
    /// Vertical field of view in degrees.
    pub const VFOV: f32 = 90.0;

    /// Create a camera for an image of the given resolution.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            aspect_ratio: image_width as f32 / image_height as f32,
            half_height: (Self::VFOV.to_radians() / 2.0).tan(),
        }
    }

    /// Generate the unit-direction ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let px = (x as f32 + 0.5) / self.image_width as f32;
        let py = (y as f32 + 0.5) / self.image_height as f32;

        let i = (2.0 * px - 1.0) * self.aspect_ratio * self.half_height;
        let j = (1.0 - 2.0 * py) * self.half_height;

        Ray::normalized(Vec3::ZERO, Vec3::new(i, j, -1.0))
    }
}
