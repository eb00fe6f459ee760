//! Equirectangular environment map sampled by ray direction.
//!
//! Rays that escape the scene look up their color here instead of using a
//! flat background.

use std::f32::consts::PI;
use std::path::Path;

use glint_math::{Color, Vec3};

use crate::bitmap::{
    check_dimensions, pixel_index, read_bitmap, Bitmap, BitmapError, BitmapResult,
};

/// A loaded environment texture.
///
/// Texels are stored row-major with row 0 at the *bottom* of the image,
/// matching the row order of the bitmap file it was read from.
#[derive(Clone, Debug)]
pub struct EnvironmentMap {
    /// Texture width in pixels
    pub width: u32,

    /// Texture height in pixels
    pub height: u32,

    texels: Vec<Color>,
}

impl EnvironmentMap {
    /// Create an environment map from bottom-up texels.
    ///
    /// # Panics
    ///
    /// Panics if `texels.len() != width * height`.
    pub fn from_texels(width: u32, height: u32, texels: Vec<Color>) -> Self {
        assert_eq!(
            texels.len(),
            width as usize * height as usize,
            "environment map texel count does not match its size"
        );
        Self {
            width,
            height,
            texels,
        }
    }

    /// Load an environment map from a bitmap file.
    ///
    /// Failing to read the file is fatal for a render, so the error is
    /// returned to the caller as-is.
    pub fn load(path: impl AsRef<Path>) -> BitmapResult<Self> {
        let path = path.as_ref();
        let envmap = Self::try_from(read_bitmap(path)?)?;

        log::debug!(
            "Loaded environment map: {} ({}x{})",
            path.display(),
            envmap.width,
            envmap.height
        );
        Ok(envmap)
    }

    /// Get texel at integer coordinates, with y = 0 the bottom row.
    pub fn texel(&self, x: u32, y: u32) -> Color {
        self.texels[pixel_index(self.width, x, y)]
    }

    /// Sample the map in the direction `dir`.
    ///
    /// The direction is normalized, then mapped to
    /// `x = (atan2(z, x) / 2π + 0.5) * width` and `y = acos(-y) / π * height`.
    /// Coordinates that land outside the texture (floating point rounding at
    /// the poles and the seam) sample black.
    pub fn get_color(&self, dir: Vec3) -> Color {
        let dir = dir.normalize_or_zero();

        let u = dir.z.atan2(dir.x) / (2.0 * PI) + 0.5;
        let v = (-dir.y).clamp(-1.0, 1.0).acos() / PI;

        let x = (u * self.width as f32).floor();
        let y = (v * self.height as f32).floor();

        if x < 0.0 || y < 0.0 || x >= self.width as f32 || y >= self.height as f32 {
            return Color::BLACK;
        }
        self.texel(x as u32, y as u32)
    }
}

impl TryFrom<Bitmap> for EnvironmentMap {
    type Error = BitmapError;

    fn try_from(bitmap: Bitmap) -> BitmapResult<Self> {
        check_dimensions(bitmap.width, bitmap.height, bitmap.pixels.len())?;

        let row = bitmap.width as usize;
        let texels = bitmap
            .pixels
            .chunks_exact(row)
            .rev()
            .flatten()
            .copied()
            .collect();
        Ok(Self::from_texels(bitmap.width, bitmap.height, texels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x4 map whose texel (x, y) is colored (10x, 10y, 0).
    fn coordinate_map() -> EnvironmentMap {
        let texels = (0..4)
            .flat_map(|y| (0..4).map(move |x| Color::new(x as f32 * 10.0, y as f32 * 10.0, 0.0)))
            .collect();
        EnvironmentMap::from_texels(4, 4, texels)
    }

    #[test]
    fn test_horizon_samples_middle_row() {
        let map = coordinate_map();
        // atan2(0, 1) = 0 -> u = 0.5; slightly above the horizon -> v just over 0.5
        let dir = Vec3::new(1.0, 0.1, 0.0);
        assert_eq!(map.get_color(dir), Color::new(20.0, 20.0, 0.0));
        // Unnormalized input is normalized first
        assert_eq!(map.get_color(dir * 7.0), Color::new(20.0, 20.0, 0.0));
    }

    #[test]
    fn test_looking_down_samples_bottom_row() {
        let map = coordinate_map();
        assert_eq!(map.get_color(Vec3::NEG_Y), Color::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn test_looking_up_samples_top_row() {
        let map = coordinate_map();
        let c = map.get_color(Vec3::new(0.0, 1.0, 0.01));
        assert_eq!(c.g, 30.0);
    }

    #[test]
    fn test_seam_is_black() {
        let map = coordinate_map();
        // atan2(0, -1) = π -> u = 1.0, one past the last column
        assert_eq!(map.get_color(Vec3::NEG_X), Color::BLACK);
    }

    #[test]
    fn test_from_bitmap_flips_rows() {
        let bitmap = Bitmap {
            width: 2,
            height: 2,
            pixels: vec![
                Color::new(255.0, 0.0, 0.0),
                Color::new(255.0, 0.0, 0.0),
                Color::new(0.0, 0.0, 255.0),
                Color::new(0.0, 0.0, 255.0),
            ],
        };
        let map = EnvironmentMap::try_from(bitmap).unwrap();

        // Top row of the image (red) becomes the last texel row
        assert_eq!(map.texel(0, 0), Color::new(0.0, 0.0, 255.0));
        assert_eq!(map.texel(1, 1), Color::new(255.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_bitmap_rejects_bad_dimensions() {
        let zero_width = Bitmap {
            width: 0,
            height: 3,
            pixels: vec![Color::WHITE; 3],
        };
        assert!(matches!(
            EnvironmentMap::try_from(zero_width),
            Err(BitmapError::ZeroSize { width: 0, height: 3 })
        ));

        let short = Bitmap {
            width: 2,
            height: 2,
            pixels: vec![Color::WHITE; 3],
        };
        assert!(matches!(
            EnvironmentMap::try_from(short),
            Err(BitmapError::BufferSize { expected: 4, actual: 3 })
        ));
    }
}
