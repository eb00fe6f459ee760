//! Frame renderer.
//!
//! Walks every pixel in row-major order, casts one primary ray through its
//! center and stores the shaded color in a [`Framebuffer`].

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::shading::cast_ray;
use crate::{Camera, Color, Scene};
use glint_core::bitmap::{encode_bitmap, write_bitmap, BitmapResult};
use glint_core::{RenderSettings, MAX_RECURSION_DEPTH};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum reflection/refraction bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_RECURSION_DEPTH,
        }
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
        }
    }
}

/// Width x height grid of colors, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with `clear`.
    pub fn new(width: u32, height: u32, clear: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![clear; width as usize * height as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} framebuffer",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Encode as a 24-bit bitmap into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> BitmapResult<()> {
        encode_bitmap(writer, self.width, self.height, &self.pixels)
    }

    /// Write to a bitmap file.
    pub fn save(&self, path: impl AsRef<Path>) -> BitmapResult<()> {
        write_bitmap(path, self.width, self.height, &self.pixels)
    }
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.get_ray(x, y);
    cast_ray(scene, &ray, 0, config)
}

/// Render the entire scene to a framebuffer.
///
/// This is a simple single-threaded renderer; every pixel is independent.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let start = Instant::now();
    log::info!(
        "Rendering {}x{} ({} objects, max depth {})",
        camera.image_width,
        camera.image_height,
        scene.len(),
        config.max_depth
    );
    if scene.light.is_none() {
        log::debug!("Scene has no light; only reflection and refraction will shade surfaces");
    }

    let mut image = Framebuffer::new(camera.image_width, camera.image_height, scene.background);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
