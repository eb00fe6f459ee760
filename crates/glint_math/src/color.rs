//! RGB color on the 0-255 scale.
//!
//! Channels are stored as `f32`. Arithmetic clamps every channel back into
//! `[0, 255]` as soon as it is performed, so shading contributions saturate
//! instead of accumulating past white. Conversion to bytes truncates.

use std::ops::{Add, Mul};

use crate::Interval;

/// Valid channel range.
const CHANNEL: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// An RGB color with channels on the 0-255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);

    /// Create a color. Channels are stored as given; clamping happens on
    /// arithmetic and byte conversion.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32, g as f32, b as f32)
    }

    /// Clamp every channel into `[0, 255]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            CHANNEL.clamp(self.r),
            CHANNEL.clamp(self.g),
            CHANNEL.clamp(self.b),
        )
    }

    /// Convert to 8-bit `[r, g, b]`, clamping then truncating each channel.
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = self.clamped();
        [c.r as u8, c.g as u8, c.b as u8]
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color::new(self.r + other.r, self.g + other.g, self.b + other.b).clamped()
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, k: f32) -> Color {
        Color::new(self.r * k, self.g * k, self.b * k).clamped()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::from_rgb8(r, g, b)
    }
}
