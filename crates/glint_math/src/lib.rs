// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod aabb;
mod color;
mod interval;
mod optics;
mod ray;

pub use aabb::Aabb;
pub use color::Color;
pub use interval::Interval;
pub use optics::{reflect, refract};
pub use ray::Ray;
