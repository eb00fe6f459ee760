//! Glint Renderer - recursive Whitted-style ray tracing.
//!
//! One primary ray per pixel, nearest-hit search over every primitive,
//! Phong-style local lighting from a single point light with hard shadows,
//! and recursive mirror reflection and refraction up to a fixed depth.

mod camera;
pub mod demo;
mod material;
mod primitive;
mod renderer;
mod scene;
mod shading;

mod cube;
mod plane;
mod pyramid;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use material::{Albedo, Light, Material};
pub use primitive::{GeometryError, Intersect, Primitive};
pub use renderer::{render, render_pixel, Framebuffer, RenderConfig};
pub use scene::Scene;
pub use shading::{cast_ray, SHADOW_INTENSITY, SURFACE_OFFSET};

pub use cube::Cube;
pub use plane::Plane;
pub use pyramid::Pyramid;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export math types from glint_math
pub use glint_math::{Color, Ray, Vec3};
pub use glint_core::MAX_RECURSION_DEPTH;
