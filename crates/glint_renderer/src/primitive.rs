//! Primitive trait and Intersect record for ray-object intersection.

use crate::{Material, Ray};
use glint_math::Vec3;
use thiserror::Error;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersect {
    /// Distance along the ray (always > 0 for a valid hit)
    pub distance: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
}

impl Intersect {
    pub fn new(distance: f32, point: Vec3, normal: Vec3) -> Self {
        Self {
            distance,
            point,
            normal,
        }
    }
}

/// Pick the nearer of two optional hits. On an exact tie the first one wins.
#[inline]
pub(crate) fn nearer(best: Option<Intersect>, candidate: Option<Intersect>) -> Option<Intersect> {
    match (best, candidate) {
        (Some(b), Some(c)) if c.distance < b.distance => Some(c),
        (None, c) => c,
        (b, _) => b,
    }
}

/// Trait for shapes that can be hit by rays.
pub trait Primitive: Send + Sync {
    /// Find the closest intersection in front of the ray origin.
    ///
    /// The ray direction is expected to be unit length. Returns `None` if the
    /// ray misses, or only hits behind its origin.
    fn ray_intersect(&self, ray: &Ray) -> Option<Intersect>;

    /// The material the whole primitive is shaded with.
    fn material(&self) -> &Material;
}

/// Errors raised while building primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("a pyramid needs exactly 4 vertices, got {0}")]
    PyramidVertexCount(usize),
}
