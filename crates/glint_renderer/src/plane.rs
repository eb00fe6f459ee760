//! Infinite plane primitive.

use std::sync::Arc;

use crate::{Intersect, Material, Primitive, Ray};
use glint_math::{Interval, Vec3};

/// Rays closer to parallel than this never hit the plane.
const PARALLEL_EPSILON: f32 = 1e-4;

/// An infinite plane through `position` with a unit `normal`.
#[derive(Clone)]
pub struct Plane {
    position: Vec3,
    normal: Vec3,
    material: Arc<Material>,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(position: Vec3, normal: Vec3, material: Arc<Material>) -> Self {
        Self {
            position,
            normal: normal.normalize_or_zero(),
            material,
        }
    }
}

impl Primitive for Plane {
    fn ray_intersect(&self, ray: &Ray) -> Option<Intersect> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.position - ray.origin) / denom;
        if !Interval::FORWARD.surrounds(t) {
            return None;
        }

        Some(Intersect::new(t, ray.at(t), self.normal))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
