//! Triangle primitive for ray tracing.
//!
//! Intersects the ray with the triangle's supporting plane, then keeps the
//! hit only if its barycentric weights put it inside the triangle.

use std::sync::Arc;

use crate::{Intersect, Material, Primitive, Ray};
use glint_math::{Interval, Vec3};

/// Rays this close to parallel with the supporting plane miss.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A triangle primitive.
#[derive(Clone)]
pub struct Triangle {
    /// Vertices
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    /// Pre-computed face normal (unit length, zero for a degenerate triangle)
    normal: Vec3,
    /// Material
    material: Arc<Material>,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding `v0 -> v1 -> v2`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Arc<Material>) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }

    /// Barycentric weights `(w, v, u)` of `p` with respect to `v0`, `v1`, `v2`.
    ///
    /// `p` is assumed to lie in the triangle's plane.
    pub fn barycentric(&self, p: Vec3) -> (f32, f32, f32) {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        let ep = p - self.v0;

        let d11 = e1.dot(e1);
        let d12 = e1.dot(e2);
        let d22 = e2.dot(e2);
        let dp1 = ep.dot(e1);
        let dp2 = ep.dot(e2);

        let denom = d11 * d22 - d12 * d12;
        let v = (d22 * dp1 - d12 * dp2) / denom;
        let u = (d11 * dp2 - d12 * dp1) / denom;
        (1.0 - v - u, v, u)
    }
}

impl Primitive for Triangle {
    fn ray_intersect(&self, ray: &Ray) -> Option<Intersect> {
        let denom = self.normal.dot(ray.direction);

        // Ray is parallel to triangle (or the triangle is degenerate)
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(self.v0 - ray.origin) / denom;
        if !Interval::FORWARD.surrounds(t) {
            return None;
        }

        let point = ray.at(t);
        let (w, v, u) = self.barycentric(point);
        if w < 0.0 || v < 0.0 || u < 0.0 {
            return None;
        }

        Some(Intersect::new(t, point, self.normal))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
