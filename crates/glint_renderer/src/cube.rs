//! Axis-aligned cube built from its six face planes.

use std::sync::Arc;

use crate::primitive::nearer;
use crate::{Intersect, Material, Plane, Primitive, Ray};
use glint_math::{Aabb, Vec3};

/// Slack added around the box so hits on edges and corners are not lost to
/// rounding.
const BOUNDS_EPSILON: f32 = 1e-6;

/// An axis-aligned cube with a center and an edge length.
pub struct Cube {
    faces: [Plane; 6],
    bounds: Aabb,
    material: Arc<Material>,
}

impl Cube {
    /// Create a new cube.
    pub fn new(center: Vec3, size: f32, material: Arc<Material>) -> Self {
        let half = size.abs() / 2.0;
        let face = |axis: Vec3| Plane::new(center + axis * half, axis, material.clone());

        let faces = [
            face(Vec3::X),
            face(Vec3::NEG_X),
            face(Vec3::Y),
            face(Vec3::NEG_Y),
            face(Vec3::Z),
            face(Vec3::NEG_Z),
        ];
        let bounds = Aabb::from_center_size(center, size).padded(BOUNDS_EPSILON);

        Self {
            faces,
            bounds,
            material,
        }
    }
}

impl Primitive for Cube {
    fn ray_intersect(&self, ray: &Ray) -> Option<Intersect> {
        self.faces
            .iter()
            .filter_map(|face| face.ray_intersect(ray))
            .filter(|hit| self.bounds.contains_point(hit.point))
            .fold(None, |best, hit| nearer(best, Some(hit)))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
