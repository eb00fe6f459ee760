//! Tetrahedral pyramid made of four triangles.

use std::sync::Arc;

use crate::primitive::nearer;
use crate::{GeometryError, Intersect, Material, Primitive, Ray, Triangle};
use glint_math::Vec3;

/// A pyramid with four vertices (a tetrahedron).
pub struct Pyramid {
    faces: [Triangle; 4],
    material: Arc<Material>,
}

impl Pyramid {
    /// Build a pyramid from exactly four vertices.
    ///
    /// Faces are `[v0, v3, v2]`, `[v0, v1, v2]`, `[v1, v3, v2]` and
    /// `[v0, v1, v3]`.
    pub fn new(vertices: &[Vec3], material: Arc<Material>) -> Result<Self, GeometryError> {
        let &[v0, v1, v2, v3] = vertices else {
            return Err(GeometryError::PyramidVertexCount(vertices.len()));
        };

        let tri = |a, b, c| Triangle::new(a, b, c, material.clone());
        let faces = [
            tri(v0, v3, v2),
            tri(v0, v1, v2),
            tri(v1, v3, v2),
            tri(v0, v1, v3),
        ];

        Ok(Self { faces, material })
    }
}

impl Primitive for Pyramid {
    fn ray_intersect(&self, ray: &Ray) -> Option<Intersect> {
        self.faces
            .iter()
            .fold(None, |best, face| nearer(best, face.ray_intersect(ray)))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn material() -> Arc<Material> {
        Arc::new(Material::new(Color::WHITE, [1.0, 0.0, 0.0, 0.0], 1.0))
    }

    /// Base triangle at z = -5, apex towards the viewer at z = -3.
    fn vertices() -> Vec<Vec3> {
        vec![
            Vec3::new(-1.0, -1.0, -5.0),
            Vec3::new(1.0, -1.0, -5.0),
            Vec3::new(0.0, 1.0, -5.0),
            Vec3::new(0.0, 0.0, -3.0),
        ]
    }

    #[test]
    fn test_pyramid_rejects_wrong_vertex_count() {
        let three = &vertices()[..3];
        assert_eq!(
            Pyramid::new(three, material()).err(),
            Some(GeometryError::PyramidVertexCount(3))
        );

        let mut five = vertices();
        five.push(Vec3::ZERO);
        assert!(Pyramid::new(&five, material()).is_err());
    }

    #[test]
    fn test_pyramid_hits_nearest_face() {
        let pyramid = Pyramid::new(&vertices(), material()).unwrap();
        let ray = Ray::new(Vec3::new(0.0, -0.2, 0.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = pyramid.ray_intersect(&ray).unwrap();

        // Lower face [v0, v1, v3] lies on z = 2y - 3; the base is 1.6 further back
        assert!((hit.distance - 3.4).abs() < 1e-4, "distance {}", hit.distance);
        assert!((hit.point - Vec3::new(0.0, -0.2, -3.4)).length() < 1e-4);
        let expected_normal = Vec3::new(0.0, -2.0, 1.0).normalize();
        assert!((hit.normal - expected_normal).length() < 1e-4, "normal {:?}", hit.normal);
    }

    #[test]
    fn test_pyramid_miss() {
        let pyramid = Pyramid::new(&vertices(), material()).unwrap();
        let ray = Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(pyramid.ray_intersect(&ray).is_none());
    }
}
