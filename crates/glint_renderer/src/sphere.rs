//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{Intersect, Material, Primitive, Ray};
use glint_math::{Interval, Vec3};

/// A sphere primitive.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Primitive for Sphere {
    fn ray_intersect(&self, ray: &Ray) -> Option<Intersect> {
        // Geometric solution: project the center onto the ray
        let l = self.center - ray.origin;
        let tca = l.dot(ray.direction);
        let d2 = l.length_squared() - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();

        // Nearest root in front of the origin; the far root when starting inside
        let mut t = tca - thc;
        if !Interval::FORWARD.surrounds(t) {
            t = tca + thc;
            if !Interval::FORWARD.surrounds(t) {
                return None;
            }
        }

        let point = ray.at(t);
        let normal = (point - self.center).normalize_or_zero();
        Some(Intersect::new(t, point, normal))
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn grey() -> Arc<Material> {
        Arc::new(Material::new(Color::new(128.0, 128.0, 128.0), [1.0, 0.0, 0.0, 0.0], 1.0))
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.5, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.ray_intersect(&ray).unwrap();
        assert!((hit.distance - 8.5).abs() < 1e-5);
        assert!((hit.point - Vec3::new(0.0, 0.0, -8.5)).length() < 1e-5);
        assert!((hit.normal - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.5, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.ray_intersect(&ray).is_none());

        // Ray passing beside it
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.ray_intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, grey());
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.ray_intersect(&ray).unwrap();
        assert!((hit.distance - 2.0).abs() < 1e-5);
        // Normal still points outward
        assert!((hit.normal - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_sphere_normal_is_unit() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, -7.0), 3.0, grey());
        let ray = Ray::normalized(Vec3::ZERO, Vec3::new(0.3, 0.2, -1.0));

        let hit = sphere.ray_intersect(&ray).unwrap();
        assert!((hit.normal.length() - 1.0).abs() < 1e-5);
        assert!(hit.distance > 0.0);
    }
}
