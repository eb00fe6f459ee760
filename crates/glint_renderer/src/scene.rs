//! The scene: primitives, light and background, plus the nearest-hit query.

use crate::{Intersect, Light, Material, Primitive, Ray};
use glint_core::EnvironmentMap;
use glint_math::{Color, Vec3};

/// Everything a render reads. Nothing here is mutated while rendering.
pub struct Scene {
    objects: Vec<Box<dyn Primitive>>,
    /// The single point light; without one, surfaces get no local lighting
    pub light: Option<Light>,
    /// Sampled by rays that escape the scene, in place of `background`
    pub envmap: Option<EnvironmentMap>,
    /// Color of escaping rays when there is no environment map
    pub background: Color,
}

impl Scene {
    /// Create an empty scene with a black background and no light.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            light: None,
            envmap: None,
            background: Color::BLACK,
        }
    }

    /// Add an object to the scene. Scan order is insertion order.
    pub fn add(&mut self, object: Box<dyn Primitive>) {
        self.objects.push(object);
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }

    pub fn with_envmap(mut self, envmap: EnvironmentMap) -> Self {
        self.envmap = Some(envmap);
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the nearest object hit by `ray`.
    ///
    /// Tests every object in order and keeps the strictly closer hit, so on
    /// an exact distance tie the earlier object wins.
    pub fn scene_intersect(&self, ray: &Ray) -> Option<(&Material, Intersect)> {
        let mut closest: Option<(&Material, Intersect)> = None;

        for object in &self.objects {
            if let Some(hit) = object.ray_intersect(ray) {
                let closer = match &closest {
                    Some((_, best)) => hit.distance < best.distance,
                    None => true,
                };
                if closer {
                    closest = Some((object.material(), hit));
                }
            }
        }

        closest
    }

    /// Color seen by a ray that leaves the scene in `direction`.
    pub fn miss_color(&self, direction: Vec3) -> Color {
        match &self.envmap {
            Some(envmap) => envmap.get_color(direction),
            None => self.background,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;
    use std::sync::Arc;

    fn material(r: f32) -> Arc<Material> {
        Arc::new(Material::new(Color::new(r, 0.0, 0.0), [1.0, 0.0, 0.0, 0.0], 1.0))
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_nearest_hit_regardless_of_order() {
        let near = || Box::new(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, material(1.0)));
        let far = || Box::new(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 3.0, material(2.0)));

        let mut scene = Scene::new();
        scene.add(far());
        scene.add(near());
        let (m, hit) = scene.scene_intersect(&forward()).unwrap();
        assert_eq!(m.diffuse.r, 1.0);
        assert!((hit.distance - 4.0).abs() < 1e-5);

        let mut scene = Scene::new();
        scene.add(near());
        scene.add(far());
        let (m, _) = scene.scene_intersect(&forward()).unwrap();
        assert_eq!(m.diffuse.r, 1.0);
    }

    #[test]
    fn test_exact_tie_keeps_first() {
        let center = Vec3::new(0.0, 0.0, -5.0);
        let mut scene = Scene::new();
        scene.add(Box::new(Sphere::new(center, 1.0, material(1.0))));
        scene.add(Box::new(Sphere::new(center, 1.0, material(2.0))));

        let (m, _) = scene.scene_intersect(&forward()).unwrap();
        assert_eq!(m.diffuse.r, 1.0);
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert!(scene.scene_intersect(&forward()).is_none());
    }

    #[test]
    fn test_miss_color() {
        let background = Color::new(10.0, 20.0, 30.0);
        let scene = Scene::new().with_background(background);
        assert_eq!(scene.miss_color(Vec3::Z), background);

        let envmap = EnvironmentMap::from_texels(1, 1, vec![Color::new(1.0, 2.0, 3.0)]);
        let scene = scene.with_envmap(envmap);
        assert_eq!(scene.miss_color(Vec3::NEG_Y), Color::new(1.0, 2.0, 3.0));
    }
}
