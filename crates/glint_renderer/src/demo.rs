//! Built-in demo scenes.

use std::sync::Arc;

use crate::{Cube, GeometryError, Light, Material, Plane, Pyramid, Scene, Sphere, Triangle};
use glint_math::{Color, Vec3};

/// Four spheres (ivory, glass, rubber and mirror) under one warm light.
pub fn spheres() -> Scene {
    let ivory = Arc::new(Material::ivory());
    let rubber = Arc::new(Material::rubber());
    let mirror = Arc::new(Material::mirror());
    let glass = Arc::new(Material::glass());

    let mut scene = Scene::new().with_light(Light::new(
        Vec3::new(-20.0, -20.0, 20.0),
        2.0,
        Color::new(255.0, 255.0, 200.0),
    ));

    scene.add(Box::new(Sphere::new(Vec3::new(0.0, -1.5, -10.0), 1.5, ivory)));
    scene.add(Box::new(Sphere::new(Vec3::new(-2.0, 1.0, -5.0), 2.0, glass)));
    scene.add(Box::new(Sphere::new(Vec3::new(1.0, -1.0, -8.0), 1.0, rubber)));
    scene.add(Box::new(Sphere::new(Vec3::new(0.0, 5.0, -20.0), 2.0, mirror)));
    scene
}

/// A floor, a cube, a pyramid and a free-standing triangle.
pub fn shapes() -> Result<Scene, GeometryError> {
    let ivory = Arc::new(Material::ivory());
    let rubber = Arc::new(Material::rubber());
    let mirror = Arc::new(Material::mirror());
    let glass = Arc::new(Material::glass());
    let floor = Arc::new(Material::new(
        Color::new(90.0, 90.0, 110.0),
        [0.8, 0.1, 0.2, 0.0],
        30.0,
    ));

    let mut scene = Scene::new().with_light(Light::new(
        Vec3::new(-10.0, 15.0, 10.0),
        1.5,
        Color::new(255.0, 255.0, 230.0),
    ));

    scene.add(Box::new(Plane::new(Vec3::new(0.0, -2.0, 0.0), Vec3::Y, floor)));
    scene.add(Box::new(Cube::new(Vec3::new(-2.5, -1.0, -9.0), 2.0, rubber)));
    scene.add(Box::new(Pyramid::new(
        &[
            Vec3::new(1.0, -2.0, -7.0),
            Vec3::new(3.5, -2.0, -7.5),
            Vec3::new(2.0, -2.0, -9.5),
            Vec3::new(2.2, 1.0, -8.0),
        ],
        ivory,
    )?));
    scene.add(Box::new(Triangle::new(
        Vec3::new(-1.0, 1.0, -14.0),
        Vec3::new(3.0, 1.0, -14.0),
        Vec3::new(1.0, 4.0, -14.0),
        mirror,
    )));
    scene.add(Box::new(Sphere::new(Vec3::new(0.0, -1.0, -5.0), 1.0, glass)));
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, Camera, RenderConfig};

    #[test]
    fn test_spheres_scene() {
        let scene = spheres();
        assert_eq!(scene.len(), 4);
        assert!(scene.light.is_some());
        assert_eq!(scene.background, Color::BLACK);
    }

    #[test]
    fn test_shapes_scene_renders() {
        let scene = shapes().unwrap();
        assert_eq!(scene.len(), 5);

        let image = render(&Camera::new(8, 6), &scene, &RenderConfig::default());
        // The floor fills the bottom row
        assert_ne!(image.get(4, 5), scene.background);
    }
}
