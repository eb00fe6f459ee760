//! Recursive ray caster.
//!
//! Shades a hit with diffuse and Phong specular light from the scene's point
//! light, a hard shadow test, and recursive mirror reflection and refraction.

use crate::{Intersect, RenderConfig, Scene};
use glint_math::{reflect, refract, Color, Ray, Vec3};

/// Fraction of diffuse light removed at an occluded point.
pub const SHADOW_INTENSITY: f32 = 0.9;

/// How far secondary rays start from the surface, along the normal.
pub const SURFACE_OFFSET: f32 = 0.1;

/// Start point for a secondary ray leaving `hit` in `direction`: pushed off
/// the surface to whichever side the ray travels, so it cannot hit the same
/// surface at distance ~0.
#[inline]
fn offset_origin(hit: &Intersect, direction: Vec3) -> Vec3 {
    let offset = hit.normal * SURFACE_OFFSET;
    if direction.dot(hit.normal) >= 0.0 {
        hit.point + offset
    } else {
        hit.point - offset
    }
}

/// Compute the color seen along `ray`, at bounce `depth`.
///
/// Rays that miss, or that are past `config.max_depth`, return the
/// environment map sample (or background).
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32, config: &RenderConfig) -> Color {
    if depth >= config.max_depth {
        return scene.miss_color(ray.direction);
    }

    let Some((material, hit)) = scene.scene_intersect(ray) else {
        return scene.miss_color(ray.direction);
    };
    let albedo = material.albedo;

    let reflection = if albedo.reflection > 0.0 {
        let direction = reflect(ray.direction, hit.normal);
        let bounce = Ray::new(offset_origin(&hit, direction), direction);
        cast_ray(scene, &bounce, depth + 1, config)
    } else {
        Color::BLACK
    };

    let refraction = if albedo.refraction > 0.0 {
        match refract(ray.direction, hit.normal, material.refractive_index) {
            Some(direction) => {
                let through = Ray::new(offset_origin(&hit, direction), direction);
                cast_ray(scene, &through, depth + 1, config)
            }
            // Total internal reflection
            None => Color::BLACK,
        }
    } else {
        Color::BLACK
    };

    let (diffuse_intensity, specular_intensity, light_color) = match &scene.light {
        Some(light) => {
            let to_light = light.position - hit.point;
            let light_dir = to_light.normalize_or_zero();
            let light_distance = to_light.length();

            let shadow_origin = offset_origin(&hit, light_dir);
            let shadow_intensity = match scene.scene_intersect(&Ray::new(shadow_origin, light_dir)) {
                Some((_, blocker)) if (blocker.point - shadow_origin).length() <= light_distance => {
                    SHADOW_INTENSITY
                }
                _ => 0.0,
            };

            let diffuse =
                light.intensity * light_dir.dot(hit.normal).max(0.0) * (1.0 - shadow_intensity);

            // Highlights only where there is no diffuse light at all
            let specular = if diffuse > 0.0 {
                0.0
            } else {
                let highlight = reflect(light_dir, hit.normal).dot(ray.direction).max(0.0);
                light.intensity * highlight.powf(material.specular_exponent)
            };

            (diffuse, specular, light.color)
        }
        None => (0.0, 0.0, Color::BLACK),
    };

    material.diffuse * diffuse_intensity * albedo.diffuse
        + light_color * specular_intensity * albedo.specular
        + reflection * albedo.reflection
        + refraction * albedo.refraction
}
