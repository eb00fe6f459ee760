//! Reflection and refraction directions.

use crate::Vec3;

/// Mirror `i` about the normal `n`: `normalize(i - n * 2 dot(i, n))`.
///
/// Applying it twice with a unit `n` returns the original direction.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    (i - n * (2.0 * i.dot(n))).normalize_or_zero()
}

/// Refract the unit direction `i` through a surface with outward normal `n`
/// into a medium of index `eta_t` (the outside is taken to be air, index 1).
///
/// A ray travelling against `n` enters the medium; a ray travelling along `n`
/// exits it, in which case the indices swap and the normal flips.
///
/// Returns `None` on total internal reflection, and for a non-positive index.
pub fn refract(i: Vec3, n: Vec3, eta_t: f32) -> Option<Vec3> {
    if eta_t <= 0.0 {
        return None;
    }

    let mut cosi = -i.dot(n).clamp(-1.0, 1.0);
    let mut etai = 1.0;
    let mut etat = eta_t;
    let mut n = n;

    if cosi < 0.0 {
        cosi = -cosi;
        std::mem::swap(&mut etai, &mut etat);
        n = -n;
    }

    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        return None;
    }

    Some((i * eta + n * (eta * cosi - k.sqrt())).normalize_or_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_normalize_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1e-3, 2e-3, 5e-4),
            Vec3::new(1e4, -3e3, 7.0),
        ] {
            assert!((v.normalize_or_zero().length() - 1.0).abs() < 1e-5);
        }
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
    }

    #[test]
    fn test_reflect_off_floor() {
        let i = Vec3::new(1.0, -1.0, 0.0).normalize();
        let r = reflect(i, Vec3::Y);
        assert!(approx_eq(r, Vec3::new(1.0, 1.0, 0.0).normalize()));
    }

    #[test]
    fn test_reflect_involution() {
        let n = Vec3::new(0.3, 1.0, -0.2).normalize();
        for i in [
            Vec3::new(1.0, -1.0, 0.0).normalize(),
            Vec3::new(-0.2, -0.5, -1.0).normalize(),
            Vec3::new(0.0, 0.0, 1.0),
        ] {
            assert!(approx_eq(reflect(reflect(i, n), n), i));
        }
    }

    #[test]
    fn test_refract_normal_incidence_goes_straight() {
        let i = Vec3::new(0.0, 0.0, -1.0);
        let t = refract(i, Vec3::Z, 1.5).unwrap();
        assert!(approx_eq(t, i));
    }

    #[test]
    fn test_refract_bends_towards_normal() {
        let i = Vec3::new(1.0, 0.0, -1.0).normalize();
        let t = refract(i, Vec3::Z, 1.5).unwrap();

        // Snell: sin(t) = sin(i) / 1.5
        let sin_i = i.x;
        assert!((t.x - sin_i / 1.5).abs() < 1e-5);
        assert!(t.z < 0.0);
    }

    #[test]
    fn test_refract_exit_and_total_internal_reflection() {
        // Leaving glass at a shallow angle: reflected back inside
        let grazing = Vec3::new(1.0, 0.0, 0.2).normalize();
        assert!(refract(grazing, Vec3::Z, 1.5).is_none());

        // Leaving glass head-on still passes through
        let t = refract(Vec3::Z, Vec3::Z, 1.5).unwrap();
        assert!(approx_eq(t, Vec3::Z));
    }

    #[test]
    fn test_refract_rejects_unset_index() {
        assert!(refract(Vec3::new(0.0, 0.0, -1.0), Vec3::Z, 0.0).is_none());
    }
}
