use crate::{Interval, Vec3};

/// Axis-aligned bounding box, one [`Interval`] per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    /// Box spanned by two opposite corners, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let lo = a.min(b);
        let hi = a.max(b);
        Self::new(
            Interval::new(lo.x, hi.x),
            Interval::new(lo.y, hi.y),
            Interval::new(lo.z, hi.z),
        )
    }

    /// Cube-shaped box from its center and edge length.
    pub fn from_center_size(center: Vec3, size: f32) -> Self {
        let half = Vec3::splat(size.abs() / 2.0);
        Self::from_points(center - half, center + half)
    }

    /// Grow every axis by `margin` on both sides.
    pub fn padded(&self, margin: f32) -> Aabb {
        Aabb::new(
            self.x.expand(2.0 * margin),
            self.y.expand(2.0 * margin),
            self.z.expand(2.0 * margin),
        )
    }

    /// Inside or on the boundary, on all three axes.
    pub fn contains_point(&self, p: Vec3) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y) && self.z.contains(p.z)
    }
}
