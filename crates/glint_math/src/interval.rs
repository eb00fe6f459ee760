/// A closed range of reals, used for ray parameter bounds, box extents and
/// color channel limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Valid ray parameters for a forward hit: strictly positive, unbounded.
    ///
    /// Use with [`Interval::surrounds`] so that t == 0 is rejected.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::INFINITY,
    };

    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// `min <= x <= max`
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// `min < x < max`
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Widen by `delta` in total, half on each end.
    pub fn expand(&self, delta: f32) -> Interval {
        let half = delta / 2.0;
        Interval::new(self.min - half, self.max + half)
    }
}
