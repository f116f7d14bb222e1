use glam::Vec3;

/// World-space axis-aligned bounding box.
///
/// `AABB::EMPTY` is the identity for `union`/`extend`: it has inverted
/// infinite extents, so extending it by any box yields that box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub const EMPTY: AABB = AABB {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing every point, `EMPTY` for no points
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        points.into_iter().fold(Self::EMPTY, |acc, p| AABB {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow in place to enclose `other`
    pub fn extend(&mut self, other: &AABB) {
        *self = self.union(other);
    }

    /// True when no point lies inside (min > max on some axis)
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn contains(&self, other: &AABB) -> bool {
        other.is_empty() || (self.min.cmple(other.min).all() && self.max.cmpge(other.max).all())
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn surface_area(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let d = self.max - self.min;
        2.0 * (d.x * d.y + d.y * d.z + d.z * d.x)
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new() {
        let min = Vec3::new(0.0, 0.0, 0.0);
        let max = Vec3::new(1.0, 1.0, 1.0);
        let aabb = AABB::new(min, max);
        assert_eq!(aabb.min, min);
        assert_eq!(aabb.max, max);
        assert!(!aabb.is_empty());
    }

    #[test]
    fn test_empty_is_union_identity() {
        let aabb = AABB::new(Vec3::new(-1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(AABB::EMPTY.union(&aabb), aabb);
        assert_eq!(aabb.union(&AABB::EMPTY), aabb);
        assert!(AABB::EMPTY.is_empty());
        assert_eq!(AABB::default(), AABB::EMPTY);
    }

    #[test]
    fn test_extend_accumulates() {
        let mut bounds = AABB::EMPTY;
        bounds.extend(&AABB::new(Vec3::ZERO, Vec3::ONE));
        bounds.extend(&AABB::new(Vec3::ONE, Vec3::splat(2.0)));
        assert_eq!(bounds, AABB::new(Vec3::ZERO, Vec3::splat(2.0)));
    }

    #[test]
    fn test_from_points() {
        let aabb = AABB::from_points([
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        ]);
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 2.0));
        assert!(AABB::from_points(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_contains() {
        let outer = AABB::new(Vec3::ZERO, Vec3::splat(5.0));
        let inner = AABB::new(Vec3::ONE, Vec3::splat(2.0));
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(inner.contains(&AABB::EMPTY));
    }

    #[test]
    fn test_aabb_center() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_surface_area_unit_cube() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        let area = aabb.surface_area();
        assert!((area - 6.0).abs() < 0.01); // Unit cube has surface area of 6
    }

    #[test]
    fn test_empty_surface_area_is_zero() {
        assert_eq!(AABB::EMPTY.surface_area(), 0.0);
    }

    #[test]
    fn test_aabb_union_negative_coords() {
        let aabb1 = AABB::new(Vec3::new(-3.0, -3.0, -3.0), Vec3::new(-1.0, -1.0, -1.0));
        let aabb2 = AABB::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(3.0, 3.0, 3.0));
        let union = aabb1.union(&aabb2);
        assert_eq!(union.min, Vec3::new(-3.0, -3.0, -3.0));
        assert_eq!(union.max, Vec3::new(3.0, 3.0, 3.0));
    }
}
