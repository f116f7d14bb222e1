use crate::core::bvh::BVHPrimitive;
use crate::math::AABB;
use glam::Vec3;

/// Sphere primitive, 32-byte GPU layout
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereData {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

impl SphereData {
    pub fn new(center: Vec3, radius: f32, color: [f32; 3]) -> Self {
        Self {
            center: center.to_array(),
            radius,
            color,
            _pad: 0.0,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::from_array(self.center)
    }

    /// Reason this sphere cannot be built, if any
    pub fn validate(&self) -> Result<(), String> {
        if !self.center().is_finite() {
            return Err(format!("sphere center {:?} is not finite", self.center));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(format!("sphere radius {} must be positive and finite", self.radius));
        }
        Ok(())
    }
}

impl BVHPrimitive for SphereData {
    fn bounds(&self) -> AABB {
        let r = Vec3::splat(self.radius);
        AABB::new(self.center() - r, self.center() + r)
    }

    fn centroid(&self) -> Vec3 {
        self.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_bounds_enclose_radius() {
        let sphere = SphereData::new(Vec3::new(1.0, 2.0, 3.0), 0.5, [1.0, 0.0, 0.0]);
        let bounds = sphere.bounds();
        assert_eq!(bounds.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(bounds.max, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(sphere.centroid(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn layout_is_two_vec4s() {
        assert_eq!(std::mem::size_of::<SphereData>(), 32);
        let sphere = SphereData::new(Vec3::new(1.0, 2.0, 3.0), 0.5, [0.2, 0.4, 0.6]);
        let words: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&sphere));
        assert_eq!(words, &[1.0, 2.0, 3.0, 0.5, 0.2, 0.4, 0.6, 0.0]);
    }

    #[test]
    fn validate_rejects_bad_radius() {
        assert!(SphereData::new(Vec3::ZERO, 1.0, [1.0; 3]).validate().is_ok());
        assert!(SphereData::new(Vec3::ZERO, 0.0, [1.0; 3]).validate().is_err());
        assert!(SphereData::new(Vec3::ZERO, -2.0, [1.0; 3]).validate().is_err());
        assert!(SphereData::new(Vec3::ZERO, f32::NAN, [1.0; 3]).validate().is_err());
    }

    #[test]
    fn validate_rejects_infinite_center() {
        let sphere = SphereData::new(Vec3::new(f32::INFINITY, 0.0, 0.0), 1.0, [1.0; 3]);
        assert!(sphere.validate().is_err());
    }
}
