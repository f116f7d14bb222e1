use super::{BuildContext, Primitive};
use crate::core::device::Device;
use crate::core::handle::{HandleKind, NativeHandle};
use crate::error::BuildError;
use crate::math::AABB;
use glam::{UVec3, Vec3};

/// Regular grid of scalar samples
#[derive(Clone, Debug, PartialEq)]
pub struct StructuredVolume {
    dimensions: UVec3,
    origin: Vec3,
    spacing: Vec3,
    voxels: Vec<f32>,
}

impl StructuredVolume {
    /// Grid with unit spacing at the origin; voxels are x-fastest
    pub fn new(dimensions: [u32; 3], voxels: Vec<f32>) -> Result<Self, BuildError> {
        let dimensions = UVec3::from_array(dimensions);
        if dimensions.min_element() == 0 {
            return Err(BuildError::InvalidVolume(format!(
                "dimensions {dimensions} must be non-zero"
            )));
        }
        let expected = dimensions
            .to_array()
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
            .ok_or_else(|| BuildError::InvalidVolume(format!("dimensions {dimensions} overflow")))?;
        if voxels.len() != expected {
            return Err(BuildError::InvalidVolume(format!(
                "expected {expected} voxels for {dimensions}, got {}",
                voxels.len()
            )));
        }

        Ok(Self {
            dimensions,
            origin: Vec3::ZERO,
            spacing: Vec3::ONE,
            voxels,
        })
    }

    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_spacing(mut self, spacing: Vec3) -> Result<Self, BuildError> {
        if !(spacing.is_finite() && spacing.min_element() > 0.0) {
            return Err(BuildError::InvalidVolume(format!(
                "spacing {spacing} must be positive"
            )));
        }
        self.spacing = spacing;
        Ok(self)
    }

    pub fn dimensions(&self) -> UVec3 {
        self.dimensions
    }

    pub fn voxels(&self) -> &[f32] {
        &self.voxels
    }

    /// World-space extent spanned by the sample positions
    pub fn bounds(&self) -> AABB {
        let extent = (self.dimensions - UVec3::ONE).as_vec3() * self.spacing;
        AABB::new(self.origin, self.origin + extent)
    }

    /// Min and max sample value, ignoring NaNs
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.voxels
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Volume descriptor
///
/// Valid from construction. The scene model registers it without a build
/// step and it does not contribute to aggregate bounds.
#[derive(Debug)]
pub struct Volume {
    index: usize,
    handle: NativeHandle,
    grid: StructuredVolume,
}

impl Volume {
    pub fn new(device: &Device, grid: StructuredVolume) -> Self {
        Self {
            index: 0,
            handle: device.allocate(HandleKind::Volume),
            grid,
        }
    }

    pub fn grid(&self) -> &StructuredVolume {
        &self.grid
    }

    pub fn bounds(&self) -> AABB {
        self.grid.bounds()
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl Primitive for Volume {
    fn index(&self) -> usize {
        self.index
    }

    fn handle(&self) -> &NativeHandle {
        &self.handle
    }

    fn finalize(&mut self, _ctx: &BuildContext<'_>) -> Result<Option<AABB>, BuildError> {
        Ok(None)
    }
}
