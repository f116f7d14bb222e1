use crate::core::bvh::BVHPrimitive;
use crate::math::AABB;
use glam::Vec3;

/// Box primitive data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BoxData {
    pub min: [f32; 3],
    pub _pad1: f32,
    pub max: [f32; 3],
    pub _pad2: f32,
    pub color: [f32; 3],
    pub _pad3: f32,
}

impl BoxData {
    pub const fn new(min: [f32; 3], max: [f32; 3], color: [f32; 3]) -> Self {
        Self {
            min,
            _pad1: 0.0,
            max,
            _pad2: 0.0,
            color,
            _pad3: 0.0,
        }
    }

    /// Box of `size` centered on `center`
    pub fn centered(center: Vec3, size: Vec3, color: [f32; 3]) -> Self {
        let half = size * 0.5;
        Self::new((center - half).to_array(), (center + half).to_array(), color)
    }

    pub fn bounds(&self) -> AABB {
        AABB {
            min: Vec3::from_array(self.min),
            max: Vec3::from_array(self.max),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let bounds = self.bounds();
        if !bounds.is_finite() {
            return Err(format!("box {:?}..{:?} is not finite", self.min, self.max));
        }
        if bounds.is_empty() {
            return Err(format!("box min {:?} exceeds max {:?}", self.min, self.max));
        }
        Ok(())
    }
}

impl BVHPrimitive for BoxData {
    fn bounds(&self) -> AABB {
        BoxData::bounds(self)
    }
}

/// Indexed triangle mesh
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    pub vertices: Vec<Vec3>,
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Per-triangle bounds, or the first reason the mesh is malformed
    pub fn triangle_bounds(&self) -> Result<Vec<AABB>, String> {
        if let Some(i) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(format!("vertex {i} is not finite"));
        }

        let vertex_count = self.vertices.len();
        self.indices
            .iter()
            .enumerate()
            .map(|(t, tri)| {
                let corners = tri.iter().map(|&i| {
                    self.vertices.get(i as usize).copied().ok_or_else(|| {
                        format!("triangle {t} references vertex {i}, mesh has {vertex_count}")
                    })
                });
                corners
                    .collect::<Result<Vec<Vec3>, String>>()
                    .map(AABB::from_points)
            })
            .collect()
    }
}
