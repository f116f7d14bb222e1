use super::{BuildContext, Primitive};
use crate::core::bvh::{BVHNode, BVHPrimitive, BvhBuilder, FlatBVH};
use crate::core::device::Device;
use crate::core::handle::{HandleKind, NativeHandle};
use crate::core::sphere::SphereData;
use crate::error::BuildError;
use crate::math::AABB;
use crate::types::{BoxData, TriangleMesh};

/// Native geometry data a descriptor can carry
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Triangles(TriangleMesh),
    Spheres(Vec<SphereData>),
    Boxes(Vec<BoxData>),
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Triangles(_) => "triangles",
            Shape::Spheres(_) => "spheres",
            Shape::Boxes(_) => "boxes",
        }
    }

    pub fn primitive_count(&self) -> usize {
        match self {
            Shape::Triangles(mesh) => mesh.triangle_count(),
            Shape::Spheres(spheres) => spheres.len(),
            Shape::Boxes(boxes) => boxes.len(),
        }
    }

    /// Validated per-primitive bounds
    fn primitive_bounds(&self) -> Result<Vec<AABB>, String> {
        match self {
            Shape::Triangles(mesh) => mesh.triangle_bounds(),
            Shape::Spheres(spheres) => spheres
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    s.validate()
                        .map(|()| BVHPrimitive::bounds(s))
                        .map_err(|e| format!("sphere {i}: {e}"))
                })
                .collect(),
            Shape::Boxes(boxes) => boxes
                .iter()
                .enumerate()
                .map(|(i, b)| b.validate().map(|()| b.bounds()).map_err(|e| format!("box {i}: {e}")))
                .collect(),
        }
    }
}

/// Geometry descriptor
///
/// Bounds and the per-geometry hierarchy exist only after a successful
/// finalize; changing the shape discards both.
#[derive(Debug)]
pub struct Geometry {
    index: usize,
    handle: NativeHandle,
    shape: Shape,
    bounds: Option<AABB>,
    blas: Option<FlatBVH>,
}

impl Geometry {
    pub fn new(device: &Device, shape: Shape) -> Self {
        Self {
            index: 0,
            handle: device.allocate(HandleKind::Geometry),
            shape,
            bounds: None,
            blas: None,
        }
    }

    pub fn triangles(device: &Device, mesh: TriangleMesh) -> Self {
        Self::new(device, Shape::Triangles(mesh))
    }

    pub fn spheres(device: &Device, spheres: Vec<SphereData>) -> Self {
        Self::new(device, Shape::Spheres(spheres))
    }

    pub fn boxes(device: &Device, boxes: Vec<BoxData>) -> Self {
        Self::new(device, Shape::Boxes(boxes))
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.bounds = None;
        self.blas = None;
    }

    /// World bounds from the last successful finalize
    pub fn bounds(&self) -> Option<AABB> {
        self.bounds
    }

    /// Per-geometry hierarchy from the last successful finalize
    pub fn blas(&self) -> Option<&FlatBVH> {
        self.blas.as_ref()
    }

    pub fn is_finalized(&self) -> bool {
        self.bounds.is_some()
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

impl Primitive for Geometry {
    fn index(&self) -> usize {
        self.index
    }

    fn handle(&self) -> &NativeHandle {
        &self.handle
    }

    /// Validate the shape, build its hierarchy and compute world bounds
    fn finalize(&mut self, ctx: &BuildContext<'_>) -> Result<Option<AABB>, BuildError> {
        let index = self.index;
        self.bounds = None;
        self.blas = None;

        let count = self.shape.primitive_count();
        if count == 0 {
            return Err(BuildError::EmptyGeometry { index });
        }
        let limit = ctx.config.max_primitives_per_geometry;
        if count > limit {
            return Err(BuildError::ResourceExhausted { index, count, limit });
        }

        let primitive_bounds = self
            .shape
            .primitive_bounds()
            .map_err(|reason| BuildError::InvalidGeometry { index, reason })?;

        let root = BvhBuilder::from(ctx.config).build(&primitive_bounds);
        if let Some(stats) = root.as_ref().map(BVHNode::stats) {
            log::debug!(
                "geometry {} ({}): {} {}, {} BVH nodes, {} leaves (avg {:.1}), depth {} for {}",
                index,
                self.handle.id(),
                count,
                self.shape.name(),
                stats.num_nodes,
                stats.num_leaves,
                stats.avg_leaf_size,
                stats.max_depth,
                ctx.scene.structure_handle()
            );
        }
        let blas = root.map(|root| root.flatten()).unwrap_or_default();
        let bounds = blas.bounds();

        self.bounds = Some(bounds);
        self.blas = Some(blas);
        Ok(Some(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::traits::engine::{SceneContext, StructureHandle};
    use glam::Vec3;

    fn build(geometry: &mut Geometry, config: &BuildConfig) -> Result<AABB, BuildError> {
        let scene = SceneContext::new(StructureHandle(1), 1, 0);
        let bounds = geometry.finalize(&BuildContext {
            config,
            scene: &scene,
        })?;
        Ok(bounds.expect("geometries always report bounds"))
    }

    #[test]
    fn boxes_bounds_are_union() {
        let device = Device::default();
        let mut geometry = Geometry::boxes(
            &device,
            vec![
                BoxData::new([0.0; 3], [1.0; 3], [1.0; 3]),
                BoxData::new([-1.0, 2.0, 0.0], [0.0, 3.0, 0.5], [1.0; 3]),
            ],
        );
        assert!(!geometry.is_finalized());

        let bounds = build(&mut geometry, &BuildConfig::default()).unwrap();

        assert_eq!(bounds, AABB::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 3.0, 1.0)));
        assert_eq!(geometry.bounds(), Some(bounds));
        assert!(geometry.blas().is_some());
    }

    #[test]
    fn spheres_bounds_include_radius() {
        let device = Device::default();
        let mut geometry = Geometry::spheres(
            &device,
            vec![
                SphereData::new(Vec3::ZERO, 1.0, [1.0; 3]),
                SphereData::new(Vec3::new(4.0, 0.0, 0.0), 0.5, [1.0; 3]),
            ],
        );

        let bounds = build(&mut geometry, &BuildConfig::default()).unwrap();
        assert_eq!(bounds, AABB::new(Vec3::splat(-1.0), Vec3::new(4.5, 1.0, 1.0)));
    }

    #[test]
    fn empty_geometry_fails() {
        let device = Device::default();
        let mut geometry = Geometry::boxes(&device, Vec::new());
        let err = build(&mut geometry, &BuildConfig::default()).unwrap_err();
        assert_eq!(err, BuildError::EmptyGeometry { index: 0 });
        assert!(geometry.bounds().is_none());
    }

    #[test]
    fn primitive_budget_is_enforced() {
        let device = Device::default();
        let config = BuildConfig {
            max_primitives_per_geometry: 1,
            ..BuildConfig::default()
        };
        let mut geometry = Geometry::spheres(
            &device,
            vec![SphereData::new(Vec3::ZERO, 1.0, [1.0; 3]); 2],
        );

        let err = build(&mut geometry, &config).unwrap_err();
        assert_eq!(
            err,
            BuildError::ResourceExhausted {
                index: 0,
                count: 2,
                limit: 1
            }
        );
    }

    #[test]
    fn malformed_mesh_fails() {
        let device = Device::default();
        let mut geometry = Geometry::triangles(
            &device,
            TriangleMesh::new(vec![Vec3::ZERO, Vec3::X], vec![[0, 1, 2]]),
        );
        let err = build(&mut geometry, &BuildConfig::default()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidGeometry { index: 0, .. }));
    }

    #[test]
    fn set_shape_discards_bounds() {
        let device = Device::default();
        let mut geometry =
            Geometry::boxes(&device, vec![BoxData::new([0.0; 3], [1.0; 3], [1.0; 3])]);
        build(&mut geometry, &BuildConfig::default()).unwrap();

        geometry.set_shape(Shape::Boxes(vec![BoxData::new([0.0; 3], [2.0; 3], [1.0; 3])]));
        assert!(geometry.bounds().is_none());
        assert!(geometry.blas().is_none());
    }

    #[test]
    fn handle_released_on_drop() {
        let device = Device::default();
        let geometry = Geometry::boxes(&device, Vec::new());
        let id = geometry.handle().id();
        assert!(device.handles().is_live(id));

        drop(geometry);
        assert!(!device.handles().is_live(id));
    }

    #[test]
    fn finalize_through_dyn_primitive() {
        let device = Device::default();
        let config = BuildConfig::default();
        let scene = SceneContext::new(StructureHandle(1), 1, 0);
        let mut geometry = Geometry::spheres(&device, vec![SphereData::new(Vec3::ONE, 1.0, [1.0; 3])]);

        let primitive: &mut dyn Primitive = &mut geometry;
        let bounds = primitive
            .finalize(&BuildContext {
                config: &config,
                scene: &scene,
            })
            .unwrap();

        assert_eq!(bounds, Some(AABB::new(Vec3::ZERO, Vec3::splat(2.0))));
        assert_eq!(geometry.bounds(), bounds);
        assert!(geometry.blas().is_some_and(|blas| blas.bounds() == AABB::new(Vec3::ZERO, Vec3::splat(2.0))));
    }
}
