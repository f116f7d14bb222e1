use crate::core::device::Device;
use crate::model::SceneModel;
use crate::primitive::Geometry;
use crate::types::{BoxData, TriangleMesh};
use glam::Vec3;

/// Square pyramid: 4 sides + 2 base triangles
pub fn create_pyramid_mesh() -> TriangleMesh {
    let base_size = 4.0;
    let vertices = vec![
        Vec3::new(-base_size, 0.0, -base_size), // front-left
        Vec3::new(base_size, 0.0, -base_size),  // front-right
        Vec3::new(base_size, 0.0, base_size),   // back-right
        Vec3::new(-base_size, 0.0, base_size),  // back-left
        Vec3::new(0.0, 5.0, 0.0),               // apex
    ];
    let indices = vec![
        [0, 1, 4],
        [1, 2, 4],
        [2, 3, 4],
        [3, 0, 4],
        [0, 2, 1],
        [0, 3, 2],
    ];
    TriangleMesh::new(vertices, indices)
}

/// Ground slab plus the pyramid mesh
pub fn create_pyramid_scene(device: &Device) -> SceneModel {
    let mut model = SceneModel::new(device);

    let ground = BoxData::new([-10.0, -0.5, -10.0], [10.0, 0.0, 10.0], [0.3, 0.3, 0.3]);
    model.add_geometry(Geometry::boxes(device, vec![ground]));
    model.add_geometry(Geometry::triangles(device, create_pyramid_mesh()));

    log::info!("pyramid scene created: {model}");
    model
}
