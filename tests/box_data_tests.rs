use glam::Vec3;
use ray_scene::math::AABB;
use ray_scene::types::{BoxData, TriangleMesh};

#[cfg(test)]
mod box_data_tests {
    use super::*;

    #[test]
    fn test_box_data_creation() {
        let box_data = BoxData::new([0.0; 3], [10.0; 3], [1.0, 0.0, 0.0]);

        assert_eq!(box_data.min, [0.0; 3]);
        assert_eq!(box_data.max, [10.0; 3]);
        assert_eq!(box_data.color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_box_data_is_gpu_sized() {
        assert_eq!(std::mem::size_of::<BoxData>(), 48);
        let boxes = [BoxData::new([0.0; 3], [1.0; 3], [1.0; 3]); 2];
        assert_eq!(bytemuck::cast_slice::<BoxData, u8>(&boxes).len(), 96);
    }

    #[test]
    fn test_box_data_centered() {
        let b = BoxData::centered(Vec3::new(5.0, 10.0, 15.0), Vec3::new(2.0, 4.0, 6.0), [0.0; 3]);
        assert_eq!(b.min, [4.0, 8.0, 12.0]);
        assert_eq!(b.max, [6.0, 12.0, 18.0]);
    }

    #[test]
    fn test_box_data_bounds() {
        let b = BoxData::new([5.0, 10.0, 15.0], [15.0, 20.0, 25.0], [0.0, 1.0, 0.0]);
        assert_eq!(
            b.bounds(),
            AABB::new(Vec3::new(5.0, 10.0, 15.0), Vec3::new(15.0, 20.0, 25.0))
        );
    }

    #[test]
    fn test_box_data_validation() {
        assert!(BoxData::new([0.0; 3], [1.0; 3], [1.0; 3]).validate().is_ok());
        assert!(BoxData::new([0.0; 3], [0.0, 1.0, 1.0], [1.0; 3]).validate().is_ok());
        assert!(BoxData::new([1.0; 3], [0.0; 3], [1.0; 3]).validate().is_err());
        assert!(BoxData::new([0.0; 3], [f32::NAN, 1.0, 1.0], [1.0; 3]).validate().is_err());
    }

    #[test]
    fn test_triangle_mesh_bounds() {
        let mesh = TriangleMesh::new(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::new(0.0, 0.0, 2.0)],
            vec![[0, 1, 2], [0, 1, 3]],
        );
        let bounds = mesh.triangle_bounds().unwrap();

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(bounds[0], AABB::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(bounds[1], AABB::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 2.0)));
    }

    #[test]
    fn test_triangle_mesh_rejects_bad_index() {
        let mesh = TriangleMesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![[0, 1, 3]]);
        assert!(mesh.triangle_bounds().is_err());
    }
}
