use crate::core::device::Device;
use crate::core::sphere::SphereData;
use crate::error::Result;
use crate::math::hsv_to_rgb;
use crate::model::SceneModel;
use crate::primitive::{Geometry, StructuredVolume, Volume};
use crate::types::BoxData;
use glam::Vec3;

const WALL_HEIGHT: f32 = 50.0;
const WALL_THICKNESS: f32 = 2.0;
const BOX_SIZE: f32 = 2.0;
const SPACING: f32 = 0.2;
const HALF_EXTENT: f32 = 50.0;

/// Four walls of boxes, rings of pillars, a few spheres and a fog volume.
/// Each wall and each ring is its own geometry.
pub fn create_walls_scene(device: &Device) -> Result<SceneModel> {
    let mut model = SceneModel::new(device);

    let ground = BoxData::new([-200.0, -1.0, -200.0], [200.0, -0.99, 200.0], [0.15, 0.15, 0.15]);
    model.add_geometry(Geometry::boxes(device, vec![ground]));

    let per_segment = ((2.0 * HALF_EXTENT / (BOX_SIZE + SPACING)) as i32).max(1);
    let per_height = ((WALL_HEIGHT / (BOX_SIZE + SPACING)) as i32).max(1);

    // north, south, west, east
    let mut walls: [Vec<BoxData>; 4] = Default::default();
    for layer in 0..per_height {
        for segment in 0..per_segment {
            let y = layer as f32 * (BOX_SIZE + SPACING);
            let along = -HALF_EXTENT + segment as f32 * (BOX_SIZE + SPACING);
            let progress =
                (segment as f32 / per_segment as f32 + layer as f32 / per_height as f32 * 0.3) % 1.0;
            let color = hsv_to_rgb(progress, 0.8, 0.9);

            walls[0].push(BoxData::new(
                [along, y, -HALF_EXTENT - WALL_THICKNESS],
                [along + BOX_SIZE, y + BOX_SIZE, -HALF_EXTENT],
                color,
            ));
            walls[1].push(BoxData::new(
                [along, y, HALF_EXTENT],
                [along + BOX_SIZE, y + BOX_SIZE, HALF_EXTENT + WALL_THICKNESS],
                color,
            ));
            walls[2].push(BoxData::new(
                [-HALF_EXTENT - WALL_THICKNESS, y, along],
                [-HALF_EXTENT, y + BOX_SIZE, along + BOX_SIZE],
                color,
            ));
            walls[3].push(BoxData::new(
                [HALF_EXTENT, y, along],
                [HALF_EXTENT + WALL_THICKNESS, y + BOX_SIZE, along + BOX_SIZE],
                color,
            ));
        }
    }
    for wall in walls {
        model.add_geometry(Geometry::boxes(device, wall));
    }

    for ring in 0..5 {
        let radius = 20.0 + ring as f32 * 5.0;
        let count = 32 + ring * 8;
        let height = 10.0 + ring as f32 * 3.0;

        let pillars = (0..count)
            .map(|i| {
                let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
                let x = angle.cos() * radius;
                let z = angle.sin() * radius;
                let hue = (i as f32 / count as f32 + ring as f32 * 0.1) % 1.0;
                BoxData::new([x - 1.5, 0.0, z - 1.5], [x + 1.5, height, z + 1.5], hsv_to_rgb(hue, 0.7, 0.85))
            })
            .collect();
        model.add_geometry(Geometry::boxes(device, pillars));
    }

    let spheres = vec![
        SphereData::new(Vec3::new(0.0, 10.0, 0.0), 5.0, [1.0, 0.3, 0.3]),
        SphereData::new(Vec3::new(-15.0, 8.0, -15.0), 4.0, [0.3, 1.0, 0.3]),
        SphereData::new(Vec3::new(15.0, 8.0, -15.0), 4.0, [0.3, 0.3, 1.0]),
    ];
    model.add_geometry(Geometry::spheres(device, spheres));

    let fog = StructuredVolume::new([8, 4, 8], vec![0.05; 8 * 4 * 8])?
        .with_origin(Vec3::new(-HALF_EXTENT, 0.0, -HALF_EXTENT))
        .with_spacing(Vec3::new(2.0 * HALF_EXTENT / 7.0, WALL_HEIGHT / 3.0, 2.0 * HALF_EXTENT / 7.0))?;
    model.add_volume(Volume::new(device, fog));

    log::info!("walls scene created: {model}");
    Ok(model)
}
