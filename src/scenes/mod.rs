mod pyramid;
mod walls;

pub use pyramid::{create_pyramid_mesh, create_pyramid_scene};
pub use walls::create_walls_scene;

use crate::core::device::Device;
use crate::error::Result;
use crate::lights::{Light, LightSet};
use crate::math::hsv_to_rgb;
use crate::model::SceneModel;
use glam::Vec3;

/// Demo scenes the binary can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SceneKind {
    Pyramid,
    Walls,
}

pub fn create_scene(kind: SceneKind, device: &Device) -> Result<SceneModel> {
    match kind {
        SceneKind::Pyramid => Ok(create_pyramid_scene(device)),
        SceneKind::Walls => create_walls_scene(device),
    }
}

/// Ambient fill, a sun and a ring of colored point lights
pub fn populate_lights(lights: &mut LightSet, ring: usize) {
    lights.add(Light::ambient([1.0, 1.0, 1.0], 0.15));
    lights.add(Light::directional(Vec3::new(-0.3, -1.0, -0.2), [1.0, 0.95, 0.9], 1.0));
    for i in 0..ring {
        let t = i as f32 / ring.max(1) as f32;
        let angle = t * std::f32::consts::TAU;
        lights.add(Light::point(
            Vec3::new(angle.cos() * 12.0, 6.0, angle.sin() * 12.0),
            0.25,
            hsv_to_rgb(t, 0.6, 1.0),
            20.0,
        ));
    }
}
