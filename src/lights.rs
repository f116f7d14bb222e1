use crate::core::clock::{LogicalClock, TimeStamp};
use glam::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightKind {
    Ambient,
    Directional { direction: Vec3 },
    Point { position: Vec3, radius: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Light {
    pub fn ambient(color: [f32; 3], intensity: f32) -> Self {
        Self {
            kind: LightKind::Ambient,
            color,
            intensity,
        }
    }

    pub fn directional(direction: Vec3, color: [f32; 3], intensity: f32) -> Self {
        Self {
            kind: LightKind::Directional {
                direction: direction.normalize_or_zero(),
            },
            color,
            intensity,
        }
    }

    pub fn point(position: Vec3, radius: f32, color: [f32; 3], intensity: f32) -> Self {
        Self {
            kind: LightKind::Point { position, radius },
            color,
            intensity,
        }
    }
}

/// Light record as consumed by the native renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightData {
    pub color: [f32; 3],
    pub intensity: f32,
    pub vector: [f32; 3], // direction or position, by kind
    pub radius: f32,
    pub kind: u32,        // 0 = ambient, 1 = directional, 2 = point
    pub _pad: [u32; 3],
}

impl From<&Light> for LightData {
    fn from(light: &Light) -> Self {
        let (kind, vector, radius) = match light.kind {
            LightKind::Ambient => (0, Vec3::ZERO, 0.0),
            LightKind::Directional { direction } => (1, direction, 0.0),
            LightKind::Point { position, radius } => (2, position, radius),
        };
        Self {
            color: light.color,
            intensity: light.intensity,
            vector: vector.to_array(),
            radius,
            kind,
            _pad: [0; 3],
        }
    }
}

/// Scene lights with a modification stamp
///
/// Every mutation advances `last_modified`; renderers compare it against the
/// stamp of their cached light list.
#[derive(Debug, Clone)]
pub struct LightSet {
    lights: Vec<Light>,
    clock: LogicalClock,
    last_modified: TimeStamp,
}

impl LightSet {
    pub fn new(clock: &LogicalClock) -> Self {
        Self {
            lights: Vec::new(),
            clock: clock.clone(),
            last_modified: TimeStamp::ZERO,
        }
    }

    pub fn add(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.touch();
        self.lights.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<Light> {
        if index >= self.lights.len() {
            return None;
        }
        let light = self.lights.remove(index);
        self.touch();
        Some(light)
    }

    /// Replace the light at `index`, returning the previous one
    pub fn replace(&mut self, index: usize, light: Light) -> Option<Light> {
        let slot = self.lights.get_mut(index)?;
        let previous = std::mem::replace(slot, light);
        self.touch();
        Some(previous)
    }

    pub fn clear(&mut self) {
        self.lights.clear();
        self.touch();
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn len(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    pub fn last_modified(&self) -> TimeStamp {
        self.last_modified
    }

    pub fn to_data(&self) -> Vec<LightData> {
        self.lights.iter().map(LightData::from).collect()
    }

    fn touch(&mut self) {
        self.last_modified = self.clock.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutations_advance_stamp() {
        let clock = LogicalClock::new();
        let mut lights = LightSet::new(&clock);
        assert_eq!(lights.last_modified(), TimeStamp::ZERO);

        lights.add(Light::ambient([1.0; 3], 0.2));
        let after_add = lights.last_modified();
        assert!(TimeStamp::ZERO.is_older_than(after_add));

        lights.replace(0, Light::ambient([1.0; 3], 0.4));
        assert!(after_add.is_older_than(lights.last_modified()));
    }

    #[test]
    fn failed_mutations_keep_stamp() {
        let clock = LogicalClock::new();
        let mut lights = LightSet::new(&clock);
        lights.add(Light::ambient([1.0; 3], 0.2));
        let stamp = lights.last_modified();

        assert!(lights.remove(3).is_none());
        assert!(lights.replace(3, Light::ambient([0.0; 3], 0.0)).is_none());
        assert_eq!(lights.last_modified(), stamp);
    }

    #[test]
    fn light_data_encodes_kind() {
        let point = Light::point(Vec3::new(1.0, 2.0, 3.0), 0.5, [1.0, 0.5, 0.0], 10.0);
        let data = LightData::from(&point);
        assert_eq!(data.kind, 2);
        assert_eq!(data.vector, [1.0, 2.0, 3.0]);
        assert_eq!(data.radius, 0.5);

        let sun = Light::directional(Vec3::new(0.0, -2.0, 0.0), [1.0; 3], 1.0);
        assert_eq!(LightData::from(&sun).vector, [0.0, -1.0, 0.0]);
        assert_eq!(std::mem::size_of::<LightData>(), 48);
    }
}
