use crate::config::BuildConfig;
use crate::core::bvh::BvhBuilder;
use crate::error::BuildError;
use crate::math::AABB;
use crate::primitive::{Geometry, Primitive, Volume};
use crate::traits::engine::{
    AccelerationEngine, CommittedStructure, GeometrySlot, SceneContext, StructureHandle,
};

/// In-process acceleration engine
///
/// Commit builds a top-level SAH hierarchy over the bounds registered in the
/// geometry slots. Slot order is preserved: leaf primitive indices are slot
/// indices.
#[derive(Debug, Default)]
pub struct BvhEngine {
    builder: BvhBuilder,
    next_structure: u64,
    commits: u64,
}

impl BvhEngine {
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            builder: BvhBuilder::from(config),
            next_structure: 0,
            commits: 0,
        }
    }

    /// Number of successful commits so far
    pub fn commits(&self) -> u64 {
        self.commits
    }
}

impl AccelerationEngine for BvhEngine {
    fn create(&mut self, geometry_count: usize, volume_count: usize) -> SceneContext {
        self.next_structure += 1;
        SceneContext::new(StructureHandle(self.next_structure), geometry_count, volume_count)
    }

    fn set_geometry(&mut self, context: &mut SceneContext, index: usize, geometry: &Geometry) {
        context.bind_geometry(
            index,
            GeometrySlot {
                handle: geometry.handle().id(),
                bounds: geometry.bounds().unwrap_or(AABB::EMPTY),
            },
        );
    }

    fn set_volume(&mut self, context: &mut SceneContext, index: usize, volume: &Volume) {
        context.bind_volume(index, volume.handle().id());
    }

    fn commit(&mut self, context: &mut SceneContext) -> Result<(), BuildError> {
        let mut instance_bounds = Vec::with_capacity(context.geometry_count());
        for (index, slot) in context.geometry_slots().iter().enumerate() {
            match slot {
                Some(slot) => instance_bounds.push(slot.bounds),
                None => return Err(BuildError::UnregisteredSlot { kind: "geometry", index }),
            }
        }
        if let Some(index) = context.volume_slots().iter().position(Option::is_none) {
            return Err(BuildError::UnregisteredSlot { kind: "volume", index });
        }

        let top_level = self
            .builder
            .build(&instance_bounds)
            .map(|root| root.flatten())
            .unwrap_or_default();
        let bounds = top_level.bounds();

        log::trace!(
            "committed {} with {} top-level nodes",
            context.structure_handle(),
            top_level.nodes.len()
        );

        context.mark_committed(CommittedStructure { top_level, bounds });
        self.commits += 1;
        Ok(())
    }
}
