use crate::core::bvh::FlatBVH;
use crate::core::handle::HandleId;
use crate::error::BuildError;
use crate::math::AABB;
use crate::primitive::{Geometry, Volume};
use std::fmt;

/// Identifier of one built acceleration structure
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructureHandle(pub u64);

impl fmt::Display for StructureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "structure#{}", self.0)
    }
}

/// Geometry registered at a slot
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeometrySlot {
    pub handle: HandleId,
    pub bounds: AABB,
}

/// Result of a successful commit
#[derive(Debug, Clone, PartialEq)]
pub struct CommittedStructure {
    /// Top-level hierarchy over geometry slots; empty for a scene without geometry
    pub top_level: FlatBVH,
    pub bounds: AABB,
}

/// Slot table of one scene under construction
///
/// Slot `i` holds whatever was registered for collection index `i`. Slots are
/// never reordered or compacted.
#[derive(Debug, Clone)]
pub struct SceneContext {
    structure: StructureHandle,
    geometry_slots: Vec<Option<GeometrySlot>>,
    volume_slots: Vec<Option<HandleId>>,
    committed: Option<CommittedStructure>,
}

impl SceneContext {
    pub fn new(structure: StructureHandle, geometry_count: usize, volume_count: usize) -> Self {
        Self {
            structure,
            geometry_slots: vec![None; geometry_count],
            volume_slots: vec![None; volume_count],
            committed: None,
        }
    }

    pub fn structure_handle(&self) -> StructureHandle {
        self.structure
    }

    pub fn geometry_count(&self) -> usize {
        self.geometry_slots.len()
    }

    pub fn volume_count(&self) -> usize {
        self.volume_slots.len()
    }

    pub fn geometry_slot(&self, index: usize) -> Option<&GeometrySlot> {
        self.geometry_slots.get(index).and_then(Option::as_ref)
    }

    pub fn volume_slot(&self, index: usize) -> Option<HandleId> {
        self.volume_slots.get(index).copied().flatten()
    }

    pub fn geometry_slots(&self) -> &[Option<GeometrySlot>] {
        &self.geometry_slots
    }

    pub fn volume_slots(&self) -> &[Option<HandleId>] {
        &self.volume_slots
    }

    pub fn is_committed(&self) -> bool {
        self.committed.is_some()
    }

    pub fn committed(&self) -> Option<&CommittedStructure> {
        self.committed.as_ref()
    }

    /// Register a geometry; indices beyond the allocated slot count are ignored
    pub fn bind_geometry(&mut self, index: usize, slot: GeometrySlot) {
        debug_assert!(index < self.geometry_slots.len(), "geometry slot {index} out of range");
        if let Some(entry) = self.geometry_slots.get_mut(index) {
            *entry = Some(slot);
        }
    }

    /// Register a volume; indices beyond the allocated slot count are ignored
    pub fn bind_volume(&mut self, index: usize, handle: HandleId) {
        debug_assert!(index < self.volume_slots.len(), "volume slot {index} out of range");
        if let Some(entry) = self.volume_slots.get_mut(index) {
            *entry = Some(handle);
        }
    }

    pub fn mark_committed(&mut self, structure: CommittedStructure) {
        self.committed = Some(structure);
    }
}

/// Acceleration-structure engine the scene model builds against
pub trait AccelerationEngine: Send {
    /// Allocate a fresh context sized for the given slot counts
    fn create(&mut self, geometry_count: usize, volume_count: usize) -> SceneContext;

    /// Register a finalized geometry at `index`
    fn set_geometry(&mut self, context: &mut SceneContext, index: usize, geometry: &Geometry);

    /// Register a volume at `index`
    fn set_volume(&mut self, context: &mut SceneContext, index: usize, volume: &Volume);

    /// Make the structure ready for ray queries
    fn commit(&mut self, context: &mut SceneContext) -> Result<(), BuildError>;
}
