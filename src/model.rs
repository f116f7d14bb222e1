//! Scene model: ordered primitive collections and their acceleration structure.
//!
//! `finalize` is a full rebuild. Every call allocates a fresh scene context
//! sized to the current collections, re-finalizes every geometry in index
//! order, registers every primitive at its index and commits.
//!
//! A `BuildError` from a geometry aborts the rebuild where it stands. The new
//! context keeps the registrations made so far (inspectable through
//! [`SceneModel::scene_context`]), nothing after the failing index is
//! attempted, the structure is not committed and the model is left
//! [`ModelState::Incomplete`]. There is no rollback to the previous structure.

use crate::core::clock::{LogicalClock, TimeStamp};
use crate::core::device::Device;
use crate::error::{BuildError, InconsistentStateError};
use crate::math::AABB;
use crate::primitive::{BuildContext, Geometry, Primitive, Volume};
use crate::traits::engine::SceneContext;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ModelState {
    /// Never finalized
    Unfinalized,
    /// Last finalize succeeded and committed
    Finalized,
    /// Last finalize aborted part way through
    Incomplete,
}

pub struct SceneModel {
    geometries: Vec<Geometry>,
    volumes: Vec<Volume>,
    bounds: AABB,
    context: Option<SceneContext>,
    state: ModelState,
    clock: LogicalClock,
    modified: TimeStamp,
    finalized_at: TimeStamp,
}

impl SceneModel {
    pub fn new(device: &Device) -> Self {
        let clock = device.clock().clone();
        let modified = clock.tick();
        Self {
            geometries: Vec::new(),
            volumes: Vec::new(),
            bounds: AABB::EMPTY,
            context: None,
            state: ModelState::Unfinalized,
            clock,
            modified,
            finalized_at: TimeStamp::ZERO,
        }
    }

    /// Append a geometry, returning its index
    pub fn add_geometry(&mut self, mut geometry: Geometry) -> usize {
        let index = self.geometries.len();
        geometry.set_index(index);
        self.geometries.push(geometry);
        self.touch();
        index
    }

    /// Remove the geometry at `index`; later geometries shift down by one
    pub fn remove_geometry(&mut self, index: usize) -> Option<Geometry> {
        if index >= self.geometries.len() {
            return None;
        }
        let removed = self.geometries.remove(index);
        for (i, geometry) in self.geometries.iter_mut().enumerate().skip(index) {
            geometry.set_index(i);
        }
        self.touch();
        Some(removed)
    }

    /// Append a volume, returning its index
    pub fn add_volume(&mut self, mut volume: Volume) -> usize {
        let index = self.volumes.len();
        volume.set_index(index);
        self.volumes.push(volume);
        self.touch();
        index
    }

    /// Remove the volume at `index`; later volumes shift down by one
    pub fn remove_volume(&mut self, index: usize) -> Option<Volume> {
        if index >= self.volumes.len() {
            return None;
        }
        let removed = self.volumes.remove(index);
        for (i, volume) in self.volumes.iter_mut().enumerate().skip(index) {
            volume.set_index(i);
        }
        self.touch();
        Some(removed)
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    pub fn geometry(&self, index: usize) -> Option<&Geometry> {
        self.geometries.get(index)
    }

    /// Mutable access counts as a modification
    pub fn geometry_mut(&mut self, index: usize) -> Option<&mut Geometry> {
        if index < self.geometries.len() {
            self.touch();
        }
        self.geometries.get_mut(index)
    }

    pub fn volume(&self, index: usize) -> Option<&Volume> {
        self.volumes.get(index)
    }

    pub fn geometry_count(&self) -> usize {
        self.geometries.len()
    }

    pub fn volume_count(&self) -> usize {
        self.volumes.len()
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    pub fn last_modified(&self) -> TimeStamp {
        self.modified
    }

    /// Stamp of the last successful finalize, `ZERO` if none
    pub fn last_finalized(&self) -> TimeStamp {
        self.finalized_at
    }

    /// True unless the last finalize succeeded and nothing changed since
    pub fn needs_rebuild(&self) -> bool {
        self.state != ModelState::Finalized || self.finalized_at.is_older_than(self.modified)
    }

    /// Union of all geometry bounds from the last successful finalize
    pub fn bounds(&self) -> Result<AABB, InconsistentStateError> {
        self.check_finalized()?;
        Ok(self.bounds)
    }

    /// Committed scene context from the last successful finalize
    pub fn structure(&self) -> Result<&SceneContext, InconsistentStateError> {
        self.check_finalized()?;
        self.context.as_ref().ok_or(InconsistentStateError::NotFinalized)
    }

    /// Scene context of the last finalize attempt, whatever its outcome
    pub fn scene_context(&self) -> Option<&SceneContext> {
        self.context.as_ref()
    }

    /// Rebuild the acceleration structure from the current collections
    pub fn finalize(&mut self, device: &mut Device) -> Result<(), BuildError> {
        let progress = device.config().progress_severity;
        let geometry_count = self.geometries.len();
        let volume_count = self.volumes.len();

        device.post(
            &format!(
                "=======================================================\n\
                 Finalizing model, has {geometry_count} geometries and {volume_count} volumes\n"
            ),
            progress,
        );

        self.bounds = AABB::EMPTY;
        let context = self
            .context
            .insert(device.engine_mut().create(geometry_count, volume_count));

        for (index, geometry) in self.geometries.iter_mut().enumerate() {
            device.post(
                &format!(
                    "=======================================================\n\
                     Finalizing geometry {index}\n"
                ),
                progress,
            );

            let build = BuildContext {
                config: device.config(),
                scene: context,
            };
            match Primitive::finalize(geometry, &build) {
                Ok(Some(geometry_bounds)) => self.bounds.extend(&geometry_bounds),
                Ok(None) => {}
                Err(err) => {
                    log::warn!("model rebuild aborted at geometry {index}: {err}");
                    self.state = ModelState::Incomplete;
                    return Err(err);
                }
            }
            device.engine_mut().set_geometry(context, index, geometry);
        }

        for (index, volume) in self.volumes.iter().enumerate() {
            if let Some((lo, hi)) = volume.grid().value_range() {
                log::debug!(
                    "volume {} ({}): {} grid, values {}..{}",
                    index,
                    volume.handle().id(),
                    volume.grid().dimensions(),
                    lo,
                    hi
                );
            }
            device.engine_mut().set_volume(context, index, volume);
        }

        if let Err(err) = device.engine_mut().commit(context) {
            log::warn!("model rebuild aborted at commit: {err}");
            self.state = ModelState::Incomplete;
            return Err(err);
        }

        let structure = context.structure_handle();
        self.state = ModelState::Finalized;
        self.finalized_at = self.clock.tick();

        log::info!(
            "finalized {} as {}: bounds {:?}..{:?}",
            self,
            structure,
            self.bounds.min,
            self.bounds.max
        );
        Ok(())
    }

    fn touch(&mut self) {
        self.modified = self.clock.tick();
    }

    fn check_finalized(&self) -> Result<(), InconsistentStateError> {
        match self.state {
            ModelState::Finalized => Ok(()),
            ModelState::Unfinalized => Err(InconsistentStateError::NotFinalized),
            ModelState::Incomplete => Err(InconsistentStateError::IncompleteRebuild),
        }
    }
}

impl fmt::Display for SceneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SceneModel({} geometries, {} volumes)",
            self.geometries.len(),
            self.volumes.len()
        )
    }
}

impl fmt::Debug for SceneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneModel")
            .field("geometries", &self.geometries.len())
            .field("volumes", &self.volumes.len())
            .field("state", &self.state)
            .field("bounds", &self.bounds)
            .finish()
    }
}
