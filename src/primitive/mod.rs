//! Scene primitives: geometries and volumes.
//!
//! Each primitive owns a [`NativeHandle`] created at construction. Geometries
//! build their native representation in `finalize` and report world bounds;
//! volumes are valid from construction and contribute no bounds.

mod geometry;
mod volume;

pub use geometry::{Geometry, Shape};
pub use volume::{StructuredVolume, Volume};

use crate::config::BuildConfig;
use crate::core::handle::NativeHandle;
use crate::error::BuildError;
use crate::math::AABB;
use crate::traits::engine::SceneContext;

/// Owner-side view handed to a primitive while it builds
pub struct BuildContext<'a> {
    pub config: &'a BuildConfig,
    pub scene: &'a SceneContext,
}

/// Behavior shared by every primitive kind
pub trait Primitive {
    /// Position within the owning collection
    fn index(&self) -> usize;

    fn handle(&self) -> &NativeHandle;

    /// Build/validate the native representation against `ctx`.
    /// Returns the world bounds for kinds that contribute them.
    fn finalize(&mut self, ctx: &BuildContext<'_>) -> Result<Option<AABB>, BuildError>;
}
