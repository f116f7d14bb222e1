//! Scene assembly for ray queries.
//!
//! A [`model::SceneModel`] owns ordered geometry and volume descriptors and
//! rebuilds its acceleration structure from scratch on every `finalize`. The
//! [`renderer::Renderer`] follows the commit/render lifecycle and rebuilds its
//! light list only when the scene's lights are newer than its cached copy.
//! Everything native is reached through an explicit [`core::device::Device`].

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod lights;
pub mod math;
pub mod model;
pub mod primitive;
pub mod renderer;
pub mod scenes;
pub mod session;
pub mod traits;
pub mod types;

pub use error::{BuildError, Error, InconsistentStateError, Result};
pub use model::{ModelState, SceneModel};
