//! Error types for scene assembly and the render lifecycle.

use crate::traits::renderable::LifecycleState;
use thiserror::Error;

/// A primitive's or the scene's native representation could not be built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Geometry carries no primitives
    #[error("geometry {index} has no primitives")]
    EmptyGeometry { index: usize },

    /// Geometry data rejected by validation
    #[error("geometry {index} is malformed: {reason}")]
    InvalidGeometry { index: usize, reason: String },

    /// Geometry exceeds the configured per-geometry primitive budget
    #[error("geometry {index} has {count} primitives, limit is {limit}")]
    ResourceExhausted {
        index: usize,
        count: usize,
        limit: usize,
    },

    /// Volume grid rejected at construction
    #[error("invalid volume: {0}")]
    InvalidVolume(String),

    /// Commit found a slot that was never registered
    #[error("{kind} slot {index} was never registered")]
    UnregisteredSlot { kind: &'static str, index: usize },

    /// Acceleration structure rejected the commit
    #[error("acceleration structure commit failed: {0}")]
    CommitFailed(String),
}

/// Caller misuse: state observed or driven out of order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InconsistentStateError {
    #[error("scene model has not been finalized")]
    NotFinalized,

    #[error("scene model rebuild was aborted and is incomplete")]
    IncompleteRebuild,

    #[error("renderer used before init")]
    NotInitialized,

    #[error("renderer is already initialized")]
    AlreadyInitialized,

    #[error("{call} is not valid while {state:?}")]
    InvalidTransition {
        call: &'static str,
        state: LifecycleState,
    },
}

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    InconsistentState(#[from] InconsistentStateError),

    #[error("unknown renderer type: {0}")]
    UnknownRenderer(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
