use crate::core::clock::TimeStamp;
use crate::core::device::Device;
use crate::core::handle::{HandleKind, NativeHandle};
use crate::error::{Error, InconsistentStateError, Result};
use crate::lights::LightData;
use crate::traits::renderable::{LifecycleState, RenderContext, Renderable};
use std::fmt;
use std::str::FromStr;

/// Renderer backends the device can create
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RendererKind {
    SciVis,
    PathTracer,
    Raycast,
}

impl RendererKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RendererKind::SciVis => "scivis",
            RendererKind::PathTracer => "pathtracer",
            RendererKind::Raycast => "raycast",
        }
    }
}

impl FromStr for RendererKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scivis" => Ok(RendererKind::SciVis),
            "pathtracer" | "pt" => Ok(RendererKind::PathTracer),
            "raycast" => Ok(RendererKind::Raycast),
            _ => Err(Error::UnknownRenderer(s.to_string())),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Native renderer object: the parameters it was last committed with
#[derive(Debug)]
pub struct NativeRenderer {
    kind: RendererKind,
    handle: NativeHandle,
    lights: Vec<LightData>,
    commits: u64,
    frames: u64,
}

impl NativeRenderer {
    fn new(device: &Device, kind: RendererKind) -> Self {
        Self {
            kind,
            handle: device.allocate(HandleKind::Renderer),
            lights: Vec::new(),
            commits: 0,
            frames: 0,
        }
    }

    pub fn kind(&self) -> RendererKind {
        self.kind
    }

    pub fn handle(&self) -> &NativeHandle {
        &self.handle
    }

    pub fn lights(&self) -> &[LightData] {
        &self.lights
    }

    pub fn commits(&self) -> u64 {
        self.commits
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Renderer node
///
/// Creates its native renderer on `init`, recreates it when the configured
/// type changes, and re-sends the light list on `post_commit` only when the
/// scene's lights changed after the list was last built.
#[derive(Debug)]
pub struct Renderer {
    renderer_type: String,
    native: Option<NativeRenderer>,
    created_type: Option<RendererKind>,
    lights_build_time: TimeStamp,
    frame_mtime: TimeStamp,
    light_builds: u64,
    state: LifecycleState,
}

impl Renderer {
    pub fn new(renderer_type: impl Into<String>) -> Self {
        Self {
            renderer_type: renderer_type.into(),
            native: None,
            created_type: None,
            lights_build_time: TimeStamp::ZERO,
            frame_mtime: TimeStamp::ZERO,
            light_builds: 0,
            state: LifecycleState::Uninitialized,
        }
    }

    pub fn renderer_type(&self) -> &str {
        &self.renderer_type
    }

    /// Takes effect on the next commit
    pub fn set_renderer_type(&mut self, renderer_type: impl Into<String>) {
        self.renderer_type = renderer_type.into();
    }

    pub fn created_type(&self) -> Option<RendererKind> {
        self.created_type
    }

    pub fn native(&self) -> Option<&NativeRenderer> {
        self.native.as_ref()
    }

    pub fn lights_build_time(&self) -> TimeStamp {
        self.lights_build_time
    }

    /// Stamp of the last completed frame
    pub fn frame_mtime(&self) -> TimeStamp {
        self.frame_mtime
    }

    /// How many times the light list was rebuilt
    pub fn light_builds(&self) -> u64 {
        self.light_builds
    }

    fn expect_state(&self, call: &'static str, expected: LifecycleState) -> Result<()> {
        match self.state {
            state if state == expected => Ok(()),
            LifecycleState::Uninitialized => Err(InconsistentStateError::NotInitialized.into()),
            state => Err(InconsistentStateError::InvalidTransition { call, state }.into()),
        }
    }

    fn native_mut(&mut self) -> Result<&mut NativeRenderer> {
        self.native
            .as_mut()
            .ok_or_else(|| InconsistentStateError::NotInitialized.into())
    }
}

impl Renderable for Renderer {
    fn init(&mut self, ctx: &RenderContext<'_>) -> Result<()> {
        if self.state != LifecycleState::Uninitialized {
            return Err(InconsistentStateError::AlreadyInitialized.into());
        }
        let kind: RendererKind = self.renderer_type.parse()?;
        self.native = Some(NativeRenderer::new(ctx.device, kind));
        self.created_type = Some(kind);
        self.state = LifecycleState::Ready;
        log::debug!("created {kind} renderer");
        Ok(())
    }

    fn pre_commit(&mut self, ctx: &RenderContext<'_>) -> Result<()> {
        self.expect_state("pre_commit", LifecycleState::Ready)?;

        let kind: RendererKind = self.renderer_type.parse()?;
        if self.created_type != Some(kind) {
            log::debug!(
                "renderer type changed from {:?} to {kind}, recreating",
                self.created_type
            );
            self.native = Some(NativeRenderer::new(ctx.device, kind));
            self.created_type = Some(kind);
            // the new native object has no lights yet
            self.lights_build_time = TimeStamp::ZERO;
        }

        self.state = LifecycleState::Committing;
        Ok(())
    }

    fn post_commit(&mut self, ctx: &RenderContext<'_>) -> Result<()> {
        self.expect_state("post_commit", LifecycleState::Committing)?;

        let lights_modified = ctx.lights.last_modified();
        let stale = self.lights_build_time.is_older_than(lights_modified);

        let native = self.native_mut()?;
        if stale {
            native.lights = ctx.lights.to_data();
            log::debug!("rebuilt light list: {} lights", native.lights.len());
        }
        native.commits += 1;

        if stale {
            self.lights_build_time = lights_modified;
            self.light_builds += 1;
        }
        self.state = LifecycleState::Ready;
        Ok(())
    }

    fn pre_render(&mut self, _ctx: &RenderContext<'_>) -> Result<()> {
        self.expect_state("pre_render", LifecycleState::Ready)?;
        self.state = LifecycleState::Rendering;
        Ok(())
    }

    fn post_render(&mut self, ctx: &RenderContext<'_>) -> Result<()> {
        self.expect_state("post_render", LifecycleState::Rendering)?;
        self.native_mut()?.frames += 1;
        self.frame_mtime = ctx.clock().tick();
        self.state = LifecycleState::Ready;
        Ok(())
    }

    fn state(&self) -> LifecycleState {
        self.state
    }
}
