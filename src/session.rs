//! Lifecycle driver tying a scene model, its lights and a renderer together.

use crate::core::device::Device;
use crate::error::{InconsistentStateError, Result};
use crate::frame::FrameInfo;
use crate::lights::LightSet;
use crate::model::SceneModel;
use crate::renderer::Renderer;
use crate::traits::renderable::{LifecycleState, RenderContext, Renderable};
use serde::Serialize;

/// What a commit had to redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    pub model_rebuilt: bool,
    pub lights_rebuilt: bool,
}

/// Owns one build/render pipeline; all calls are serialized through it
pub struct RenderSession {
    device: Device,
    model: SceneModel,
    lights: LightSet,
    renderer: Renderer,
    frames: u64,
}

impl RenderSession {
    pub fn new(device: Device, renderer: Renderer) -> Self {
        let model = SceneModel::new(&device);
        let lights = LightSet::new(device.clock());
        Self {
            device,
            model,
            lights,
            renderer,
            frames: 0,
        }
    }

    /// Session over an already populated model built against `device`
    pub fn with_model(device: Device, model: SceneModel, renderer: Renderer) -> Self {
        let lights = LightSet::new(device.clock());
        Self {
            device,
            model,
            lights,
            renderer,
            frames: 0,
        }
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn model(&self) -> &SceneModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut SceneModel {
        &mut self.model
    }

    pub fn lights(&self) -> &LightSet {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut LightSet {
        &mut self.lights
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn init(&mut self) -> Result<()> {
        let ctx = RenderContext::new(&self.device, &self.lights);
        self.renderer.init(&ctx)
    }

    /// Rebuild the model if it changed, then commit the renderer
    pub fn commit(&mut self) -> Result<CommitReport> {
        if self.renderer.state() == LifecycleState::Uninitialized {
            return Err(InconsistentStateError::NotInitialized.into());
        }

        let model_rebuilt = self.model.needs_rebuild();
        if model_rebuilt {
            self.model.finalize(&mut self.device)?;
        }

        let light_builds = self.renderer.light_builds();
        let ctx = RenderContext::new(&self.device, &self.lights);
        self.renderer.pre_commit(&ctx)?;
        self.renderer.post_commit(&ctx)?;

        Ok(CommitReport {
            model_rebuilt,
            lights_rebuilt: self.renderer.light_builds() != light_builds,
        })
    }

    /// Bracket one frame against the last committed model
    pub fn render_frame(&mut self) -> Result<FrameInfo> {
        self.model.structure()?;

        let ctx = RenderContext::new(&self.device, &self.lights);
        self.renderer.pre_render(&ctx)?;
        self.renderer.post_render(&ctx)?;

        let info = FrameInfo::new(self.frames, self.device.clock().now());
        self.frames += 1;
        Ok(info)
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}
