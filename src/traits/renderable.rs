use crate::core::clock::LogicalClock;
use crate::core::device::Device;
use crate::error::Result;
use crate::lights::LightSet;

/// Where a renderable is in the commit/render protocol
///
/// `Uninitialized --init--> Ready --pre_commit--> Committing --post_commit--> Ready`
/// and `Ready --pre_render--> Rendering --post_render--> Ready`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Uninitialized,
    Ready,
    Committing,
    Rendering,
}

/// What a renderable may read while committing or rendering
pub struct RenderContext<'a> {
    pub device: &'a Device,
    pub lights: &'a LightSet,
}

impl<'a> RenderContext<'a> {
    pub fn new(device: &'a Device, lights: &'a LightSet) -> Self {
        Self { device, lights }
    }

    pub fn clock(&self) -> &LogicalClock {
        self.device.clock()
    }
}

/// Commit/render lifecycle hooks
///
/// `init` runs exactly once, before any other hook. The pre/post pairs bracket
/// a parameter commit and a single frame respectively.
pub trait Renderable {
    fn init(&mut self, ctx: &RenderContext<'_>) -> Result<()>;

    fn pre_commit(&mut self, _ctx: &RenderContext<'_>) -> Result<()> {
        Ok(())
    }

    fn post_commit(&mut self, _ctx: &RenderContext<'_>) -> Result<()> {
        Ok(())
    }

    fn pre_render(&mut self, _ctx: &RenderContext<'_>) -> Result<()> {
        Ok(())
    }

    fn post_render(&mut self, _ctx: &RenderContext<'_>) -> Result<()> {
        Ok(())
    }

    fn state(&self) -> LifecycleState;
}
