pub mod diagnostics;
pub mod engine;
pub mod renderable;

pub use diagnostics::*;
pub use engine::*;
pub use renderable::*;
