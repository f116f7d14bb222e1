pub mod bvh;
pub mod clock;
pub mod device;
pub mod diagnostics;
pub mod engine;
pub mod handle;
pub mod sphere;
