mod gpu;
mod helpers;
mod targets;

pub use gpu::{GpuState, RenderSetup};
