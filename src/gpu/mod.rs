mod context;
mod buffers;
mod render;

pub use context::GpuContext;
pub use buffers::GridBuffers;
pub use render::GridRenderer;
