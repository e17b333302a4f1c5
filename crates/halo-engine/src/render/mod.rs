//! GPU rendering.
//!
//! Renderers own their GPU resources (pipelines, buffers) and create them
//! lazily on first use. Geometry is already in clip space; the only shared
//! state is the [`SceneUniform`] block.

mod ctx;
mod mesh_renderer;
mod uniform;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh_renderer::MeshRenderer;
pub use uniform::SceneUniform;
