//! Shader resources.
//!
//! Tagged shader files are split by `halo-shader`; this module reads them
//! from disk and turns the two WGSL sections into wgpu modules.

mod load;
mod modules;

pub use halo_shader::{ShaderSource, Stage};
pub use load::load_shader_file;
pub use modules::{
    check_source, entry_point, ShaderError, ShaderModules, FRAGMENT_ENTRY, VERTEX_ENTRY,
};
