//! Halo engine crate.
//!
//! Owns the platform + GPU runtime pieces the demo programs share, plus the
//! CPU-side mesh generators and shader file loading.

pub mod core;
pub mod device;
pub mod logging;
pub mod mesh;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
