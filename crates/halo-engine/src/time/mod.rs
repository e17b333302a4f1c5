//! Frame timing.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented frame.
//! `FrameTime::elapsed` feeds time-driven uniforms.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
