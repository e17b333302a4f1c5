//! Engine-facing contracts between the runtime loop and programs.
//!
//! Programs implement [`App`]; the runtime hands them a [`FrameCtx`] once per
//! rendered frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
