//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! - one `FrameClock` per window, `tick()` once per presented frame
//! - `FrameStats` folds ticks into a periodic frames-per-second report

mod frame_clock;
mod stats;

pub use frame_clock::{FrameClock, FrameTime};
pub use stats::{FrameReport, FrameStats};
