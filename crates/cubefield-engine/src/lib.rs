//! cubefield engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the transform math
//! used by the viewer binary.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod logging;
pub mod math;
pub mod render;
