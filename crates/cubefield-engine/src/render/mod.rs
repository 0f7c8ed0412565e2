//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and creates them
//! lazily against the `RenderCtx` of the first frame it draws.
//!
//! Convention:
//! - geometry is in eye space after the per-instance model-view matrix
//! - the projection uniform moves eye-space depth into clip-space w

mod ctx;
pub mod cube;
pub mod mesh;

pub use ctx::{ClearValues, RenderCtx, RenderTarget};
