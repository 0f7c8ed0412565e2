//! Transform math shared by renderers and applications.
//!
//! Matrices are column-major and compose accumulator-style (`acc = op * acc`).

mod mat4;

pub use mat4::Mat4;
