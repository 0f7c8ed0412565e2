//! Unit cube mesh as a single triangle strip.

use bytemuck::{Pod, Zeroable};

/// Position + color vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

impl CubeVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // pos
        1 => Float32x3  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CubeVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Number of strip vertices needed to cover all six faces.
pub const CUBE_STRIP_LEN: usize = 14;

// Corners of the [-1, 1]^3 cube.
const A: [f32; 3] = [1.0, -1.0, 1.0];
const B: [f32; 3] = [1.0, -1.0, -1.0];
const C: [f32; 3] = [-1.0, -1.0, 1.0];
const D: [f32; 3] = [-1.0, -1.0, -1.0];
const E: [f32; 3] = [-1.0, 1.0, -1.0];
const F: [f32; 3] = [1.0, 1.0, -1.0];
const G: [f32; 3] = [1.0, 1.0, 1.0];
const H: [f32; 3] = [-1.0, 1.0, 1.0];

const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
const RED: [f32; 3] = [1.0, 0.0, 0.0];
const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

const fn v(pos: [f32; 3], color: [f32; 3]) -> CubeVertex {
    CubeVertex { pos, color }
}

/// Strip order A B C D E B F G E H C G A B.
pub const CUBE_STRIP: [CubeVertex; CUBE_STRIP_LEN] = [
    v(A, BLACK),
    v(B, RED),
    v(C, BLUE),
    v(D, MAGENTA),
    v(E, YELLOW),
    v(B, RED),
    v(F, GREEN),
    v(G, CYAN),
    v(E, YELLOW),
    v(H, WHITE),
    v(C, BLUE),
    v(G, CYAN),
    v(A, BLACK),
    v(B, RED),
];
