//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB components, linearized in the shader)
pub mod colors {
    /// Sky gradient, top to bottom
    pub const SKY_TOP: [u8; 3] = [135, 206, 235];
    pub const SKY_BOTTOM: [u8; 3] = [200, 235, 235];
    pub const PLATFORM: [f32; 4] = [0.45, 0.32, 0.2, 1.0];
    pub const PLATFORM_GRASS: [f32; 4] = [0.3, 0.75, 0.25, 1.0];
    pub const STAR: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
    pub const STAR_CORE: [f32; 4] = [1.0, 0.97, 0.7, 1.0];
    pub const BOMB: [f32; 4] = [0.12, 0.12, 0.14, 1.0];
    pub const BOMB_SPARK: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
    pub const PLAYER: [f32; 4] = [0.95, 0.55, 0.2, 1.0];
    pub const PLAYER_BELLY: [f32; 4] = [1.0, 0.9, 0.75, 1.0];
    pub const PLAYER_DEAD: [f32; 4] = [0.55, 0.45, 0.45, 1.0];
    pub const EYE: [f32; 4] = [0.05, 0.05, 0.08, 1.0];
    /// Physics body outlines
    pub const DEBUG_BODY: [f32; 4] = [1.0, 0.0, 1.0, 0.9];
    pub const DEBUG_TOUCHING: [f32; 4] = [0.0, 1.0, 0.3, 0.9];
}
