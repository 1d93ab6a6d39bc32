//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
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

/// Colors for game elements
pub mod colors {
    pub const SKY_TOP: [f32; 4] = [0.06, 0.05, 0.12, 1.0];
    pub const SKY_HORIZON: [f32; 4] = [0.32, 0.16, 0.18, 1.0];
    pub const GROUND: [f32; 4] = [0.16, 0.12, 0.08, 1.0];
    pub const SURVIVOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const ZOMBIE: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BLOCK: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HEALTH_BACK: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HEALTH_FILL: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const AIM_LINE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
}
