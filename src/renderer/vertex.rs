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
    pub const BACKGROUND: [f32; 4] = [0.96, 0.95, 0.90, 1.0];
    pub const ZONE_INFANT: [f32; 4] = [0.98, 0.74, 0.80, 1.0];
    pub const ZONE_CHILD: [f32; 4] = [0.99, 0.85, 0.45, 1.0];
    pub const ZONE_ADULT: [f32; 4] = [0.55, 0.78, 0.95, 1.0];
    pub const ZONE_PUBLIC: [f32; 4] = [0.62, 0.88, 0.62, 1.0];
    pub const SERVICE_VACCINATION: [f32; 4] = [0.85, 0.25, 0.30, 1.0];
    pub const SERVICE_PLAYGROUND: [f32; 4] = [0.95, 0.55, 0.10, 1.0];
    pub const SERVICE_JOB_TRAINING: [f32; 4] = [0.20, 0.40, 0.80, 1.0];
    pub const SERVICE_LIBRARY: [f32; 4] = [0.20, 0.60, 0.35, 1.0];
    pub const GLYPH: [f32; 4] = [1.0, 1.0, 1.0, 0.95];
    pub const GLYPH_DARK: [f32; 4] = [0.15, 0.15, 0.20, 0.9];
    pub const HIGHLIGHT: [f32; 4] = [0.10, 0.70, 0.30, 1.0];
}
