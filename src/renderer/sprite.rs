//! Sprite frame assembly
//!
//! Quads are built and transformed on the CPU each frame: rotate about
//! the sprite center, then map play-field coordinates straight to NDC.
//! The GPU side stays a single dumb textured-triangle pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::assets::TextureHandle;

/// Vertex with pre-transformed NDC position, texture coordinates, and
/// a color tint multiplied over the sampled texel
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub tint: [f32; 4],
}

impl SpriteVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
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
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: (std::mem::size_of::<[f32; 2]>() * 2) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Untinted draw
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// A run of vertices sharing one texture
pub struct SpriteBatch {
    pub texture: TextureHandle,
    pub range: std::ops::Range<u32>,
}

/// One frame's worth of sprites, submitted in draw order
pub struct SpriteFrame {
    field: Vec2,
    vertices: Vec<SpriteVertex>,
    batches: Vec<SpriteBatch>,
}

impl SpriteFrame {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            field: Vec2::new(field_width, field_height),
            vertices: Vec::new(),
            batches: Vec::new(),
        }
    }

    /// Drop the previous frame's sprites
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    /// Queue one sprite: `position` is the top-left corner in field
    /// coordinates, rotation is degrees about the sprite center.
    /// Sprites draw in submission order, later over earlier.
    pub fn draw(
        &mut self,
        texture: TextureHandle,
        position: Vec2,
        size: Vec2,
        rotation_degrees: f32,
        tint: [f32; 4],
    ) {
        let half = size * 0.5;
        let center = position + half;
        let (sin, cos) = rotation_degrees.to_radians().sin_cos();
        let place = |offset: Vec2| {
            center + Vec2::new(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
        };

        let tl = self.to_ndc(place(Vec2::new(-half.x, -half.y)));
        let tr = self.to_ndc(place(Vec2::new(half.x, -half.y)));
        let br = self.to_ndc(place(Vec2::new(half.x, half.y)));
        let bl = self.to_ndc(place(Vec2::new(-half.x, half.y)));

        let start = self.vertices.len() as u32;
        let vertex = |position: [f32; 2], uv: [f32; 2]| SpriteVertex { position, uv, tint };
        self.vertices.extend_from_slice(&[
            vertex(tl, [0.0, 0.0]),
            vertex(tr, [1.0, 0.0]),
            vertex(br, [1.0, 1.0]),
            vertex(tl, [0.0, 0.0]),
            vertex(br, [1.0, 1.0]),
            vertex(bl, [0.0, 1.0]),
        ]);
        self.batches.push(SpriteBatch {
            texture,
            range: start..start + 6,
        });
    }

    /// Field coordinates (top-left origin, y down) to NDC
    fn to_ndc(&self, p: Vec2) -> [f32; 2] {
        [
            p.x / self.field.x * 2.0 - 1.0,
            1.0 - p.y / self.field.y * 2.0,
        ]
    }

    pub fn vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    pub fn batches(&self) -> &[SpriteBatch] {
        &self.batches
    }
}
