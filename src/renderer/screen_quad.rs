//! Full-screen quad whose vertices index the frustum corner rows.
//!
//! Each vertex stores its corner row in `position.z`, so the vertex stage can
//! fetch that row from the corner matrix and let the rasterizer interpolate
//! a view ray per pixel. [`interpolate_ray`] reproduces that on the CPU.

use glam::{Mat4, Vec2, Vec3};

use crate::camera::frustum::{Corner, FrustumCorners};

/// 20-byte screen vertex: `(x, y, corner_row)` plus texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ScreenVertex {
    /// Orthographic position in [0, 1]²; z holds the corner row index.
    pub position: [f32; 3],
    /// Texture coordinates of the source image.
    pub uv: [f32; 2],
}

impl ScreenVertex {
    const fn new(x: f32, y: f32, corner: Corner) -> Self {
        Self {
            position: [x, y, corner as u8 as f32],
            uv: [x, y],
        }
    }

    /// The frustum corner this vertex reads, if `position.z` is a valid row.
    #[must_use]
    pub fn corner(&self) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .find(|c| c.row() as f32 == self.position[2])
    }

    /// Vertex buffer layout: location 0 = position, location 1 = uv.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        }
    }
}

/// Quad vertices in draw order: bottom-left, bottom-right, top-right,
/// top-left.
pub const SCREEN_QUAD: [ScreenVertex; 4] = [
    ScreenVertex::new(0.0, 0.0, Corner::BottomLeft),
    ScreenVertex::new(1.0, 0.0, Corner::BottomRight),
    ScreenVertex::new(1.0, 1.0, Corner::TopRight),
    ScreenVertex::new(0.0, 1.0, Corner::TopLeft),
];

/// Two counter-clockwise triangles covering [`SCREEN_QUAD`].
pub const SCREEN_QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Corner addressed by one of the four exact quad texture coordinates.
#[must_use]
pub fn corner_for_uv(uv: Vec2) -> Option<Corner> {
    SCREEN_QUAD
        .iter()
        .find(|v| Vec2::from(v.uv) == uv)
        .and_then(ScreenVertex::corner)
}

/// Camera-space view ray at `uv`, bilinearly blended from the corner rows.
///
/// The result is not normalized; at the quad corners it equals the
/// corresponding row exactly.
#[must_use]
pub fn interpolate_ray(frustum: &Mat4, uv: Vec2) -> Vec3 {
    let c = FrustumCorners::from_rows(frustum);
    let bottom = c.bottom_left.lerp(c.bottom_right, uv.x);
    let top = c.top_left.lerp(c.top_right, uv.x);
    bottom.lerp(top, uv.y)
}

/// Unit world-space view ray at `uv`.
#[must_use]
pub fn world_ray_direction(
    frustum: &Mat4,
    camera_to_world: &Mat4,
    uv: Vec2,
) -> Vec3 {
    camera_to_world
        .transform_vector3(interpolate_ray(frustum, uv))
        .normalize()
}
