//! The quad geometry and its GPU buffers.
//!
//! The scene renders exactly one shape: a kite-shaped quad built from
//! two triangles that share an edge down the middle. Vertex positions
//! are stored as full homogeneous coordinates so the model matrix can
//! be applied without any unpacking in the shader.
//!
//! ```text
//!           (0,1)
//!            /|\
//!           / | \
//!          /  |  \
//!         / (0,0) \
//!        /   / \   \
//!       /  /     \  \
//!      / /         \ \
//!     //             \\
//! (-1,-1)           (1,-1)
//! ```

use glam::{Vec3, Vec4};
use wgpu::util::DeviceExt;

use crate::gpu::GpuContext;

/// A vertex with a homogeneous position and an RGB color.
///
/// `#[repr(C)]` plus [`bytemuck::Pod`] lets the vertex array be cast
/// straight to bytes for GPU upload. 28 bytes per vertex: position at
/// offset 0, color at offset 16.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in model space, `(x, y, z, w)` with w = 1.
    pub position: [f32; 4],
    /// Linear RGB color, interpolated across the triangle.
    pub color: [f32; 3],
}

impl Vertex {
    /// Vertex buffer layout: position at shader location 0, color at 1.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: 16,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    };

    pub fn new(position: Vec4, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// CPU-side quad data, before GPU upload.
///
/// Kept separate from [`Mesh`] so the geometry can be inspected and
/// tested without a GPU device.
#[derive(Clone, Debug)]
pub struct QuadGeometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl QuadGeometry {
    /// The four-vertex, two-triangle quad this example renders.
    ///
    /// Both triangles share vertices 0 (the center) and 1 (the apex).
    /// The shared edge is colored magenta; the outer corners are red on
    /// the left and blue on the right.
    pub fn new() -> Self {
        let magenta = Vec3::new(1.0, 0.0, 1.0);
        let red = Vec3::new(1.0, 0.0, 0.0);
        let blue = Vec3::new(0.0, 0.0, 1.0);

        let vertices = vec![
            Vertex::new(Vec4::new(0.0, 0.0, 0.0, 1.0), magenta),
            Vertex::new(Vec4::new(0.0, 1.0, 0.0, 1.0), magenta),
            Vertex::new(Vec4::new(-1.0, -1.0, 0.0, 1.0), red),
            Vertex::new(Vec4::new(1.0, -1.0, 0.0, 1.0), blue),
        ];

        let indices = vec![
            0, 1, 2, // left triangle
            0, 1, 3, // right triangle
        ];

        Self { vertices, indices }
    }
}

impl Default for QuadGeometry {
    fn default() -> Self {
        Self::new()
    }
}

/// GPU-resident quad geometry.
///
/// Buffers are uploaded once at construction and never touched again;
/// the mesh is immutable for the lifetime of the scene. wgpu buffer
/// handles release their memory on drop.
#[derive(Debug)]
pub struct Mesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl Mesh {
    /// Uploads geometry to GPU vertex and index buffers.
    pub fn new(gpu: &GpuContext, geometry: &QuadGeometry) -> Self {
        let vertex_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Quad Vertex Buffer"),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Quad Index Buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_has_four_vertices_and_two_triangles() {
        let quad = QuadGeometry::new();
        assert_eq!(quad.vertices.len(), 4);
        assert_eq!(quad.indices.len(), 6);
    }

    #[test]
    fn triangles_share_the_center_edge() {
        let quad = QuadGeometry::new();
        let (left, right) = quad.indices.split_at(3);
        assert_eq!(&left[..2], &[0, 1]);
        assert_eq!(&right[..2], &[0, 1]);
        assert_ne!(left[2], right[2]);
    }

    #[test]
    fn positions_are_homogeneous_points() {
        let quad = QuadGeometry::new();
        for vertex in &quad.vertices {
            assert_eq!(vertex.position[2], 0.0);
            assert_eq!(vertex.position[3], 1.0);
        }
    }

    #[test]
    fn indices_stay_in_bounds() {
        let quad = QuadGeometry::new();
        assert!(
            quad.indices
                .iter()
                .all(|&i| (i as usize) < quad.vertices.len())
        );
    }
}
