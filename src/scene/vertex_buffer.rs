use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

/// Interleaved vertex layout uploaded to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub tex_coord: Vec2,
}

impl Vertex {
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// CPU-side mirror of the model's vertex buffer.
///
/// Contents are only ever replaced as a whole; each upload bumps the version
/// so the renderer knows to re-send the bytes.
#[derive(Debug, Clone, Default)]
pub struct VertexBuffer {
    vertices: Vec<Vertex>,
    version: u64,
}

impl VertexBuffer {
    #[must_use]
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            version: 0,
        }
    }

    /// Replaces the whole buffer and marks it changed.
    pub fn upload(&mut self, vertices: Vec<Vertex>) {
        self.vertices = vertices;
        self.version = self.version.wrapping_add(1);
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes in upload layout.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Gets the current version number
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }
}
