//! Mesh data produced for a single chunk.

use cgmath::Point3;

use super::face::Face;
use crate::engine_state::rendering::Vertex;

/// The triangle list of one chunk, ready for upload.
///
/// Vertices come in runs of six, one run per visible face, in the order the faces
/// were found during the chunk scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkMesh {
    /// Lattice position of the chunk this mesh belongs to
    pub position: Point3<i32>,
    /// Flat triangle list, no index buffer
    pub vertices: Vec<Vertex>,
}

impl ChunkMesh {
    /// Creates an empty mesh for the chunk at `position`.
    pub fn new(position: Point3<i32>) -> Self {
        ChunkMesh {
            position,
            vertices: Vec::new(),
        }
    }

    /// Number of vertices to draw.
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Number of visible faces in the mesh.
    pub fn face_count(&self) -> usize {
        self.vertices.len() / Face::VERTEX_COUNT
    }

    /// Returns `true` if the chunk has nothing to render.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex buffer as raw bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
