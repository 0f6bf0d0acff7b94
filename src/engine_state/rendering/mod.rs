//! Rendering system for the voxel engine.
//!
//! This module turns voxel data into vertex buffers and defines the seam to the
//! graphics backend that uploads and draws them. Device setup, pipelines, cameras and
//! texture atlases belong to the backend, not to this crate.

use cgmath::Point3;
use log::{debug, info};

pub mod meshing;
mod vertex;

// Re-export commonly used types
pub use vertex::Vertex;

/// The consumer of chunk meshes: a graphics backend owning GPU buffers.
///
/// Implementations receive each non-empty chunk mesh once as raw vertex bytes
/// (see [`Vertex`] for the layout) and draw everything uploaded so far when asked.
pub trait RenderBackend {
    /// Uploads (or replaces) the vertex buffer of the chunk at `position`.
    fn upload_chunk(&mut self, position: Point3<i32>, vertex_bytes: &[u8], vertex_count: u32);

    /// Records and submits one render pass over all uploaded chunks.
    fn render_pass(&mut self);
}

/// A backend without a GPU that keeps upload statistics and logs them.
///
/// Used when the engine runs headless, e.g. to time world builds.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    /// Number of chunk buffers uploaded
    pub chunks_uploaded: usize,
    /// Total vertices across all uploads
    pub vertices_uploaded: u64,
    /// Total bytes across all uploads
    pub bytes_uploaded: u64,
    /// Number of render passes requested
    pub render_passes: usize,
}

impl RenderBackend for HeadlessBackend {
    fn upload_chunk(&mut self, position: Point3<i32>, vertex_bytes: &[u8], vertex_count: u32) {
        debug!(
            "Uploading chunk {:?}: {} vertices, {} bytes",
            position,
            vertex_count,
            vertex_bytes.len()
        );
        self.chunks_uploaded += 1;
        self.vertices_uploaded += vertex_count as u64;
        self.bytes_uploaded += vertex_bytes.len() as u64;
    }

    fn render_pass(&mut self) {
        self.render_passes += 1;
        info!(
            "Render pass {}: {} chunks, {} vertices",
            self.render_passes, self.chunks_uploaded, self.vertices_uploaded
        );
    }
}
