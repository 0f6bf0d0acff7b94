//! Vertex data structures and layouts for voxel rendering.
//!
//! This module defines the vertex format emitted by the mesher and the layout the
//! render backend needs to bind it.

use cgmath::Point3;

/// A vertex in the voxel rendering pipeline.
///
/// # Memory Layout
/// - Position: [f32; 3] (12 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
/// - Texture Index: f32 (4 bytes)
///
/// Total size: 24 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in global block coordinates
    pub position: [f32; 3],
    /// UV texture coordinates, each component 0.0 or 1.0
    pub uv: [f32; 2],
    /// Index of the texture in the texture atlas
    pub texture_index: f32,
}

impl Vertex {
    /// Byte distance between consecutive vertices.
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of the position attribute (shader location 0, float32x3).
    pub const POSITION_OFFSET: usize = 0;
    /// Byte offset of the UV attribute (shader location 1, float32x2).
    pub const UV_OFFSET: usize = 12;
    /// Byte offset of the texture index attribute (shader location 2, float32).
    pub const TEXTURE_INDEX_OFFSET: usize = 20;

    /// Creates a new vertex with the given parameters.
    ///
    /// # Arguments
    /// * `pos` - The position of the vertex in global block coordinates
    /// * `u` - U texture coordinate (0 or 1)
    /// * `v` - V texture coordinate (0 or 1)
    /// * `texture_index` - Index of the texture in the atlas
    pub fn new(pos: Point3<i32>, u: u8, v: u8, texture_index: u32) -> Self {
        Vertex {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            uv: [u as f32, v as f32],
            texture_index: texture_index as f32,
        }
    }
}
