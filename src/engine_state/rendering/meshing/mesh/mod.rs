//! Mesh generation building blocks for voxel rendering.
//!
//! # Architecture
//! - [`ChunkMesh`]: The flat triangle list produced for one chunk
//! - [`Face`]: The unit-quad template for one side of a voxel
//!
//! Each visible voxel face becomes two triangles (six vertices). Faces are never merged.

mod face;
mod mesh;

pub use face::Face;
pub use mesh::*;
