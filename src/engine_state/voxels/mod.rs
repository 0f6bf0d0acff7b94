//! # Voxel Engine Core
//!
//! This module contains the voxel data model: how blocks are identified, how they are
//! stored in chunks, how chunks are arranged in a world, and how terrain fills them.
//!
//! ## Architecture
//!
//! * **Block**: Block identifiers, built-in block types, faces and the texture catalog
//! * **Chunk**: Fixed-size dense 3D arrays of block identifiers
//! * **World**: A fixed lattice of chunks with total global block addressing
//! * **Terrain**: Height-field terrain synthesis from a 2D noise source
//!
//! ## Data Flow
//!
//! 1. The terrain generator writes layered blocks into the world
//! 2. The world routes each write to the owning chunk
//! 3. The mesher reads the world (not just one chunk) to decide face visibility
//!
//! ## Thread Safety
//!
//! Nothing here uses interior mutability. A `&World` can be shared across threads
//! while meshing; population needs `&mut World` and therefore runs alone.

pub mod block;
pub mod chunk;
pub mod terrain;
pub mod world;
