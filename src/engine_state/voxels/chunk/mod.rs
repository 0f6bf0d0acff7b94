//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a fixed-size cube of block identifiers
//! plus the chunk's position in the world lattice.
//!
//! ## Storage
//!
//! Voxels are kept in a dense array of `N³` identifiers. The index of a local
//! coordinate `(x, y, z)` is `y * N * N + z * N + x`, so a horizontal slab of the
//! chunk is contiguous in memory.
//!
//! Chunks do not bounds-check local coordinates. The [`World`] validates global
//! coordinates before it ever reaches into a chunk, and a bad local coordinate here
//! panics through slice indexing.
//!
//! [`World`]: super::world::World

use cgmath::{Point3, Vector3};

use super::block::{is_solid, BlockId, AIR};
use crate::engine_state::error::VoxelError;

pub mod chunk_iteration;

use chunk_iteration::ChunkBlockIterator;

/// The dimension (width, height, depth) of a chunk in blocks.
pub const CHUNK_DIMENSION: usize = 32;

/// Represents an `N`x`N`x`N` collection of voxel blocks in the world.
///
/// `N` defaults to [`CHUNK_DIMENSION`]; smaller sizes are mostly useful in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk<const N: usize = CHUNK_DIMENSION> {
    /// The position of this chunk in chunk coordinates (not block coordinates).
    position: Point3<i32>,

    /// Dense block storage, `N³` entries.
    blocks: Vec<BlockId>,
}

impl<const N: usize> Chunk<N> {
    /// The number of blocks in one horizontal plane of the chunk.
    pub const PLANE_SIZE: usize = N * N;
    /// The total number of blocks in the chunk.
    pub const VOLUME: usize = N * N * N;

    /// Creates a new, completely empty chunk (all blocks are air).
    pub fn new(position: Point3<i32>) -> Self {
        Chunk {
            position,
            blocks: vec![AIR; Self::VOLUME],
        }
    }

    /// Creates a chunk from an existing voxel array.
    ///
    /// # Errors
    /// [`VoxelError::ChunkSizeMismatch`] if `blocks` does not hold exactly `N³` entries.
    pub fn from_blocks(position: Point3<i32>, blocks: Vec<BlockId>) -> Result<Self, VoxelError> {
        if blocks.len() != Self::VOLUME {
            return Err(VoxelError::ChunkSizeMismatch {
                expected: Self::VOLUME,
                actual: blocks.len(),
            });
        }
        Ok(Chunk { position, blocks })
    }

    /// The lattice position of this chunk.
    #[inline]
    pub fn position(&self) -> Point3<i32> {
        self.position
    }

    /// The global coordinate of this chunk's local origin.
    #[inline]
    pub fn world_offset(&self) -> Vector3<i32> {
        Vector3::new(self.position.x, self.position.y, self.position.z) * N as i32
    }

    /// Converts a local coordinate to its storage index.
    #[inline]
    pub fn index(x: usize, y: usize, z: usize) -> usize {
        y * Self::PLANE_SIZE + z * N + x
    }

    /// Gets the block at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates fall outside the chunk.
    #[inline]
    pub fn get_block(&self, x: usize, y: usize, z: usize) -> BlockId {
        self.blocks[Self::index(x, y, z)]
    }

    /// Sets the block at the specified chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates fall outside the chunk.
    #[inline]
    pub fn set_block(&mut self, x: usize, y: usize, z: usize, id: BlockId) {
        self.blocks[Self::index(x, y, z)] = id;
    }

    /// Raw block storage in index order.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Number of non-air blocks in the chunk.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|&&id| is_solid(id)).count()
    }

    /// Returns `true` if every block in the chunk is air.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&id| id == AIR)
    }

    /// Resets every block to air.
    pub fn clear(&mut self) {
        self.blocks.fill(AIR);
    }

    /// Iterates over the non-air blocks of the chunk, z outermost and x innermost.
    pub fn solid_blocks(&self) -> ChunkBlockIterator<'_, N> {
        ChunkBlockIterator::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type SmallChunk = Chunk<4>;

    #[test]
    fn storage_is_y_major() {
        assert_eq!(SmallChunk::index(1, 0, 0), 1);
        assert_eq!(SmallChunk::index(0, 0, 1), 4);
        assert_eq!(SmallChunk::index(0, 1, 0), 16);
        assert_eq!(SmallChunk::index(3, 3, 3), 63);
    }

    #[test]
    fn from_blocks_rejects_wrong_length() {
        let result = SmallChunk::from_blocks(Point3::new(0, 0, 0), vec![AIR; 63]);
        match result {
            Err(VoxelError::ChunkSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 64);
                assert_eq!(actual, 63);
            }
            other => panic!("expected a size mismatch, got {other:?}"),
        }
        assert!(SmallChunk::from_blocks(Point3::new(0, 0, 0), vec![1; 64]).is_ok());
    }

    #[test]
    fn set_then_get_and_clear() {
        let mut chunk = SmallChunk::new(Point3::new(1, 2, 3));
        assert!(chunk.is_empty());
        chunk.set_block(1, 2, 3, 7);
        assert_eq!(chunk.get_block(1, 2, 3), 7);
        assert_eq!(chunk.blocks()[SmallChunk::index(1, 2, 3)], 7);
        assert_eq!(chunk.solid_count(), 1);
        chunk.clear();
        assert!(chunk.is_empty());
    }

    #[test]
    fn world_offset_scales_lattice_position() {
        let chunk = SmallChunk::new(Point3::new(1, -2, 3));
        assert_eq!(chunk.world_offset(), Vector3::new(4, -8, 12));
    }

    #[test]
    #[should_panic]
    fn out_of_range_local_coordinate_panics() {
        let chunk = SmallChunk::new(Point3::new(0, 0, 0));
        chunk.get_block(0, 4, 0);
    }
}
