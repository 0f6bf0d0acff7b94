//! # Chunk Iteration Module
//!
//! This module provides an iterator over the non-air blocks of a chunk.
//!
//! Blocks are visited with z outermost, y in the middle and x innermost. The order
//! only affects the order in which mesh geometry is emitted.

use cgmath::Point3;

use crate::engine_state::voxels::block::{is_solid, BlockId};

use super::Chunk;

/// An iterator over all non-air blocks in a chunk.
///
/// Yields the chunk-local position of each solid block together with its identifier.
pub struct ChunkBlockIterator<'a, const N: usize> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk<N>,
    /// Current X position within the chunk
    local_x: usize,
    /// Current Y position within the chunk
    local_y: usize,
    /// Current Z position within the chunk
    local_z: usize,
}

impl<'a, const N: usize> ChunkBlockIterator<'a, N> {
    /// Creates a new `ChunkBlockIterator` positioned before the first block.
    pub fn new(chunk_ref: &'a Chunk<N>) -> Self {
        ChunkBlockIterator {
            chunk_ref,
            local_x: 0,
            local_y: 0,
            local_z: 0,
        }
    }

    /// Moves to the next position in scan order.
    fn advance(&mut self) {
        self.local_x += 1;
        if self.local_x == N {
            self.local_x = 0;
            self.local_y += 1;
            if self.local_y == N {
                self.local_y = 0;
                self.local_z += 1;
            }
        }
    }
}

impl<const N: usize> Iterator for ChunkBlockIterator<'_, N> {
    type Item = (Point3<usize>, BlockId);

    fn next(&mut self) -> Option<Self::Item> {
        while self.local_z < N {
            let (x, y, z) = (self.local_x, self.local_y, self.local_z);
            let id = self.chunk_ref.get_block(x, y, z);
            self.advance();
            if is_solid(id) {
                return Some((Point3::new(x, y, z), id));
            }
        }
        None
    }
}
