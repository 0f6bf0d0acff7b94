//! # World Module
//!
//! This module provides the `World` struct which owns a fixed lattice of chunks and
//! translates global block coordinates into chunk-local ones.
//!
//! ## Architecture
//!
//! The lattice is dense and never resized: every cell holds exactly one chunk, created
//! with its lattice position when the world is built. Chunk `(x, y, z)` lives at index
//! `y * NX * NZ + z * NX + x`.
//!
//! ## Addressing
//!
//! [`World::get_block`] and [`World::set_block`] are total over all integer inputs.
//! Coordinates outside `[0, chunks * N)` on any axis read as air and ignore writes.
//! This lets the mesher look one block past a chunk edge without special cases.

use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::block::{BlockId, AIR};
use super::chunk::{Chunk, CHUNK_DIMENSION};
use crate::engine_state::error::VoxelError;

/// Size of the world lattice, in chunks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldDimensions {
    /// Number of chunks along X.
    pub chunks_x: usize,
    /// Number of chunks along Y (the vertical axis).
    pub chunks_height: usize,
    /// Number of chunks along Z.
    pub chunks_z: usize,
}

impl WorldDimensions {
    /// Creates lattice dimensions from per-axis chunk counts.
    pub fn new(chunks_x: usize, chunks_height: usize, chunks_z: usize) -> Self {
        WorldDimensions {
            chunks_x,
            chunks_height,
            chunks_z,
        }
    }

    /// Total number of chunks in the lattice, or `None` if it overflows `usize`.
    pub fn chunk_count(&self) -> Option<usize> {
        self.chunks_x
            .checked_mul(self.chunks_height)?
            .checked_mul(self.chunks_z)
    }

    /// Checks that the lattice can back a world of `chunk_edge`-block chunks.
    ///
    /// Every axis needs at least one chunk, and its extent in blocks must fit an
    /// `i32` global coordinate.
    ///
    /// # Returns
    /// The total number of chunks.
    pub fn validate(&self, chunk_edge: usize) -> Result<usize, VoxelError> {
        let axis_fits = |chunks: usize| {
            chunks > 0
                && chunks
                    .checked_mul(chunk_edge)
                    .is_some_and(|blocks| blocks <= i32::MAX as usize)
        };

        match self.chunk_count() {
            Some(count)
                if axis_fits(self.chunks_x)
                    && axis_fits(self.chunks_height)
                    && axis_fits(self.chunks_z) =>
            {
                Ok(count)
            }
            _ => Err(VoxelError::InvalidDimensions {
                x: self.chunks_x,
                y: self.chunks_height,
                z: self.chunks_z,
            }),
        }
    }
}

impl Default for WorldDimensions {
    fn default() -> Self {
        WorldDimensions::new(8, 8, 8)
    }
}

/// Maps a global coordinate to the coordinate of the chunk containing it.
///
/// Uses floor division, so `-1` belongs to chunk `-1` rather than chunk `0`.
#[inline]
pub fn chunk_coordinate_of<const N: usize>(global: Point3<i32>) -> Point3<i32> {
    let n = N as i32;
    Point3::new(
        global.x.div_euclid(n),
        global.y.div_euclid(n),
        global.z.div_euclid(n),
    )
}

/// Maps a global coordinate to its position inside the containing chunk.
///
/// Always in `[0, N)` on every axis, including for negative inputs.
#[inline]
pub fn local_coordinate_of<const N: usize>(global: Point3<i32>) -> Point3<usize> {
    let n = N as i32;
    Point3::new(
        global.x.rem_euclid(n) as usize,
        global.y.rem_euclid(n) as usize,
        global.z.rem_euclid(n) as usize,
    )
}

/// Represents a voxel world composed of a fixed lattice of chunks.
#[derive(Clone, Debug)]
pub struct World<const N: usize = CHUNK_DIMENSION> {
    /// Lattice size in chunks.
    dimensions: WorldDimensions,
    /// Every chunk of the lattice, in lattice index order.
    chunks: Vec<Chunk<N>>,
}

impl<const N: usize> World<N> {
    /// Creates a world filled with air.
    ///
    /// # Errors
    /// [`VoxelError::InvalidDimensions`] if any axis has zero chunks or is too long
    /// to address with `i32` block coordinates.
    pub fn new(dimensions: WorldDimensions) -> Result<Self, VoxelError> {
        let chunk_count = dimensions.validate(N)?;

        let mut chunks = Vec::with_capacity(chunk_count);
        for y in 0..dimensions.chunks_height {
            for z in 0..dimensions.chunks_z {
                for x in 0..dimensions.chunks_x {
                    chunks.push(Chunk::new(Point3::new(x as i32, y as i32, z as i32)));
                }
            }
        }

        Ok(World { dimensions, chunks })
    }

    /// Lattice size in chunks.
    pub fn dimensions(&self) -> WorldDimensions {
        self.dimensions
    }

    /// World size in blocks along each axis.
    pub fn extent(&self) -> Vector3<i32> {
        Vector3::new(
            (self.dimensions.chunks_x * N) as i32,
            (self.dimensions.chunks_height * N) as i32,
            (self.dimensions.chunks_z * N) as i32,
        )
    }

    /// Index of a chunk in the lattice, or `None` outside the lattice.
    pub fn chunk_index(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        let d = &self.dimensions;
        if x < 0 || y < 0 || z < 0 {
            return None;
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= d.chunks_x || y >= d.chunks_height || z >= d.chunks_z {
            return None;
        }
        Some(y * d.chunks_x * d.chunks_z + z * d.chunks_x + x)
    }

    /// Retrieves the chunk at the given lattice position.
    pub fn get_chunk(&self, x: i32, y: i32, z: i32) -> Option<&Chunk<N>> {
        self.chunk_index(x, y, z).map(|i| &self.chunks[i])
    }

    /// Retrieves the chunk at the given lattice position for modification.
    pub fn get_chunk_mut(&mut self, x: i32, y: i32, z: i32) -> Option<&mut Chunk<N>> {
        let index = self.chunk_index(x, y, z)?;
        Some(&mut self.chunks[index])
    }

    /// All chunks in lattice index order.
    pub fn chunks(&self) -> &[Chunk<N>] {
        &self.chunks
    }

    /// Resolves a global coordinate to a chunk index and chunk-local coordinate.
    ///
    /// Returns `None` for any coordinate outside the world extent.
    pub fn locate(&self, x: i32, y: i32, z: i32) -> Option<(usize, Point3<usize>)> {
        let extent = self.extent();
        if x < 0 || y < 0 || z < 0 || x >= extent.x || y >= extent.y || z >= extent.z {
            return None;
        }

        let global = Point3::new(x, y, z);
        let chunk = chunk_coordinate_of::<N>(global);
        let index = self.chunk_index(chunk.x, chunk.y, chunk.z)?;
        Some((index, local_coordinate_of::<N>(global)))
    }

    /// Gets the block at a global coordinate. Anything outside the world is air.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        match self.locate(x, y, z) {
            Some((index, local)) => self.chunks[index].get_block(local.x, local.y, local.z),
            None => AIR,
        }
    }

    /// Sets the block at a global coordinate. Writes outside the world are ignored.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        if let Some((index, local)) = self.locate(x, y, z) {
            self.chunks[index].set_block(local.x, local.y, local.z, id);
        }
    }

    /// Resets every block of every chunk to air.
    pub fn clear(&mut self) {
        self.chunks.iter_mut().for_each(Chunk::<N>::clear);
    }
}
