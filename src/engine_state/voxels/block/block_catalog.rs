//! # Block Catalog Module
//!
//! Maps block identifiers to the texture index of each of their six faces.
//!
//! The catalog is built once from configuration and handed to the mesher by reference.
//! It is never mutated after construction.

use cgmath::Point3;
use serde::{Deserialize, Serialize};

use super::{block_side::BlockSide, BlockId, AIR};
use crate::engine_state::error::VoxelError;

/// One catalog entry as it appears in configuration.
///
/// The entry's position in the definition list determines its identifier:
/// the first definition is identifier `1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// Human readable name, also used to check built-in block placement.
    pub name: String,
    /// Texture indices in the order [top, bottom, front, back, left, right].
    pub textures: [u32; 6],
}

impl BlockDefinition {
    /// Creates a definition from a name and its six face textures.
    pub fn new(name: &str, textures: [u32; 6]) -> Self {
        BlockDefinition {
            name: name.to_string(),
            textures,
        }
    }

    /// The definitions for the built-in grass, dirt and stone blocks.
    pub fn defaults() -> Vec<BlockDefinition> {
        vec![
            BlockDefinition::new("grass", [0, 2, 1, 1, 1, 1]),
            BlockDefinition::new("dirt", [2, 2, 2, 2, 2, 2]),
            BlockDefinition::new("stone", [3, 3, 3, 3, 3, 3]),
        ]
    }
}

/// Immutable mapping from block identifier to per-face texture indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockCatalog {
    /// Texture arrays indexed by `id - 1`.
    entries: Vec<[u32; 6]>,
}

impl BlockCatalog {
    /// Builds a catalog from definitions in identifier order.
    pub fn new(definitions: &[BlockDefinition]) -> Self {
        BlockCatalog {
            entries: definitions.iter().map(|d| d.textures).collect(),
        }
    }

    /// Number of non-air block types in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no block types.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` has an entry. Air never does.
    pub fn contains(&self, id: BlockId) -> bool {
        id != AIR && (id as usize) <= self.entries.len()
    }

    /// Gets the six texture indices of a block.
    ///
    /// # Arguments
    /// * `id` - The block identifier
    /// * `position` - Global coordinate of the voxel, reported in the error
    ///
    /// # Errors
    /// [`VoxelError::UnknownBlock`] if `id` is air or past the end of the catalog.
    pub fn texture_indices(
        &self,
        id: BlockId,
        position: Point3<i32>,
    ) -> Result<&[u32; 6], VoxelError> {
        if id == AIR {
            return Err(VoxelError::UnknownBlock { id, position });
        }
        self.entries
            .get(id as usize - 1)
            .ok_or(VoxelError::UnknownBlock { id, position })
    }

    /// Gets the texture index of one face of a block.
    pub fn face_texture(
        &self,
        id: BlockId,
        side: BlockSide,
        position: Point3<i32>,
    ) -> Result<u32, VoxelError> {
        Ok(self.texture_indices(id, position)?[side.slot()])
    }
}

impl Default for BlockCatalog {
    fn default() -> Self {
        BlockCatalog::new(&BlockDefinition::defaults())
    }
}
