//! # Block Module
//!
//! This module provides the block-level vocabulary of the voxel world: the compact
//! identifier stored in chunks, the built-in block types written by terrain generation,
//! the six block faces, and the catalog mapping identifiers to face textures.

pub mod block_catalog;
pub mod block_side;
pub mod block_type;

pub use block_catalog::{BlockCatalog, BlockDefinition};
pub use block_side::BlockSide;
pub use block_type::BlockType;

/// The underlying integer type used to represent a block in chunk storage.
///
/// `0` is reserved for air. Any other value indexes the [`BlockCatalog`] at `id - 1`.
pub type BlockId = u16;

/// The identifier of an air block. Air has no geometry and never occludes a neighbor.
pub const AIR: BlockId = 0;

/// Returns `true` if the identifier represents a solid (non-air) block.
#[inline]
pub fn is_solid(id: BlockId) -> bool {
    id != AIR
}
