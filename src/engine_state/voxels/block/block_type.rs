//! # Block Type Module
//!
//! This module defines the built-in block types of the voxel world. Terrain generation
//! writes these identifiers directly, so their numeric values are part of the world contract.

use num_derive::FromPrimitive;
use phf::phf_map;

use super::BlockId;

/// Enumerates the block types the engine itself knows about.
///
/// The discriminant of each variant is the identifier stored in chunk storage.
/// The `FromPrimitive` derive allows conversion from raw identifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and transparent.
    AIR = 0,

    /// Grass, used for the topmost block of every terrain column.
    GRASS = 1,

    /// Dirt, filling the band between the grass cap and the stone below.
    DIRT = 2,

    /// Stone, filling everything at or below four blocks under the surface.
    STONE = 3,
}

/// Compile-time lookup from configuration names to built-in block types.
static BLOCK_TYPE_NAMES: phf::Map<&'static str, BlockType> = phf_map! {
    "air" => BlockType::AIR,
    "grass" => BlockType::GRASS,
    "dirt" => BlockType::DIRT,
    "stone" => BlockType::STONE,
};

impl BlockType {
    /// All solid built-in block types, in identifier order.
    pub const SOLID: [BlockType; 3] = [BlockType::GRASS, BlockType::DIRT, BlockType::STONE];

    /// Converts a raw identifier into a built-in block type.
    ///
    /// # Returns
    /// `None` if the identifier does not name a built-in type (it may still be a
    /// valid catalog entry defined by configuration).
    pub fn from_id(id: BlockId) -> Option<Self> {
        num_traits::FromPrimitive::from_u16(id)
    }

    /// Looks up a built-in block type by its configuration name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        BLOCK_TYPE_NAMES.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// The identifier stored in chunk storage for this block type.
    #[inline]
    pub fn id(self) -> BlockId {
        self as BlockId
    }
}
