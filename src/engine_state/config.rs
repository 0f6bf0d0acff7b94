//! # Engine Configuration
//!
//! Startup configuration of the engine, loaded once from JSON. Every field has a
//! default, so an empty object (or no file at all) yields the reference world:
//! 8x8x8 chunks, Perlin terrain around height 50, and the built-in block catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::VoxelError;
use super::voxels::{
    block::{block_type::BlockType, BlockCatalog, BlockDefinition},
    chunk::CHUNK_DIMENSION,
    terrain::TerrainConfig,
    world::WorldDimensions,
};

/// Environment variable naming a JSON configuration file for [`crate::run`].
pub const CONFIG_PATH_ENV: &str = "VOXEL_WORLD_CONFIG";

/// All startup parameters of the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Size of the chunk lattice
    pub world: WorldDimensions,
    /// Height-field parameters
    pub terrain: TerrainConfig,
    /// Block catalog in identifier order (first entry is id 1)
    pub blocks: Vec<BlockDefinition>,
    /// Worker threads used when meshing the whole world
    pub mesh_workers: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            world: WorldDimensions::default(),
            terrain: TerrainConfig::default(),
            blocks: BlockDefinition::defaults(),
            mesh_workers: 4,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, VoxelError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VoxelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks the configuration for inconsistencies that would break the engine.
    ///
    /// Terrain writes the built-in ids directly, so a definition named after a
    /// built-in block must sit at that block's identifier, and every built-in solid
    /// block must have a definition. World dimensions are checked against
    /// [`CHUNK_DIMENSION`]-block chunks.
    pub fn validate(&self) -> Result<(), VoxelError> {
        self.world.validate(CHUNK_DIMENSION)?;

        if self.mesh_workers == 0 {
            return Err(VoxelError::InvalidConfig(
                "mesh_workers must be at least 1".to_string(),
            ));
        }

        for (i, definition) in self.blocks.iter().enumerate() {
            let id = i + 1;
            match BlockType::from_name(&definition.name) {
                Some(BlockType::AIR) => {
                    return Err(VoxelError::InvalidConfig(format!(
                        "block {id} may not be named \"{}\"",
                        definition.name
                    )))
                }
                Some(block_type) if block_type.id() as usize != id => {
                    return Err(VoxelError::InvalidConfig(format!(
                        "block \"{}\" must have id {}, found at id {id}",
                        definition.name,
                        block_type.id()
                    )))
                }
                _ => {}
            }
        }

        if self.blocks.len() < BlockType::SOLID.len() {
            return Err(VoxelError::InvalidConfig(format!(
                "catalog defines {} blocks, terrain needs at least {}",
                self.blocks.len(),
                BlockType::SOLID.len()
            )));
        }

        Ok(())
    }

    /// Builds the immutable block catalog described by this configuration.
    pub fn catalog(&self) -> BlockCatalog {
        BlockCatalog::new(&self.blocks)
    }
}
