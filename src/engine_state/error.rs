//! # Engine Error Types
//!
//! All errors that can occur while configuring, populating, or meshing the voxel world.
//! Block addressing itself never fails; out-of-range reads are air and writes are no-ops.

use cgmath::Point3;
use thiserror::Error;

use super::voxels::block::BlockId;

/// Errors produced by the voxel engine.
#[derive(Error, Debug)]
pub enum VoxelError {
    /// A chunk was constructed from a voxel array of the wrong length.
    #[error("chunk voxel array has {actual} entries, expected {expected}")]
    ChunkSizeMismatch {
        /// The required length (`ChunkSize³`).
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// A non-air block identifier has no catalog entry.
    #[error("block id {id} at {position:?} has no catalog entry")]
    UnknownBlock {
        /// The offending identifier.
        id: BlockId,
        /// Global coordinate of the voxel carrying it.
        position: Point3<i32>,
    },

    /// A world lattice was requested with a zero or oversized extent on some axis.
    #[error("world of {x}x{y}x{z} chunks is empty or too large to address")]
    InvalidDimensions {
        /// Chunks along X.
        x: usize,
        /// Chunks along Y.
        y: usize,
        /// Chunks along Z.
        z: usize,
    },

    /// The engine configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}
