//! # Engine State Module
//!
//! The module that ties the voxel world, terrain generation and meshing together.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the world, the block catalog and the current chunk meshes
//! * `config` - Startup configuration loaded from JSON
//! * `error` - The engine's error type
//! * `rendering` - Meshing and the render backend seam
//! * `voxels` - Blocks, chunks, the world lattice and terrain
//!
//! ## Lifecycle
//!
//! 1. `EngineState::new` builds an all-air world from the configuration
//! 2. `populate` fills it with terrain
//! 3. `build_meshes` meshes every chunk
//! 4. `upload_meshes` hands non-empty meshes to the render backend
//! 5. Edits through `set_block` mark chunks dirty; `rebuild_dirty_meshes` remeshes them

use std::collections::BTreeSet;

use cgmath::Point3;
use log::{info, warn};
use noise::Perlin;

use rendering::{
    meshing::{ChunkMesh, MeshBuilder},
    RenderBackend,
};
use voxels::{
    block::{BlockCatalog, BlockId},
    chunk::CHUNK_DIMENSION,
    terrain::TerrainGenerator,
    world::{chunk_coordinate_of, local_coordinate_of, World},
};

pub mod config;
pub mod error;
pub mod rendering;
pub mod voxels;

use config::EngineConfig;
use error::VoxelError;

/// The main state container for the voxel engine
///
/// # Examples
///
/// ```no_run
/// use voxel_world::{EngineConfig, EngineState, HeadlessBackend};
///
/// let mut engine: EngineState = EngineState::new(EngineConfig::default())?;
/// engine.populate();
/// engine.build_meshes()?;
///
/// let mut backend = HeadlessBackend::default();
/// engine.upload_meshes(&mut backend);
/// # Ok::<(), voxel_world::VoxelError>(())
/// ```
pub struct EngineState<const N: usize = CHUNK_DIMENSION> {
    /// The voxel world containing all chunk data
    world: World<N>,
    /// Texture lookup shared by every meshing pass
    catalog: BlockCatalog,
    /// Terrain source used by `populate`
    terrain: TerrainGenerator<Perlin>,
    /// Latest mesh of each chunk, in lattice index order
    meshes: Vec<Option<ChunkMesh>>,
    /// Chunks whose mesh no longer matches their blocks
    dirty_chunks: BTreeSet<usize>,
    /// Worker threads used by `build_meshes`
    mesh_workers: usize,
}

impl<const N: usize> EngineState<N> {
    /// Creates a new engine state with an all-air world.
    ///
    /// # Errors
    /// Any configuration inconsistency reported by [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self, VoxelError> {
        config.validate()?;
        let world = World::new(config.world)?;
        let chunk_count = world.chunks().len();

        info!(
            "Created world of {}x{}x{} chunks ({} blocks per chunk edge)",
            config.world.chunks_x, config.world.chunks_height, config.world.chunks_z, N
        );

        Ok(EngineState {
            world,
            catalog: config.catalog(),
            terrain: TerrainGenerator::perlin(config.terrain),
            meshes: vec![None; chunk_count],
            dirty_chunks: BTreeSet::new(),
            mesh_workers: config.mesh_workers,
        })
    }

    /// The voxel world.
    pub fn world(&self) -> &World<N> {
        &self.world
    }

    /// The block catalog used for meshing.
    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    /// Fills the world with terrain and marks every chunk dirty.
    pub fn populate(&mut self) {
        self.terrain.populate(&mut self.world);
        self.dirty_chunks = (0..self.world.chunks().len()).collect();
    }

    /// Meshes every chunk of the world, replacing all existing meshes.
    pub fn build_meshes(&mut self) -> Result<(), VoxelError> {
        let meshes = MeshBuilder::new(&self.catalog).build_world(&self.world, self.mesh_workers)?;
        self.meshes = meshes.into_iter().map(Some).collect();
        self.dirty_chunks.clear();
        Ok(())
    }

    /// The current mesh of a chunk, or `None` if it has never been meshed.
    pub fn mesh(&self, chunk_index: usize) -> Option<&ChunkMesh> {
        self.meshes.get(chunk_index).and_then(Option::as_ref)
    }

    /// Lattice indices of chunks waiting to be remeshed, in ascending order.
    pub fn dirty_chunks(&self) -> impl Iterator<Item = usize> + '_ {
        self.dirty_chunks.iter().copied()
    }

    /// Reads a block at a global coordinate. Outside the world is air.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        self.world.get_block(x, y, z)
    }

    /// Writes a block at a global coordinate and marks affected chunks dirty.
    ///
    /// Besides the owning chunk, a chunk across a face the block touches is
    /// marked too, since its culling may change. Writes outside the world do nothing.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, id: BlockId) {
        let Some((index, _)) = self.world.locate(x, y, z) else {
            return;
        };
        if self.world.get_block(x, y, z) == id {
            return;
        }
        self.world.set_block(x, y, z, id);
        self.dirty_chunks.insert(index);

        let global = Point3::new(x, y, z);
        let chunk = chunk_coordinate_of::<N>(global);
        let local = local_coordinate_of::<N>(global);
        let edge = N - 1;
        let neighbors = [
            (local.x == 0, Point3::new(chunk.x - 1, chunk.y, chunk.z)),
            (local.x == edge, Point3::new(chunk.x + 1, chunk.y, chunk.z)),
            (local.y == 0, Point3::new(chunk.x, chunk.y - 1, chunk.z)),
            (local.y == edge, Point3::new(chunk.x, chunk.y + 1, chunk.z)),
            (local.z == 0, Point3::new(chunk.x, chunk.y, chunk.z - 1)),
            (local.z == edge, Point3::new(chunk.x, chunk.y, chunk.z + 1)),
        ];
        for (on_edge, neighbor) in neighbors {
            if !on_edge {
                continue;
            }
            if let Some(neighbor_index) = self.world.chunk_index(neighbor.x, neighbor.y, neighbor.z)
            {
                self.dirty_chunks.insert(neighbor_index);
            }
        }
    }

    /// Remeshes only the chunks marked dirty since the last meshing pass.
    ///
    /// # Returns
    /// The number of chunks remeshed.
    pub fn rebuild_dirty_meshes(&mut self) -> Result<usize, VoxelError> {
        let builder = MeshBuilder::new(&self.catalog);
        let dirty: Vec<usize> = self.dirty_chunks.iter().copied().collect();
        for &index in &dirty {
            let mesh = builder.build(&self.world.chunks()[index], &self.world)?;
            self.meshes[index] = Some(mesh);
            self.dirty_chunks.remove(&index);
        }
        Ok(dirty.len())
    }

    /// Hands every non-empty mesh to the render backend.
    ///
    /// Chunks with nothing to draw are skipped rather than uploaded as empty buffers.
    ///
    /// # Returns
    /// The number of chunks uploaded.
    pub fn upload_meshes(&self, backend: &mut impl RenderBackend) -> usize {
        if !self.dirty_chunks.is_empty() {
            warn!(
                "Uploading meshes with {} chunks still dirty",
                self.dirty_chunks.len()
            );
        }

        let mut uploaded = 0;
        for mesh in self.meshes.iter().flatten() {
            if mesh.is_empty() {
                continue;
            }
            backend.upload_chunk(mesh.position, mesh.as_bytes(), mesh.vertex_count());
            uploaded += 1;
        }
        uploaded
    }
}
