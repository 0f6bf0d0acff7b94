//! Mesh generation for voxel rendering.
//!
//! This module converts the voxels of a chunk into a flat triangle list, emitting
//! one quad per visible block face.
//!
//! # Architecture
//! - `MeshBuilder`: Scans chunks and decides which faces are visible
//! - `mesh/`: The per-face quad template and the per-chunk mesh container
//!
//! # Face Culling
//! A face is visible when the block next to it is air. The neighbor is read through
//! [`World::get_block`], so faces on a chunk edge are culled against the adjacent
//! chunk, and faces on the world edge are always visible.
//!
//! # Parallelism
//! Meshing only reads the world, so chunks can be meshed on separate threads.
//! [`MeshBuilder::build_world`] deals chunk indices round-robin to a pool of scoped
//! worker threads and gathers the meshes back in lattice order.

use std::sync::mpsc::channel;
use std::thread;

use cgmath::Point3;
use log::{debug, info};
use web_time::Instant;

mod mesh;

pub use mesh::*;

use crate::engine_state::{
    error::VoxelError,
    voxels::{
        block::{block_side::BlockSide, is_solid, BlockCatalog},
        chunk::Chunk,
        world::World,
    },
};

/// Turns chunks into renderable meshes using an injected block catalog.
#[derive(Clone, Copy, Debug)]
pub struct MeshBuilder<'a> {
    /// Texture lookup for every non-air block id
    catalog: &'a BlockCatalog,
}

impl<'a> MeshBuilder<'a> {
    /// Creates a mesh builder reading textures from `catalog`.
    pub fn new(catalog: &'a BlockCatalog) -> Self {
        MeshBuilder { catalog }
    }

    /// Builds the mesh of one chunk.
    ///
    /// Neighbor visibility is decided by `world`, which must contain `chunk`'s
    /// current contents. Vertex positions are in global block coordinates.
    ///
    /// # Errors
    /// [`VoxelError::UnknownBlock`] if the chunk holds an id the catalog does not know.
    pub fn build<const N: usize>(
        &self,
        chunk: &Chunk<N>,
        world: &World<N>,
    ) -> Result<ChunkMesh, VoxelError> {
        let mut mesh = ChunkMesh::new(chunk.position());
        let offset = chunk.world_offset();

        for (local, id) in chunk.solid_blocks() {
            let global = Point3::new(local.x as i32, local.y as i32, local.z as i32) + offset;
            let textures = self.catalog.texture_indices(id, global)?;

            for side in BlockSide::all() {
                let neighbor = global + side.normal();
                if is_solid(world.get_block(neighbor.x, neighbor.y, neighbor.z)) {
                    continue;
                }
                Face::for_side(side).emit(global, textures[side.slot()], &mut mesh.vertices);
            }
        }

        debug!(
            "Meshed chunk {:?}: {} faces",
            chunk.position(),
            mesh.face_count()
        );
        Ok(mesh)
    }

    /// Builds the meshes of every chunk in `world`, in lattice index order.
    ///
    /// With more than one worker the chunks are meshed on scoped threads. The
    /// result is identical to meshing each chunk in turn.
    ///
    /// # Errors
    /// The error of the lowest-indexed chunk that failed to mesh.
    pub fn build_world<const N: usize>(
        &self,
        world: &World<N>,
        workers: usize,
    ) -> Result<Vec<ChunkMesh>, VoxelError> {
        let start = Instant::now();
        let chunks = world.chunks();

        let meshes = if workers <= 1 || chunks.len() <= 1 {
            chunks
                .iter()
                .map(|chunk| self.build(chunk, world))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            self.build_parallel(world, workers)?
        };

        info!(
            "Meshed {} chunks ({} vertices) in {:?}",
            meshes.len(),
            meshes.iter().map(|m| m.vertices.len()).sum::<usize>(),
            start.elapsed()
        );
        Ok(meshes)
    }

    fn build_parallel<const N: usize>(
        &self,
        world: &World<N>,
        workers: usize,
    ) -> Result<Vec<ChunkMesh>, VoxelError> {
        let chunks = world.chunks();

        // Every chunk index is sent exactly once and a panicking worker re-panics
        // when the scope ends, so one result arrives per chunk.
        let mut results: Vec<(usize, Result<ChunkMesh, VoxelError>)> = thread::scope(|scope| {
            let (result_tx, result_rx) = channel();
            let mut task_senders = Vec::with_capacity(workers);

            for _ in 0..workers.min(chunks.len()) {
                let (task_tx, task_rx) = channel::<usize>();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    while let Ok(index) = task_rx.recv() {
                        let _ = result_tx.send((index, self.build(&chunks[index], world)));
                    }
                });
                task_senders.push(task_tx);
            }
            drop(result_tx);

            for index in 0..chunks.len() {
                let _ = task_senders[index % task_senders.len()].send(index);
            }
            drop(task_senders);

            result_rx.into_iter().collect()
        });

        results.sort_unstable_by_key(|(index, _)| *index);
        results.into_iter().map(|(_, result)| result).collect()
    }
}
