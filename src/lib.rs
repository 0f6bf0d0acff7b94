#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! A voxel world made of fixed-size cubic chunks, filled from a 2D height field and
//! turned into face-culled triangle lists ready for a graphics backend.
//!
//! ## Key Modules
//!
//! * `engine_state::voxels` - Blocks, chunks, the world lattice and terrain generation
//! * `engine_state::rendering` - Per-chunk meshing and the render backend seam
//! * `engine_state::config` - JSON startup configuration
//!
//! ## Architecture
//!
//! Terrain generation writes into the world, the mesher reads the world (so faces on
//! chunk edges are culled against neighboring chunks), and the resulting vertex
//! buffers are handed to a [`RenderBackend`]. Window, camera, input and GPU setup
//! live in the backend and are not part of this crate.
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_world::run();
//! }
//! ```
//!
//! Set `VOXEL_WORLD_CONFIG` to a JSON file to override the defaults, and `RUST_LOG`
//! to control log output.

use log::{error, info};
use web_time::Instant;

pub mod engine_state;

pub use engine_state::{
    config::{EngineConfig, CONFIG_PATH_ENV},
    error::VoxelError,
    rendering::{
        meshing::{ChunkMesh, Face, MeshBuilder},
        HeadlessBackend, RenderBackend, Vertex,
    },
    voxels::{
        block::{BlockCatalog, BlockDefinition, BlockId, BlockSide, BlockType, AIR},
        chunk::{Chunk, CHUNK_DIMENSION},
        terrain::{TerrainConfig, TerrainGenerator},
        world::{World, WorldDimensions},
    },
    EngineState,
};

/// Label of the log line reporting the total world build time.
pub const WORLD_BUILD_STOPWATCH: &str = "World Build";

/// Loads the configuration named by [`CONFIG_PATH_ENV`], or the defaults.
pub fn load_config() -> Result<EngineConfig, VoxelError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => {
            info!("Loading configuration from {}", path);
            EngineConfig::from_file(path)
        }
        Err(_) => Ok(EngineConfig::default()),
    }
}

/// Builds the world headlessly: populate, mesh, and upload to a [`HeadlessBackend`].
pub fn build_world(config: EngineConfig) -> Result<HeadlessBackend, VoxelError> {
    let start = Instant::now();

    let mut engine: EngineState = EngineState::new(config)?;
    engine.populate();
    engine.build_meshes()?;

    let mut backend = HeadlessBackend::default();
    let uploaded = engine.upload_meshes(&mut backend);
    backend.render_pass();

    info!(
        "{}: {} of {} chunks uploaded in {:?}",
        WORLD_BUILD_STOPWATCH,
        uploaded,
        engine.world().chunks().len(),
        start.elapsed()
    );
    Ok(backend)
}

/// Native entry point: initialises logging and builds the configured world.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    if let Err(e) = load_config().and_then(build_world) {
        error!("World build failed: {}", e);
        std::process::exit(1);
    }
}
