//! # Terrain Module
//!
//! Deterministic terrain synthesis from a 2D height field.
//!
//! Every `(x, z)` column of the world samples a noise function to get a surface height
//! `h`, then fills `y = 0..h` with layered blocks:
//!
//! * `y <= h - 4` is stone
//! * `y == h - 1` is grass
//! * everything between is dirt
//!
//! The noise source is injected, so tests can pin the height field exactly.

use log::{debug, info};
use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};
use web_time::Instant;

use super::block::{block_type::BlockType, BlockId};
use super::world::World;

/// Parameters of the terrain height field.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed handed to the default Perlin noise source.
    pub seed: u32,
    /// Surface height where the noise samples zero.
    pub base_height: f64,
    /// Height change for a noise sample of one.
    pub amplitude: f64,
    /// Horizontal distance, in chunks, covered by one unit of noise input.
    pub horizontal_scale_chunks: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            seed: 0,
            base_height: 50.0,
            amplitude: 20.0,
            horizontal_scale_chunks: 3.0,
        }
    }
}

/// Writes layered terrain into a [`World`] from a 2D noise function.
pub struct TerrainGenerator<F> {
    noise: F,
    config: TerrainConfig,
}

impl TerrainGenerator<Perlin> {
    /// Creates a generator backed by Perlin noise seeded from the configuration.
    pub fn perlin(config: TerrainConfig) -> Self {
        TerrainGenerator::new(Perlin::new(config.seed), config)
    }
}

impl<F: NoiseFn<f64, 2>> TerrainGenerator<F> {
    /// Creates a generator over an arbitrary 2D noise source.
    pub fn new(noise: F, config: TerrainConfig) -> Self {
        TerrainGenerator { noise, config }
    }

    /// The parameters this generator was built with.
    pub fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Computes the surface height of the column at `(x, z)` for chunks of size `N`.
    ///
    /// A column of height `h` holds blocks at `y = 0..h`.
    pub fn column_height<const N: usize>(&self, x: i32, z: i32) -> i32 {
        let scale = N as f64 * self.config.horizontal_scale_chunks;
        let sample = self.noise.get([x as f64 / scale, z as f64 / scale]);
        (self.config.base_height + sample * self.config.amplitude).floor() as i32
    }

    /// Picks the block for height `y` in a column whose surface height is `height`.
    ///
    /// Only meaningful for `0 <= y < height`.
    pub fn layer_for(y: i32, height: i32) -> BlockId {
        if y <= height - 4 {
            BlockType::STONE.id()
        } else if y == height - 1 {
            BlockType::GRASS.id()
        } else {
            BlockType::DIRT.id()
        }
    }

    /// Replaces the contents of `world` with generated terrain.
    ///
    /// The world is cleared first, so populating twice with the same noise yields
    /// identical block arrays. Columns taller than the world are cut off at its top.
    pub fn populate<const N: usize>(&self, world: &mut World<N>) {
        let start = Instant::now();
        let extent = world.extent();
        world.clear();

        let mut blocks_written = 0usize;
        for z in 0..extent.z {
            for x in 0..extent.x {
                let height = self.column_height::<N>(x, z);
                for y in 0..height.min(extent.y) {
                    world.set_block(x, y, z, Self::layer_for(y, height));
                    blocks_written += 1;
                }
            }
            debug!("Populated terrain row z={}", z);
        }

        info!(
            "Populated {} columns ({} blocks) in {:?}",
            extent.x * extent.z,
            blocks_written,
            start.elapsed()
        );
    }
}
