/// Integration tests for world addressing and terrain population
use noise::{Constant, NoiseFn};
use voxel_world::*;

type SmallWorld = World<4>;

fn new_world(x: usize, y: usize, z: usize) -> SmallWorld {
    World::new(WorldDimensions::new(x, y, z)).expect("valid dimensions")
}

/// A height field that is a fixed function of the sample point, for exact fixtures.
struct Ramp;

impl NoiseFn<f64, 2> for Ramp {
    fn get(&self, point: [f64; 2]) -> f64 {
        // Inputs are x / 12 and z / 12 for 4-block chunks at the default scale.
        // Recover the integer column and lift by half a block so flooring is exact.
        ((point[0] * 12.0).round() + (point[1] * 12.0).round() + 0.5) / 20.0
    }
}

#[test]
fn test_addressing_round_trip() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    let mut world = new_world(3, 2, 2);
    let extent = world.extent();

    for _ in 0..2_000 {
        let x = rng.i32(0..extent.x);
        let y = rng.i32(0..extent.y);
        let z = rng.i32(0..extent.z);
        let id = rng.u16(1..=3);
        world.set_block(x, y, z, id);
        assert_eq!(world.get_block(x, y, z), id, "({x}, {y}, {z})");
    }
}

#[test]
fn test_every_in_bounds_voxel_is_addressable() {
    let mut world = new_world(2, 2, 2);
    let extent = world.extent();
    let mut next = 1u16;
    for y in 0..extent.y {
        for z in 0..extent.z {
            for x in 0..extent.x {
                world.set_block(x, y, z, next);
                next = next % 500 + 1;
            }
        }
    }

    let mut expected = 1u16;
    for y in 0..extent.y {
        for z in 0..extent.z {
            for x in 0..extent.x {
                assert_eq!(world.get_block(x, y, z), expected);
                expected = expected % 500 + 1;
            }
        }
    }
}

#[test]
fn test_out_of_bounds_is_air_and_write_is_noop() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut world = new_world(2, 1, 2);
    for x in 0..8 {
        for z in 0..8 {
            world.set_block(x, 0, z, BlockType::STONE.id());
        }
    }
    let before: Vec<Vec<BlockId>> = world.chunks().iter().map(|c| c.blocks().to_vec()).collect();

    let extent = world.extent();
    let outside = [
        (-1, 0, 0),
        (0, -1, 0),
        (0, 0, -1),
        (extent.x, 0, 0),
        (0, extent.y, 0),
        (0, 0, extent.z),
        (i32::MIN, i32::MIN, i32::MIN),
        (i32::MAX, i32::MAX, i32::MAX),
        (-4, 0, 3),
    ];
    for (x, y, z) in outside {
        assert_eq!(world.get_block(x, y, z), AIR);
        world.set_block(x, y, z, BlockType::GRASS.id());
    }
    for _ in 0..500 {
        let x = rng.i32(-100..100);
        let y = rng.i32(-100..-1);
        let z = rng.i32(-100..100);
        assert_eq!(world.get_block(x, y, z), AIR);
        world.set_block(x, y, z, BlockType::GRASS.id());
    }

    let after: Vec<Vec<BlockId>> = world.chunks().iter().map(|c| c.blocks().to_vec()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_terrain_layers_match_column_height() {
    let mut world = new_world(2, 4, 1);
    let generator = TerrainGenerator::new(
        Ramp,
        TerrainConfig {
            base_height: 4.0,
            ..TerrainConfig::default()
        },
    );
    generator.populate(&mut world);

    let extent = world.extent();
    for x in 0..extent.x {
        for z in 0..extent.z {
            let h = generator.column_height::<4>(x, z);
            assert_eq!(h, 4 + x + z, "height at ({x}, {z})");
            for y in 0..extent.y {
                let expected = if y >= h {
                    AIR
                } else if y <= h - 4 {
                    BlockType::STONE.id()
                } else if y == h - 1 {
                    BlockType::GRASS.id()
                } else {
                    BlockType::DIRT.id()
                };
                assert_eq!(world.get_block(x, y, z), expected, "({x}, {y}, {z}) h={h}");
            }
        }
    }
}

#[test]
fn test_column_of_height_ten() {
    let mut world = new_world(1, 4, 1);
    let generator = TerrainGenerator::new(
        Constant::new(0.0),
        TerrainConfig {
            base_height: 10.0,
            ..TerrainConfig::default()
        },
    );
    generator.populate(&mut world);

    let column: Vec<BlockId> = (0..12).map(|y| world.get_block(2, y, 1)).collect();
    assert_eq!(column, vec![3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 0, 0]);
}

#[test]
fn test_population_is_deterministic() {
    let config = TerrainConfig {
        seed: 1234,
        base_height: 6.0,
        amplitude: 4.0,
        ..TerrainConfig::default()
    };

    let mut first = new_world(3, 3, 3);
    let mut second = new_world(3, 3, 3);
    TerrainGenerator::perlin(config).populate(&mut first);
    TerrainGenerator::perlin(config).populate(&mut second);

    for (a, b) in first.chunks().iter().zip(second.chunks()) {
        assert_eq!(a.blocks(), b.blocks());
    }

    // Repopulating an already populated world yields the same blocks again.
    TerrainGenerator::perlin(config).populate(&mut second);
    for (a, b) in first.chunks().iter().zip(second.chunks()) {
        assert_eq!(a.blocks(), b.blocks());
    }
}

#[test]
fn test_full_pipeline_with_engine_state() {
    let config = EngineConfig::from_json_str(
        r#"{
            "world": { "chunks_x": 2, "chunks_height": 3, "chunks_z": 2 },
            "terrain": { "seed": 9, "base_height": 40.0, "amplitude": 20.0 },
            "mesh_workers": 3
        }"#,
    )
    .unwrap();

    let mut engine: EngineState = EngineState::new(config).unwrap();
    engine.populate();
    engine.build_meshes().unwrap();

    let mut backend = HeadlessBackend::default();
    let uploaded = engine.upload_meshes(&mut backend);
    assert!(uploaded > 0);
    assert_eq!(backend.chunks_uploaded, uploaded);
    assert_eq!(backend.bytes_uploaded, backend.vertices_uploaded * Vertex::STRIDE as u64);
    assert_eq!(backend.vertices_uploaded % 6, 0);

    // Digging out the surface block of a column reveals new faces below it.
    let h = (0..engine.world().extent().y)
        .rev()
        .find(|&y| engine.get_block(10, y, 10) != AIR)
        .unwrap();
    assert_eq!(engine.get_block(10, h, 10), BlockType::GRASS.id());
    engine.set_block(10, h, 10, AIR);
    assert!(engine.dirty_chunks().count() >= 1);
    let dirty = engine.dirty_chunks().count();
    let remeshed = engine.rebuild_dirty_meshes().unwrap();
    assert_eq!(remeshed, dirty);
    assert_eq!(engine.dirty_chunks().count(), 0);
    assert_eq!(engine.get_block(10, h, 10), AIR);
}
