/// Integration tests for face-culled meshing
/// These tests build small worlds (4-block chunks) and check the emitted geometry
use cgmath::Point3;
use voxel_world::*;

type SmallWorld = World<4>;

fn new_world(x: usize, y: usize, z: usize) -> SmallWorld {
    World::new(WorldDimensions::new(x, y, z)).expect("valid dimensions")
}

/// Groups a mesh into faces and returns each face's outward axis direction.
fn face_normals(mesh: &ChunkMesh) -> Vec<[i32; 3]> {
    mesh.vertices
        .chunks(Face::VERTEX_COUNT)
        .map(|face| {
            let a = face[0].position;
            let b = face[1].position;
            let c = face[2].position;
            let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            [
                (e1[1] * e2[2] - e1[2] * e2[1]) as i32,
                (e1[2] * e2[0] - e1[0] * e2[2]) as i32,
                (e1[0] * e2[1] - e1[1] * e2[0]) as i32,
            ]
        })
        .collect()
}

#[test]
fn test_single_voxel_end_to_end() {
    let catalog = BlockCatalog::default();
    let mut world = new_world(1, 1, 1);
    world.set_block(0, 0, 0, BlockType::GRASS.id());

    let mesh = MeshBuilder::new(&catalog)
        .build(&world.chunks()[0], &world)
        .expect("grass is in the catalog");

    assert_eq!(mesh.vertex_count(), 36, "6 faces x 6 vertices");
    for vertex in &mesh.vertices {
        assert!(
            vertex.uv.iter().all(|c| *c == 0.0 || *c == 1.0),
            "UV {:?} outside {{0,1}}^2",
            vertex.uv
        );
        assert!(vertex.position.iter().all(|c| *c == 0.0 || *c == 1.0));
    }

    let textures = catalog
        .texture_indices(BlockType::GRASS.id(), Point3::new(0, 0, 0))
        .unwrap();
    for (face, side) in mesh.vertices.chunks(Face::VERTEX_COUNT).zip(BlockSide::all()) {
        for vertex in face {
            assert_eq!(vertex.texture_index, textures[side.slot()] as f32, "{side:?}");
        }
    }
}

#[test]
fn test_fully_enclosed_voxel_has_no_faces() {
    let catalog = BlockCatalog::default();
    let mut world = new_world(1, 1, 1);
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                world.set_block(x, y, z, BlockType::STONE.id());
            }
        }
    }

    // Only the center voxel is meshed; the rest is context held by the world.
    let mut center = Chunk::<4>::new(Point3::new(0, 0, 0));
    center.set_block(1, 1, 1, BlockType::STONE.id());
    let mesh = MeshBuilder::new(&catalog).build(&center, &world).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
}

#[test]
fn test_empty_chunk_produces_empty_mesh() {
    let catalog = BlockCatalog::default();
    let world = new_world(2, 1, 1);
    let meshes = MeshBuilder::new(&catalog).build_world(&world, 2).unwrap();
    assert_eq!(meshes.len(), 2);
    assert!(meshes.iter().all(ChunkMesh::is_empty));
}

#[test]
fn test_cross_chunk_face_is_culled() {
    let catalog = BlockCatalog::default();
    let builder = MeshBuilder::new(&catalog);
    let mut world = new_world(2, 1, 1);

    // (3, 1, 1) is the last column of chunk 0, (4, 1, 1) the first of chunk 1.
    world.set_block(3, 1, 1, BlockType::DIRT.id());
    world.set_block(4, 1, 1, BlockType::DIRT.id());

    let left = builder.build(&world.chunks()[0], &world).unwrap();
    let right = builder.build(&world.chunks()[1], &world).unwrap();
    assert_eq!(left.vertex_count(), 30);
    assert_eq!(right.vertex_count(), 30);
    assert!(!face_normals(&left).contains(&[1, 0, 0]));
    assert!(!face_normals(&right).contains(&[-1, 0, 0]));

    // A chunk meshed against a world that lacks its neighbor keeps the face.
    let mut lonely = new_world(1, 1, 1);
    lonely.set_block(3, 1, 1, BlockType::DIRT.id());
    let isolated = builder.build(&world.chunks()[0], &lonely).unwrap();
    assert_eq!(isolated.vertex_count(), 36);

    // Removing the neighbor brings the touching face back.
    world.set_block(4, 1, 1, AIR);
    let left = builder.build(&world.chunks()[0], &world).unwrap();
    assert_eq!(left.vertex_count(), 36);
    assert_eq!(
        face_normals(&left).iter().filter(|n| **n == [1, 0, 0]).count(),
        1
    );
}

#[test]
fn test_vertical_cross_chunk_culling() {
    let catalog = BlockCatalog::default();
    let builder = MeshBuilder::new(&catalog);
    let mut world = new_world(1, 2, 1);
    world.set_block(2, 3, 2, BlockType::STONE.id());
    world.set_block(2, 4, 2, BlockType::GRASS.id());

    let lower = builder.build(world.get_chunk(0, 0, 0).unwrap(), &world).unwrap();
    let upper = builder.build(world.get_chunk(0, 1, 0).unwrap(), &world).unwrap();
    assert!(!face_normals(&lower).contains(&[0, 1, 0]));
    assert!(!face_normals(&upper).contains(&[0, -1, 0]));
    assert_eq!(lower.face_count() + upper.face_count(), 10);
}

#[test]
fn test_world_edge_faces_are_visible() {
    let catalog = BlockCatalog::default();
    let mut world = new_world(1, 1, 1);
    for x in 0..4 {
        for y in 0..4 {
            for z in 0..4 {
                world.set_block(x, y, z, BlockType::STONE.id());
            }
        }
    }
    let mesh = MeshBuilder::new(&catalog)
        .build(&world.chunks()[0], &world)
        .unwrap();
    // Only the outer shell: 6 sides x 16 faces.
    assert_eq!(mesh.face_count(), 96);
}

#[test]
fn test_vertex_positions_are_global() {
    let catalog = BlockCatalog::default();
    let mut world = new_world(2, 2, 2);
    world.set_block(6, 5, 7, BlockType::DIRT.id());

    let chunk = world.get_chunk(1, 1, 1).unwrap();
    let mesh = MeshBuilder::new(&catalog).build(chunk, &world).unwrap();
    assert_eq!(mesh.position, Point3::new(1, 1, 1));
    for vertex in &mesh.vertices {
        assert!((6.0..=7.0).contains(&vertex.position[0]));
        assert!((5.0..=6.0).contains(&vertex.position[1]));
        assert!((7.0..=8.0).contains(&vertex.position[2]));
    }
}
