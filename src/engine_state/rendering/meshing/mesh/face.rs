use cgmath::{Point3, Vector3};

use crate::engine_state::rendering::Vertex;
use crate::engine_state::voxels::block::block_side::BlockSide;

/// Geometric template of one unit quad on the surface of a voxel.
///
/// The quad spans `anchor`, `anchor + right`, `anchor + down` and
/// `anchor + right + down`. The anchor is relative to the voxel's minimum corner.
/// `down × right` is the outward normal, so both emitted triangles wind
/// counter-clockwise when viewed from outside the voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Corner of the quad relative to the voxel's minimum corner
    pub anchor: Vector3<i32>,
    /// Edge along which U grows
    pub right: Vector3<i32>,
    /// Edge along which V grows
    pub down: Vector3<i32>,
}

impl Face {
    /// Number of vertices emitted per face (two triangles, no index buffer).
    pub const VERTEX_COUNT: usize = 6;

    /// Returns the quad template for one side of a voxel.
    pub fn for_side(block_side: BlockSide) -> Self {
        match block_side {
            BlockSide::TOP => Face {
                anchor: Vector3::new(0, 1, 0),
                right: Vector3::new(1, 0, 0),
                down: Vector3::new(0, 0, 1),
            },

            BlockSide::BOTTOM => Face {
                anchor: Vector3::new(1, 0, 0),
                right: Vector3::new(-1, 0, 0),
                down: Vector3::new(0, 0, 1),
            },

            BlockSide::FRONT => Face {
                anchor: Vector3::new(1, 1, 0),
                right: Vector3::new(-1, 0, 0),
                down: Vector3::new(0, -1, 0),
            },

            BlockSide::BACK => Face {
                anchor: Vector3::new(0, 1, 1),
                right: Vector3::new(1, 0, 0),
                down: Vector3::new(0, -1, 0),
            },

            BlockSide::LEFT => Face {
                anchor: Vector3::new(0, 1, 0),
                right: Vector3::new(0, 0, 1),
                down: Vector3::new(0, -1, 0),
            },

            BlockSide::RIGHT => Face {
                anchor: Vector3::new(1, 1, 1),
                right: Vector3::new(0, 0, -1),
                down: Vector3::new(0, -1, 0),
            },
        }
    }

    /// Appends the two triangles of this face for the voxel at `voxel`.
    ///
    /// # Arguments
    /// * `voxel` - Global coordinate of the voxel's minimum corner
    /// * `texture_index` - Atlas index for this face
    /// * `out` - Vertex buffer receiving six vertices
    pub fn emit(&self, voxel: Point3<i32>, texture_index: u32, out: &mut Vec<Vertex>) {
        let a = voxel + self.anchor;
        let ar = a + self.right;
        let ad = a + self.down;
        let adr = ad + self.right;

        out.extend_from_slice(&[
            Vertex::new(a, 0, 0, texture_index),
            Vertex::new(adr, 1, 1, texture_index),
            Vertex::new(ar, 1, 0, texture_index),
            Vertex::new(a, 0, 0, texture_index),
            Vertex::new(ad, 0, 1, texture_index),
            Vertex::new(adr, 1, 1, texture_index),
        ]);
    }
}
