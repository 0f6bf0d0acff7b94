//! # Block Side Module
//!
//! This module defines the six faces of a voxel block and the neighbor each face looks at
//! when deciding whether it is visible.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// The discriminant doubles as the slot of the face in a [`BlockCatalog`] entry,
/// so the order is: [TOP, BOTTOM, FRONT, BACK, LEFT, RIGHT]
///
/// [`BlockCatalog`]: super::BlockCatalog
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The front face (facing negative Z)
    FRONT = 2,

    /// The back face (facing positive Z)
    BACK = 3,

    /// The left face (facing negative X)
    LEFT = 4,

    /// The right face (facing positive X)
    RIGHT = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in catalog slot order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::LEFT,
            BlockSide::RIGHT,
        ]
    }

    /// The slot of this face in a catalog texture array.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The outward unit normal of this face.
    ///
    /// Adding it to a voxel's global coordinate yields the neighbor that decides
    /// whether the face is visible.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::FRONT => Vector3::new(0, 0, -1),
            BlockSide::BACK => Vector3::new(0, 0, 1),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
        }
    }
}
