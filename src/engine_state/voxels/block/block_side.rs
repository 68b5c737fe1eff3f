//! # Block Side Module
//!
//! This module defines the six faces of a voxel and the geometry each one
//! contributes to a mesh: the outward normal, the neighbouring cell it faces,
//! and the vertex winding needed for that normal to point outwards.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel.
///
/// The discriminants follow the order in which exposed faces are emitted into a
/// mesh bucket: top, bottom, front, back, right, left.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The top face (facing positive Y)
    TOP = 0,

    /// The bottom face (facing negative Y)
    BOTTOM = 1,

    /// The front face (facing positive Z)
    FRONT = 2,

    /// The back face (facing negative Z)
    BACK = 3,

    /// The right face (facing positive X)
    RIGHT = 4,

    /// The left face (facing negative X)
    LEFT = 5,
}

impl BlockSide {
    /// Returns all six faces in emission order.
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::TOP,
            BlockSide::BOTTOM,
            BlockSide::FRONT,
            BlockSide::BACK,
            BlockSide::RIGHT,
            BlockSide::LEFT,
        ]
    }

    /// The integer step from a voxel to the neighbour this face looks at.
    pub fn offset(self) -> Vector3<i32> {
        match self {
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::FRONT => Vector3::new(0, 0, 1),
            BlockSide::BACK => Vector3::new(0, 0, -1),
            BlockSide::RIGHT => Vector3::new(1, 0, 0),
            BlockSide::LEFT => Vector3::new(-1, 0, 0),
        }
    }

    /// The unit outward normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        let offset = self.offset();
        Vector3::new(offset.x as f32, offset.y as f32, offset.z as f32)
    }

    /// Whether the quad for this face uses the flipped `A, C, D, B` vertex order.
    ///
    /// The corner construction in [`Self::quad_corners`] produces an inward facing
    /// winding for the three negative directions; flipping restores the outward normal.
    pub fn is_flipped(self) -> bool {
        matches!(self, BlockSide::BOTTOM | BlockSide::BACK | BlockSide::LEFT)
    }

    /// Corner offsets of the quad on this face, relative to the voxel centre, in
    /// vertex emission order and scaled by `tile_size`.
    ///
    /// The two in-plane axes are cyclic permutations of the normal,
    /// `(n.z, n.x, n.y)` and `(n.y, n.z, n.x)`, so every corner sits half a tile
    /// along the normal and half a tile along each in-plane axis.
    pub fn quad_corners(self, tile_size: f32) -> [Vector3<f32>; 4] {
        let direction = self.normal();
        let offset1 = Vector3::new(direction.z, direction.x, direction.y);
        let offset2 = Vector3::new(direction.y, direction.z, direction.x);

        let corner_a = (direction + offset1 + offset2) / 2.0 * tile_size;
        let corner_b = (direction - offset1 + offset2) / 2.0 * tile_size;
        let corner_c = (direction + offset1 - offset2) / 2.0 * tile_size;
        let corner_d = (direction - offset1 - offset2) / 2.0 * tile_size;

        if self.is_flipped() {
            [corner_a, corner_c, corner_d, corner_b]
        } else {
            [corner_a, corner_b, corner_d, corner_c]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::InnerSpace;

    #[test]
    fn corners_lie_on_the_face_plane() {
        for side in BlockSide::all() {
            for corner in side.quad_corners(2.0) {
                assert_relative_eq!(corner.dot(side.normal()), 1.0);
            }
        }
    }

    #[test]
    fn winding_points_along_the_normal() {
        for side in BlockSide::all() {
            let [v0, v1, _, v3] = side.quad_corners(1.0);
            let winding_normal = (v1 - v0).cross(v3 - v0);
            assert!(winding_normal.dot(side.normal()) > 0.0, "inward winding on {side:?}");
        }
    }

    #[test]
    fn top_quad_matches_hand_computed_corners() {
        let corners = BlockSide::TOP.quad_corners(1.0);
        assert_eq!(corners[0], Vector3::new(0.5, 0.5, 0.5));
        assert_eq!(corners[1], Vector3::new(0.5, 0.5, -0.5));
        assert_eq!(corners[2], Vector3::new(-0.5, 0.5, -0.5));
        assert_eq!(corners[3], Vector3::new(-0.5, 0.5, 0.5));
    }
}
