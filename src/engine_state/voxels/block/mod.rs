//! # Block Module
//!
//! Voxel identifiers, the six face directions of a voxel and the material catalog
//! that voxel identifiers resolve against.
//!
//! A voxel stores a single [`VoxelId`]. `0` is empty space; any other value `n`
//! refers to material entry `n - 1` of the [`material::MaterialCatalog`].

pub mod block_side;
pub mod material;

/// The integer type stored per voxel.
pub type VoxelId = u8;

/// The voxel identifier of empty space.
pub const EMPTY_VOXEL: VoxelId = 0;

/// Decodes a voxel identifier into its material index.
///
/// # Returns
/// `None` for empty voxels, otherwise `Some(id - 1)`.
pub fn material_index(id: VoxelId) -> Option<usize> {
    if id == EMPTY_VOXEL {
        None
    } else {
        Some(id as usize - 1)
    }
}
