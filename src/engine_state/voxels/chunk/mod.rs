//! # Chunk Module
//!
//! This module provides the `Chunk` struct: a dense `width × height × width` grid
//! of voxel identifiers covering one cell of the world's horizontal chunk grid,
//! together with the builder that fills it, an iterator over its occupied voxels,
//! and the noise-driven generator.
//!
//! ## Storage
//!
//! Voxels are stored in a flat vector indexed `x` outermost, then `y`, then `z`,
//! matching the generator's fill order. The dense layout gives O(1) neighbour
//! lookups, which face culling performs six times per occupied voxel.

use cgmath::Point3;

use super::block::{VoxelId, EMPTY_VOXEL};

mod chunk_creation;
pub mod chunk_generation;
pub mod chunk_iteration;

pub use chunk_creation::ChunkCreationIterator;
pub use chunk_iteration::ChunkVoxelIterator;

/// Position of a chunk in the world's horizontal chunk grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkIndex {
    /// Chunk column along the world x axis.
    pub x: usize,
    /// Chunk row along the world z axis.
    pub z: usize,
}

impl ChunkIndex {
    /// Creates a new chunk index.
    pub fn new(x: usize, z: usize) -> Self {
        ChunkIndex { x, z }
    }
}

/// A fixed-size block of voxels, the unit of generation, meshing and scheduling.
///
/// A chunk is filled exactly once by the generator and only read afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// The position of this chunk in the chunk grid.
    pub index: ChunkIndex,
    /// Voxels along the x and z axes.
    width: usize,
    /// Voxels along the y axis.
    height: usize,
    /// Voxel identifiers, `x` outermost then `y` then `z`.
    voxels: Vec<VoxelId>,
}

impl Chunk {
    /// Creates a chunk where every voxel is empty.
    pub fn empty(index: ChunkIndex, width: usize, height: usize) -> Self {
        Chunk {
            index,
            width,
            height,
            voxels: vec![EMPTY_VOXEL; width * height * width],
        }
    }

    /// Creates a chunk where every voxel holds `id`.
    pub fn filled(index: ChunkIndex, width: usize, height: usize, id: VoxelId) -> Self {
        Chunk {
            index,
            width,
            height,
            voxels: vec![id; width * height * width],
        }
    }

    /// Voxels along the x and z axes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Voxels along the y axis.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw voxel identifiers in storage order.
    pub fn voxels(&self) -> &[VoxelId] {
        &self.voxels
    }

    /// Gets the voxel identifier at chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> VoxelId {
        self.voxels[self.offset(x, y, z)]
    }

    /// Sets the voxel identifier at chunk-relative coordinates.
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, x: usize, y: usize, z: usize, id: VoxelId) {
        let offset = self.offset(x, y, z);
        self.voxels[offset] = id;
    }

    /// Checks whether the voxel at chunk-relative coordinates is empty.
    pub fn is_empty_at(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z) == EMPTY_VOXEL
    }

    /// Counts the voxels that are not empty.
    pub fn occupied_count(&self) -> usize {
        self.voxels.iter().filter(|id| **id != EMPTY_VOXEL).count()
    }

    /// Iterates over occupied voxels and their positions.
    pub fn occupied_voxels(&self) -> ChunkVoxelIterator<'_> {
        ChunkVoxelIterator::new(self)
    }

    /// Converts a storage offset back into chunk-relative coordinates.
    pub fn position_of(&self, offset: usize) -> Point3<usize> {
        let plane = self.height * self.width;
        Point3::new(
            offset / plane,
            (offset % plane) / self.width,
            offset % self.width,
        )
    }

    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && z < self.width);
        (x * self.height + y) * self.width + z
    }
}
