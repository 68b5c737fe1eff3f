//! # Chunk Creation Module
//!
//! A builder that fills a chunk one voxel at a time in storage order: `x`
//! outermost, then `y`, then `z`. The generator walks voxels in exactly this
//! order, so it pushes identifiers without computing offsets itself.

use cgmath::Point3;

use crate::engine_state::voxels::block::VoxelId;

use super::{Chunk, ChunkIndex};

/// A builder for creating and populating chunks in storage order.
pub struct ChunkCreationIterator {
    /// The chunk being filled.
    chunk: Chunk,
    /// Number of voxels pushed so far.
    cursor: usize,
}

impl ChunkCreationIterator {
    /// Creates a builder for a chunk at `index`, starting from all-empty voxels.
    pub fn new(index: ChunkIndex, width: usize, height: usize) -> Self {
        ChunkCreationIterator {
            chunk: Chunk::empty(index, width, height),
            cursor: 0,
        }
    }

    /// Chunk-relative position the next pushed voxel will land on, or `None` once full.
    pub fn next_position(&self) -> Option<Point3<usize>> {
        (!self.is_full()).then(|| self.chunk.position_of(self.cursor))
    }

    /// Whether every voxel of the chunk has been pushed.
    pub fn is_full(&self) -> bool {
        self.cursor >= self.chunk.voxels.len()
    }

    /// Stores `id` at the current position and advances.
    ///
    /// Pushing into a full builder is ignored.
    pub fn push_voxel(&mut self, id: VoxelId) {
        if let Some(slot) = self.chunk.voxels.get_mut(self.cursor) {
            *slot = id;
            self.cursor += 1;
        }
    }

    /// Finalizes creation; voxels never pushed stay empty.
    pub fn return_chunk(self) -> Chunk {
        debug_assert!(self.is_full(), "chunk returned before every voxel was pushed");
        self.chunk
    }
}
