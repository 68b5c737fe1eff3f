//! # Chunk Iteration Module
//!
//! An iterator over the occupied voxels of a chunk, yielding each voxel's
//! chunk-relative position with its identifier and skipping empty space.

use cgmath::Point3;

use crate::engine_state::voxels::block::{VoxelId, EMPTY_VOXEL};

use super::Chunk;

/// An iterator over all non-empty voxels in a chunk, in storage order.
pub struct ChunkVoxelIterator<'a> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk,
    /// Next storage offset to inspect
    current_offset: usize,
}

impl<'a> ChunkVoxelIterator<'a> {
    /// Creates an iterator positioned before the first voxel of `chunk_ref`.
    pub fn new(chunk_ref: &'a Chunk) -> Self {
        ChunkVoxelIterator {
            chunk_ref,
            current_offset: 0,
        }
    }
}

impl Iterator for ChunkVoxelIterator<'_> {
    type Item = (Point3<usize>, VoxelId);

    fn next(&mut self) -> Option<Self::Item> {
        let voxels = self.chunk_ref.voxels();
        while self.current_offset < voxels.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let id = voxels[offset];
            if id != EMPTY_VOXEL {
                return Some((self.chunk_ref.position_of(offset), id));
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::chunk::ChunkIndex;

    #[test]
    fn skips_empty_voxels() {
        let mut chunk = Chunk::empty(ChunkIndex::new(0, 0), 3, 3);
        chunk.set(0, 2, 1, 2);
        chunk.set(2, 0, 0, 7);

        let occupied: Vec<_> = chunk.occupied_voxels().collect();
        assert_eq!(
            occupied,
            vec![(Point3::new(0, 2, 1), 2), (Point3::new(2, 0, 0), 7)]
        );
    }

    #[test]
    fn empty_chunk_yields_nothing() {
        let chunk = Chunk::empty(ChunkIndex::new(1, 1), 2, 2);
        assert_eq!(chunk.occupied_voxels().count(), 0);
    }
}
