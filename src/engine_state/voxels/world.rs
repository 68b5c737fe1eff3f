//! # World Module
//!
//! This module provides the `World` struct, the chunk store: a dense
//! `world_size × world_size` grid of chunk slots that the generation task fills one
//! chunk at a time. Once every slot is filled the world flags generation as
//! complete and readers (the mesh extractor and the visibility scheduler) may use it.
//!
//! ## Neighbour Access
//!
//! Face culling at a chunk's horizontal edge needs the boundary voxels of the
//! adjacent chunk. [`World::neighbors`] hands those out as borrowed references,
//! using `None` only for sides that face the edge of the world.

use crate::engine_state::{
    config::WorldConfig,
    error::{EngineError, Result},
};

use super::chunk::{Chunk, ChunkIndex};

/// Read-only references to the up-to-four horizontal neighbours of a chunk.
///
/// A `None` side means the chunk lies on the world edge in that direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkNeighbors<'a> {
    /// The chunk at `x + 1`.
    pub pos_x: Option<&'a Chunk>,
    /// The chunk at `x - 1`.
    pub neg_x: Option<&'a Chunk>,
    /// The chunk at `z + 1`.
    pub pos_z: Option<&'a Chunk>,
    /// The chunk at `z - 1`.
    pub neg_z: Option<&'a Chunk>,
}

impl<'a> ChunkNeighbors<'a> {
    /// Neighbours of a chunk standing alone in the world.
    pub fn none() -> Self {
        Self::default()
    }
}

/// The chunk store: every chunk of the world, addressed by [`ChunkIndex`].
pub struct World {
    /// Chunks per horizontal axis.
    world_size: usize,
    /// Chunk slots stored `x` outermost, `None` until generated.
    chunks: Vec<Option<Chunk>>,
    /// Number of filled slots.
    generated: usize,
}

impl World {
    /// Creates a world with every chunk slot still ungenerated.
    ///
    /// # Errors
    /// Rejects an invalid configuration before anything is generated.
    pub fn new(config: &WorldConfig) -> Result<Self> {
        config.validate()?;

        let mut chunks = Vec::with_capacity(config.chunk_count());
        chunks.resize_with(config.chunk_count(), || None);

        Ok(World {
            world_size: config.world_size,
            chunks,
            generated: 0,
        })
    }

    /// Chunks per horizontal axis.
    pub fn world_size(&self) -> usize {
        self.world_size
    }

    /// Total number of chunk slots.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of chunks generated so far.
    pub fn generated_count(&self) -> usize {
        self.generated
    }

    /// Whether every chunk slot has been filled.
    pub fn is_generation_complete(&self) -> bool {
        self.generated == self.chunks.len()
    }

    /// Whether `(x, z)` lies inside the chunk grid.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= 0 && z >= 0 && (x as usize) < self.world_size && (z as usize) < self.world_size
    }

    /// Converts a signed chunk coordinate into an index, if it is inside the grid.
    pub fn checked_index(&self, x: i32, z: i32) -> Option<ChunkIndex> {
        self.contains(x, z)
            .then(|| ChunkIndex::new(x as usize, z as usize))
    }

    /// Stores a generated chunk in its slot.
    ///
    /// Each slot is filled once; storing into a filled slot replaces the chunk
    /// without counting it twice.
    pub fn insert_chunk(&mut self, chunk: Chunk) -> Result<()> {
        let slot = self.slot(chunk.index)?;
        if self.chunks[slot].is_none() {
            self.generated += 1;
        }
        self.chunks[slot] = Some(chunk);

        Ok(())
    }

    /// Retrieves the chunk at `index`, if it has been generated.
    pub fn get_chunk_at(&self, index: ChunkIndex) -> Option<&Chunk> {
        self.slot(index)
            .ok()
            .and_then(|slot| self.chunks[slot].as_ref())
    }

    /// Retrieves a generated chunk or explains why it is unavailable.
    pub fn require_chunk(&self, index: ChunkIndex) -> Result<&Chunk> {
        let slot = self.slot(index)?;
        self.chunks[slot]
            .as_ref()
            .ok_or(EngineError::ChunkNotGenerated {
                x: index.x,
                z: index.z,
            })
    }

    /// Borrows the horizontal neighbours of the chunk at `index`.
    ///
    /// World-edge sides are `None` without any lookup; every other side must already
    /// be generated.
    ///
    /// # Errors
    /// [`EngineError::ChunkNotGenerated`] when an in-world neighbour is still missing.
    pub fn neighbors(&self, index: ChunkIndex) -> Result<ChunkNeighbors<'_>> {
        let last = self.world_size - 1;

        let pos_x = if index.x == last {
            None
        } else {
            Some(self.require_chunk(ChunkIndex::new(index.x + 1, index.z))?)
        };
        let neg_x = if index.x == 0 {
            None
        } else {
            Some(self.require_chunk(ChunkIndex::new(index.x - 1, index.z))?)
        };
        let pos_z = if index.z == last {
            None
        } else {
            Some(self.require_chunk(ChunkIndex::new(index.x, index.z + 1))?)
        };
        let neg_z = if index.z == 0 {
            None
        } else {
            Some(self.require_chunk(ChunkIndex::new(index.x, index.z - 1))?)
        };

        Ok(ChunkNeighbors {
            pos_x,
            neg_x,
            pos_z,
            neg_z,
        })
    }

    fn slot(&self, index: ChunkIndex) -> Result<usize> {
        if index.x >= self.world_size || index.z >= self.world_size {
            return Err(EngineError::ChunkOutOfBounds {
                x: index.x as i32,
                z: index.z as i32,
                world_size: self.world_size,
            });
        }

        Ok(index.x * self.world_size + index.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(world_size: usize) -> WorldConfig {
        WorldConfig {
            chunk_width: 2,
            chunk_height: 2,
            world_size,
            ..Default::default()
        }
    }

    fn fill(world: &mut World) {
        for x in 0..world.world_size() {
            for z in 0..world.world_size() {
                world
                    .insert_chunk(Chunk::empty(ChunkIndex::new(x, z), 2, 2))
                    .unwrap();
            }
        }
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        assert!(World::new(&config(0)).is_err());
    }

    #[test]
    fn completion_requires_every_slot() {
        let mut world = World::new(&config(2)).unwrap();
        assert!(!world.is_generation_complete());

        world
            .insert_chunk(Chunk::empty(ChunkIndex::new(0, 0), 2, 2))
            .unwrap();
        world
            .insert_chunk(Chunk::empty(ChunkIndex::new(0, 0), 2, 2))
            .unwrap();
        assert_eq!(world.generated_count(), 1);

        fill(&mut world);
        assert!(world.is_generation_complete());
    }

    #[test]
    fn out_of_bounds_chunks_are_rejected() {
        let mut world = World::new(&config(2)).unwrap();
        let result = world.insert_chunk(Chunk::empty(ChunkIndex::new(2, 0), 2, 2));
        assert!(matches!(result, Err(EngineError::ChunkOutOfBounds { .. })));
        assert!(world.get_chunk_at(ChunkIndex::new(0, 5)).is_none());
    }

    #[test]
    fn corner_chunk_has_two_world_edges() {
        let mut world = World::new(&config(3)).unwrap();
        fill(&mut world);

        let neighbors = world.neighbors(ChunkIndex::new(0, 0)).unwrap();
        assert!(neighbors.neg_x.is_none());
        assert!(neighbors.neg_z.is_none());
        assert_eq!(neighbors.pos_x.unwrap().index, ChunkIndex::new(1, 0));
        assert_eq!(neighbors.pos_z.unwrap().index, ChunkIndex::new(0, 1));

        let center = world.neighbors(ChunkIndex::new(1, 1)).unwrap();
        assert!(center.pos_x.is_some() && center.neg_x.is_some());
        assert!(center.pos_z.is_some() && center.neg_z.is_some());
    }

    #[test]
    fn missing_inner_neighbor_is_an_error() {
        let mut world = World::new(&config(2)).unwrap();
        world
            .insert_chunk(Chunk::empty(ChunkIndex::new(0, 0), 2, 2))
            .unwrap();

        assert!(matches!(
            world.neighbors(ChunkIndex::new(0, 0)),
            Err(EngineError::ChunkNotGenerated { x: 1, z: 0 })
        ));
    }

    #[test]
    fn signed_coordinates_are_bounds_checked() {
        let world = World::new(&config(2)).unwrap();
        assert_eq!(world.checked_index(1, 1), Some(ChunkIndex::new(1, 1)));
        assert_eq!(world.checked_index(-1, 0), None);
        assert_eq!(world.checked_index(0, 2), None);
    }
}
