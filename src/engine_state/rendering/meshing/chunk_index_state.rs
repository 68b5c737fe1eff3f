//! Per-chunk meshing state.
//!
//! Every chunk moves through `Unmeshed → QueuedForMesh → Meshed` exactly once.
//! There is no transition back; re-meshing a chunk is an explicit operation
//! outside the scheduler's per-tick flow.

use crate::engine_state::voxels::chunk::ChunkIndex;

/// Where a chunk is in its meshing lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ChunkMeshState {
    /// Not yet seen by the scheduler as visible.
    #[default]
    Unmeshed,
    /// Waiting in the draw queue.
    QueuedForMesh,
    /// Mesh cached and drawable.
    Meshed,
}

/// Dense grid of [`ChunkMeshState`] for every chunk in the world.
#[derive(Debug, Clone)]
pub struct ChunkMeshStates {
    world_size: usize,
    states: Vec<ChunkMeshState>,
}

impl ChunkMeshStates {
    /// Creates a grid with every chunk `Unmeshed`.
    pub fn new(world_size: usize) -> Self {
        Self {
            world_size,
            states: vec![ChunkMeshState::Unmeshed; world_size * world_size],
        }
    }

    /// The state of the chunk at `index`, or `None` outside the world.
    pub fn get(&self, index: ChunkIndex) -> Option<ChunkMeshState> {
        self.slot(index).map(|slot| self.states[slot])
    }

    /// Moves `Unmeshed` to `QueuedForMesh`.
    ///
    /// # Returns
    /// `true` if the transition happened.
    pub fn mark_queued(&mut self, index: ChunkIndex) -> bool {
        self.transition(index, ChunkMeshState::Unmeshed, ChunkMeshState::QueuedForMesh)
    }

    /// Moves `QueuedForMesh` to `Meshed`.
    ///
    /// # Returns
    /// `true` if the transition happened.
    pub fn mark_meshed(&mut self, index: ChunkIndex) -> bool {
        self.transition(index, ChunkMeshState::QueuedForMesh, ChunkMeshState::Meshed)
    }

    /// Number of chunks in the `Meshed` state.
    pub fn meshed_count(&self) -> usize {
        self.states
            .iter()
            .filter(|state| **state == ChunkMeshState::Meshed)
            .count()
    }

    /// The slot of `index` in the flat grid, shared with the mesh cache.
    pub fn slot(&self, index: ChunkIndex) -> Option<usize> {
        (index.x < self.world_size && index.z < self.world_size)
            .then(|| index.x * self.world_size + index.z)
    }

    fn transition(&mut self, index: ChunkIndex, from: ChunkMeshState, to: ChunkMeshState) -> bool {
        match self.slot(index) {
            Some(slot) if self.states[slot] == from => {
                self.states[slot] = to;
                true
            }
            _ => false,
        }
    }
}
