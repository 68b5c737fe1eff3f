//! # Task Management System
//!
//! This module provides the cooperative scheduling primitives of the engine. Nothing
//! runs on a background thread: an external driver calls `step()`/`tick()` and each
//! call performs a bounded amount of work.
//!
//! ## Architecture Overview
//!
//! - `StagedTask`: A unit of work advanced one step at a time
//! - `TaskProgress`: The result of a single step
//! - `DrawQueue`: Ordered, deduplicated FIFO of chunks waiting to be meshed
//!
//! ## Draw Queue
//!
//! The visibility scheduler may see the same unmeshed chunk on many consecutive
//! ticks before its turn to be meshed comes. The queue keeps a membership bit per
//! chunk so enqueueing stays idempotent and O(1) regardless of queue length.

pub mod task;

use std::collections::VecDeque;

use bitvec::prelude::*;
use log::trace;

use super::voxels::chunk::ChunkIndex;

/// FIFO of chunk indices awaiting mesh extraction, with set semantics.
#[derive(Debug)]
pub struct DrawQueue {
    /// Chunks per horizontal axis, used to map an index to its membership bit.
    world_size: usize,
    /// Pending chunks in arrival order.
    pending: VecDeque<ChunkIndex>,
    /// One bit per chunk, set while the chunk is in `pending`.
    members: BitVec,
}

impl DrawQueue {
    /// Creates an empty queue for a `world_size × world_size` world.
    pub fn new(world_size: usize) -> Self {
        DrawQueue {
            world_size,
            pending: VecDeque::new(),
            members: bitvec![0; world_size * world_size],
        }
    }

    /// Appends `index` unless it is already queued or outside the world.
    ///
    /// # Returns
    /// `true` if the index was added.
    pub fn enqueue(&mut self, index: ChunkIndex) -> bool {
        let Some(bit) = self.bit(index) else {
            return false;
        };
        if self.members[bit] {
            return false;
        }

        self.members.set(bit, true);
        self.pending.push_back(index);
        trace!("Queued chunk ({}, {}) for meshing", index.x, index.z);

        true
    }

    /// The oldest queued index, left in place.
    pub fn front(&self) -> Option<ChunkIndex> {
        self.pending.front().copied()
    }

    /// Removes and returns the oldest queued index.
    pub fn pop_front(&mut self) -> Option<ChunkIndex> {
        let index = self.pending.pop_front()?;
        if let Some(bit) = self.bit(index) {
            self.members.set(bit, false);
        }

        Some(index)
    }

    /// Whether `index` is waiting in the queue.
    pub fn contains(&self, index: ChunkIndex) -> bool {
        self.bit(index).is_some_and(|bit| self.members[bit])
    }

    /// Number of queued chunks.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn bit(&self, index: ChunkIndex) -> Option<usize> {
        (index.x < self.world_size && index.z < self.world_size)
            .then(|| index.x * self.world_size + index.z)
    }
}
