//! # Chunk Generation Task
//!
//! This module defines the `ChunkGenerationTask`, which fills the world one chunk
//! per step. Chunks are visited in row-major order (`x` outer, `z` inner) and the
//! world is flagged complete only after the final chunk has been stored.

use log::{debug, info};

use crate::engine_state::{
    error::Result,
    task_management::task::{StagedTask, TaskProgress},
    voxels::{
        chunk::{chunk_generation::ChunkGenerator, ChunkIndex},
        world::World,
    },
};

/// A task that populates every chunk of a [`World`].
pub struct ChunkGenerationTask {
    /// Produces the voxels of each chunk.
    generator: ChunkGenerator,
    /// Chunks per horizontal axis.
    world_size: usize,
    /// Row-major position of the next chunk to generate.
    next: usize,
}

impl ChunkGenerationTask {
    /// Creates a new chunk generation task.
    ///
    /// # Arguments
    /// * `generator` - The generator that fills each chunk
    /// * `world_size` - The number of chunks along each horizontal axis
    ///
    /// # Returns
    /// A task positioned at chunk `(0, 0)`
    pub fn new(generator: ChunkGenerator, world_size: usize) -> Self {
        ChunkGenerationTask {
            generator,
            world_size,
            next: 0,
        }
    }

    /// Total number of chunks this task generates.
    pub fn total(&self) -> usize {
        self.world_size * self.world_size
    }

    /// Number of chunks generated so far.
    pub fn completed(&self) -> usize {
        self.next
    }
}

impl StagedTask for ChunkGenerationTask {
    type Context = World;

    /// Generates and stores the next chunk.
    ///
    /// Returns `Complete` on the step that stores the last chunk and on every step
    /// after it. A chunk the world refuses is not counted, so the same chunk is
    /// retried on the next step.
    fn step(&mut self, world: &mut World) -> Result<TaskProgress> {
        let total = self.total();
        if self.next >= total {
            return Ok(TaskProgress::Complete);
        }

        let index = ChunkIndex::new(self.next / self.world_size, self.next % self.world_size);
        world.insert_chunk(self.generator.generate(index))?;
        self.next += 1;

        debug!("Finished chunk {} out of {}", self.next, total);

        if self.next == total {
            info!("World generation complete: {} chunks", total);
            Ok(TaskProgress::Complete)
        } else {
            Ok(TaskProgress::InProgress {
                completed: self.next,
                total,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::{
        config::WorldConfig,
        error::EngineError,
        voxels::block::material::{MaterialCatalog, MaterialEntry},
    };

    fn config(world_size: usize) -> WorldConfig {
        WorldConfig {
            chunk_width: 2,
            chunk_height: 2,
            world_size,
            ..Default::default()
        }
    }

    fn setup(world_size: usize) -> (ChunkGenerationTask, World) {
        let config = config(world_size);
        let catalog = MaterialCatalog::new(vec![MaterialEntry::new("stone", [0.5; 3])]).unwrap();
        let generator = ChunkGenerator::new(Box::new(|_: f64, _: f64| -> f32 { 1.0 }), &config, &catalog);

        (
            ChunkGenerationTask::new(generator, world_size),
            World::new(&config).unwrap(),
        )
    }

    #[test]
    fn generates_one_chunk_per_step() {
        let (mut task, mut world) = setup(2);

        assert_eq!(
            task.step(&mut world).unwrap(),
            TaskProgress::InProgress { completed: 1, total: 4 }
        );
        assert_eq!(world.generated_count(), 1);
        assert!(world.get_chunk_at(ChunkIndex::new(0, 0)).is_some());

        // z is the inner axis.
        task.step(&mut world).unwrap();
        assert!(world.get_chunk_at(ChunkIndex::new(0, 1)).is_some());
        assert!(world.get_chunk_at(ChunkIndex::new(1, 0)).is_none());
    }

    #[test]
    fn completion_is_reported_only_after_last_chunk() {
        let (mut task, mut world) = setup(2);

        for _ in 0..3 {
            assert!(!task.step(&mut world).unwrap().is_complete());
            assert!(!world.is_generation_complete());
        }
        assert_eq!(task.step(&mut world).unwrap(), TaskProgress::Complete);
        assert!(world.is_generation_complete());

        assert_eq!(task.step(&mut world).unwrap(), TaskProgress::Complete);
        assert_eq!(task.completed(), 4);
    }

    #[test]
    fn refused_chunk_fails_the_step_without_advancing() {
        // The task believes the world is 2 chunks wide; the world holds only one.
        let (mut task, _) = setup(2);
        let mut world = World::new(&config(1)).unwrap();

        assert_eq!(
            task.step(&mut world).unwrap(),
            TaskProgress::InProgress { completed: 1, total: 4 }
        );
        for _ in 0..2 {
            assert!(matches!(
                task.step(&mut world),
                Err(EngineError::ChunkOutOfBounds { .. })
            ));
            assert_eq!(task.completed(), 1);
        }
    }
}
