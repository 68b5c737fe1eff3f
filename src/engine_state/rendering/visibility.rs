//! # Visibility Scheduler
//!
//! Decides each tick which chunks around the camera are worth drawing, draws the
//! ones that already have a mesh and meshes at most one more.
//!
//! ## Per-tick Flow
//!
//! 1. Do nothing until a camera is supplied and the world is fully generated
//! 2. Scan the square of chunks around the camera's chunk
//! 3. Drop chunks beyond the draw distance or behind the camera
//! 4. Queue unmeshed survivors; submit draw commands for meshed ones
//! 5. Pop one chunk from the draw queue and mesh it
//!
//! Meshing one chunk per tick bounds the cost of a frame regardless of how many
//! chunks come into view at once.

use std::ops::Range;

use cgmath::{InnerSpace, MetricSpace, One, Point3, Quaternion, Vector3};
use log::{debug, info};

use crate::engine_state::{
    camera_state::CameraView,
    config::WorldConfig,
    error::Result,
    task_management::DrawQueue,
    voxels::{block::material::MaterialCatalog, chunk::ChunkIndex, world::World},
};

use super::{
    meshing::{ChunkMesh, ChunkMeshState, ChunkMeshStates, MeshExtractor},
    DrawCommand, RenderSink,
};

/// Why a tick did no work.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No camera was supplied.
    NoCamera,
    /// The world is still being generated.
    GenerationIncomplete,
}

/// What a single scheduler tick did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Set when the tick was a no-op.
    pub skipped: Option<SkipReason>,
    /// Chunks that passed the distance and facing tests.
    pub candidates: usize,
    /// Chunks newly added to the draw queue.
    pub enqueued: usize,
    /// Draw commands handed to the render sink.
    pub draw_commands: usize,
    /// The chunk meshed at the end of the tick, if any.
    pub meshed: Option<ChunkIndex>,
}

impl TickReport {
    fn skipped(reason: SkipReason) -> Self {
        TickReport {
            skipped: Some(reason),
            ..Default::default()
        }
    }
}

/// World position of a chunk's origin.
pub fn chunk_world_position(x: i32, z: i32, config: &WorldConfig) -> Point3<f32> {
    let chunk_length = config.chunk_world_length();
    Point3::new(x as f32 * chunk_length, 0.0, z as f32 * chunk_length)
}

/// The chunk coordinates to scan along one axis, clipped to the world.
///
/// The window is `[center - reach, center + reach)` computed without overflow, so a
/// camera far outside the world yields an empty range.
fn scan_range(center: i32, reach: usize, world_size: usize) -> Range<i32> {
    let reach = i64::try_from(reach).unwrap_or(i64::MAX);
    let limit = i64::try_from(world_size)
        .unwrap_or(i64::MAX)
        .min(i64::from(i32::MAX));

    let start = i64::from(center).saturating_sub(reach).clamp(0, limit);
    let end = i64::from(center).saturating_add(reach).clamp(0, limit);

    // Both ends lie in [0, i32::MAX] after clamping.
    start as i32..end as i32
}

/// Whether the chunk at `(x, z)` is close enough and not behind the camera.
///
/// Distance is measured on the ground plane in chunk lengths and must be strictly
/// below the draw distance. The facing test shifts the chunk forward by
/// `visible_back_chunks` chunk lengths so chunks just behind the camera survive.
pub fn is_candidate_visible(x: i32, z: i32, camera: &CameraView, config: &WorldConfig) -> bool {
    let chunk_length = config.chunk_world_length();
    let position = chunk_world_position(x, z, config);

    let ground = Point3::new(camera.position.x, 0.0, camera.position.z);
    if position.distance(ground) / chunk_length >= config.draw_distance as f32 {
        return false;
    }

    let forward = camera.flattened_forward();
    let shifted: Vector3<f32> =
        position + forward * chunk_length * config.visible_back_chunks - camera.position;

    shifted.dot(forward) >= 0.0
}

/// Tracks per-chunk meshing state and drives drawing and meshing each tick.
pub struct VisibilityScheduler {
    config: WorldConfig,
    extractor: MeshExtractor,
    states: ChunkMeshStates,
    /// Cached meshes, one slot per chunk; allocated on the first active tick.
    caches: Vec<Option<ChunkMesh>>,
    queue: DrawQueue,
}

impl VisibilityScheduler {
    /// Creates a scheduler for a world built with `config`.
    pub fn new(config: &WorldConfig) -> Self {
        VisibilityScheduler {
            config: config.clone(),
            extractor: MeshExtractor::new(config),
            states: ChunkMeshStates::new(config.world_size),
            caches: Vec::new(),
            queue: DrawQueue::new(config.world_size),
        }
    }

    /// The meshing state of a chunk.
    pub fn state(&self, index: ChunkIndex) -> Option<ChunkMeshState> {
        self.states.get(index)
    }

    /// The cached mesh of a chunk, if it has been meshed.
    pub fn cached_mesh(&self, index: ChunkIndex) -> Option<&ChunkMesh> {
        let slot = self.states.slot(index)?;
        self.caches.get(slot).and_then(Option::as_ref)
    }

    /// Number of chunks with a cached mesh.
    pub fn meshed_count(&self) -> usize {
        self.states.meshed_count()
    }

    /// Chunks waiting to be meshed.
    pub fn queue(&self) -> &DrawQueue {
        &self.queue
    }

    /// Runs one scheduling tick.
    ///
    /// # Arguments
    /// * `world` - The chunk store, read only
    /// * `catalog` - Resolves mesh material indices
    /// * `camera` - The viewer; `None` makes the tick a no-op
    /// * `sink` - Receives the draw commands
    ///
    /// # Errors
    /// Fails when a cached mesh names a material outside the catalog or a queued
    /// chunk's neighbours cannot be read.
    pub fn tick(
        &mut self,
        world: &World,
        catalog: &MaterialCatalog,
        camera: Option<&CameraView>,
        sink: &mut dyn RenderSink,
    ) -> Result<TickReport> {
        let Some(camera) = camera else {
            return Ok(TickReport::skipped(SkipReason::NoCamera));
        };
        if !world.is_generation_complete() {
            return Ok(TickReport::skipped(SkipReason::GenerationIncomplete));
        }
        if self.caches.is_empty() {
            self.caches.resize_with(self.config.chunk_count(), || None);
        }

        let mut report = TickReport::default();
        let (center_x, center_z) = camera.chunk_center(&self.config);
        let reach = self.config.draw_distance;
        let world_size = self.config.world_size;

        for x in scan_range(center_x, reach, world_size) {
            for z in scan_range(center_z, reach, world_size) {
                let Some(index) = world.checked_index(x, z) else {
                    continue;
                };
                if !is_candidate_visible(x, z, camera, &self.config) {
                    continue;
                }
                report.candidates += 1;

                match self.states.get(index) {
                    Some(ChunkMeshState::Unmeshed) => {
                        self.states.mark_queued(index);
                        if self.queue.enqueue(index) {
                            report.enqueued += 1;
                        }
                    }
                    Some(ChunkMeshState::Meshed) => {
                        report.draw_commands +=
                            self.submit_chunk(index, x, z, catalog, sink)?;
                    }
                    Some(ChunkMeshState::QueuedForMesh) | None => {}
                }
            }
        }

        report.meshed = self.mesh_next(world, sink)?;

        Ok(report)
    }

    /// Submits one draw command per cached mesh of a chunk.
    fn submit_chunk(
        &self,
        index: ChunkIndex,
        x: i32,
        z: i32,
        catalog: &MaterialCatalog,
        sink: &mut dyn RenderSink,
    ) -> Result<usize> {
        let Some(chunk_mesh) = self.cached_mesh(index) else {
            return Ok(0);
        };
        let position = chunk_world_position(x, z, &self.config);

        for mesh in &chunk_mesh.meshes {
            sink.submit(DrawCommand {
                mesh,
                position,
                rotation: Quaternion::one(),
                material: catalog.get(mesh.material_index)?,
            });
        }

        Ok(chunk_mesh.meshes.len())
    }

    /// Meshes the oldest queued chunk.
    ///
    /// The chunk leaves the queue only once its voxels and neighbours have been read,
    /// so a failed read leaves it queued for a later tick.
    fn mesh_next(
        &mut self,
        world: &World,
        sink: &mut dyn RenderSink,
    ) -> Result<Option<ChunkIndex>> {
        let Some(index) = self.queue.front() else {
            return Ok(None);
        };

        let chunk = world.require_chunk(index)?;
        let neighbors = world.neighbors(index)?;
        self.queue.pop_front();

        let mut chunk_mesh = self.extractor.extract(chunk, &neighbors);
        for mesh in &mut chunk_mesh.meshes {
            sink.prepare_mesh(mesh);
        }

        if let Some(slot) = self.states.slot(index) {
            self.caches[slot] = Some(chunk_mesh);
        }
        self.states.mark_meshed(index);

        let meshed = self.states.meshed_count();
        debug!("Meshed chunk ({}, {}), {} queued", index.x, index.z, self.queue.len());
        if meshed == self.config.chunk_count() {
            info!("Every chunk has been meshed");
        }

        Ok(Some(index))
    }
}
