//! # Engine State Module
//!
//! The core engine module that owns the voxel world and everything that turns it
//! into draw calls.
//!
//! ## Key Components
//!
//! * `EngineState` - The main state container for the engine
//! * `config` - World dimensions, tuning constants and JSON settings
//! * `camera_state` - The viewer position and facing supplied each tick
//! * `rendering` - Mesh extraction, the visibility scheduler and the render sink
//! * `task_management` - Staged tasks and the draw queue
//! * `voxels` - Voxel data, chunks and world generation
//!
//! ## Architecture
//!
//! Everything is single-threaded and step driven. The caller invokes
//! [`EngineState::tick`] once per frame: while the world is being generated each tick
//! generates one chunk; afterwards each tick draws visible meshed chunks and meshes
//! at most one new chunk.

use log::info;

use camera_state::CameraView;
use config::{EngineSettings, WorldConfig};
use error::Result;
use rendering::{RenderSink, TickReport, VisibilityScheduler};
use task_management::task::{StagedTask, TaskProgress};
use voxels::{
    block::material::MaterialCatalog,
    chunk::chunk_generation::{ChunkGenerator, PerlinPlaneNoise, PlaneNoise},
    tasks::chunk_generation_task::ChunkGenerationTask,
    world::World,
};

pub mod camera_state;
pub mod config;
pub mod error;
pub mod math;
pub mod rendering;
pub mod task_management;
pub mod voxels;

/// What one engine tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineTick {
    /// Generation progress after this tick
    pub generation: TaskProgress,
    /// What the visibility scheduler did
    pub report: TickReport,
}

/// The main state container for the voxel engine
///
/// # Examples
///
/// ```
/// use voxel_world::engine_state::{
///     camera_state::CameraView,
///     config::{EngineSettings, WorldConfig},
///     rendering::{DrawCommand, RenderSink},
///     EngineState,
/// };
///
/// struct Discard;
/// impl RenderSink for Discard {
///     fn submit(&mut self, _command: DrawCommand<'_>) {}
/// }
///
/// let settings = EngineSettings {
///     world: WorldConfig { chunk_width: 4, chunk_height: 4, world_size: 2, ..Default::default() },
///     ..Default::default()
/// };
/// let mut engine = EngineState::with_perlin(settings).unwrap();
/// let camera = CameraView::new(cgmath::Point3::new(0.0, 4.0, 0.0), cgmath::Vector3::unit_x());
///
/// while !engine.is_generation_complete() {
///     engine.tick(Some(&camera), &mut Discard).unwrap();
/// }
/// ```
pub struct EngineState {
    /// Immutable world configuration
    config: WorldConfig,
    /// Materials that voxel identifiers resolve to
    catalog: MaterialCatalog,
    /// The voxel world containing all chunk data
    world: World,
    /// Fills the world one chunk per tick
    generation_task: ChunkGenerationTask,
    /// Draws and meshes chunks once generation is complete
    scheduler: VisibilityScheduler,
}

impl EngineState {
    /// Creates a new engine state with all subsystems initialized
    ///
    /// # Arguments
    ///
    /// * `settings` - World configuration and material list
    /// * `noise` - The coherent noise that drives generation
    ///
    /// # Errors
    ///
    /// Rejects an invalid configuration or material list before any chunk exists.
    pub fn new(settings: EngineSettings, noise: Box<dyn PlaneNoise>) -> Result<Self> {
        let config = &settings.world;
        config.validate()?;
        let catalog = settings.material_catalog()?;

        let world = World::new(config)?;
        let generator = ChunkGenerator::new(noise, config, &catalog);
        let generation_task = ChunkGenerationTask::new(generator, config.world_size);
        let scheduler = VisibilityScheduler::new(config);

        info!(
            "Engine ready: {}x{} chunks of {}x{}x{} voxels, {} materials",
            config.world_size,
            config.world_size,
            config.chunk_width,
            config.chunk_height,
            config.chunk_width,
            catalog.len()
        );

        Ok(EngineState {
            config: settings.world,
            catalog,
            world,
            generation_task,
            scheduler,
        })
    }

    /// Creates an engine whose generator uses Perlin noise seeded from the settings.
    pub fn with_perlin(settings: EngineSettings) -> Result<Self> {
        let noise = PerlinPlaneNoise::new(settings.world.noise_seed);
        Self::new(settings, Box::new(noise))
    }

    /// Advances the engine by one tick.
    ///
    /// Generates the next chunk while generation is running, then runs one
    /// visibility tick, which is a no-op until the world is complete.
    ///
    /// # Arguments
    ///
    /// * `camera` - The viewer for this tick, if any
    /// * `sink` - Receives this tick's draw commands
    ///
    /// # Errors
    ///
    /// Fails when a generated chunk cannot be stored or the scheduler tick fails.
    pub fn tick(
        &mut self,
        camera: Option<&CameraView>,
        sink: &mut dyn RenderSink,
    ) -> Result<EngineTick> {
        let generation = if self.world.is_generation_complete() {
            TaskProgress::Complete
        } else {
            self.generation_task.step(&mut self.world)?
        };

        let report = self
            .scheduler
            .tick(&self.world, &self.catalog, camera, sink)?;

        Ok(EngineTick { generation, report })
    }

    /// Whether every chunk has been generated.
    pub fn is_generation_complete(&self) -> bool {
        self.world.is_generation_complete()
    }

    /// The world configuration.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// The material catalog.
    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// The chunk store.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The visibility scheduler and its mesh cache.
    pub fn scheduler(&self) -> &VisibilityScheduler {
        &self.scheduler
    }
}
