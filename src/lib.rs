#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! Chunked voxel terrain generation and face-culled mesh extraction, with a
//! visibility scheduler that decides each frame which chunks to draw and meshes
//! at most one new chunk per frame.
//!
//! ## Key Modules
//!
//! * `engine_state` - The engine context: configuration, world, meshing and scheduling
//!
//! ## Architecture
//!
//! * A noise-driven generator fills a fixed `world_size × world_size` grid of chunks,
//!   one chunk per tick
//! * Mesh extraction keeps only exposed voxel faces and groups them into
//!   `(material, height layer)` buckets
//! * The visibility scheduler culls chunks by distance and facing and hands draw
//!   commands to a caller-supplied render sink
//!
//! ## Usage
//!
//! ```no_run
//! fn main() {
//!     voxel_world::run();
//! }
//! ```

use std::f32::consts::TAU;

use cgmath::{Point3, Rad};
use log::{error, info};
use web_time::{Duration, Instant};

pub mod engine_state;

pub use engine_state::{
    camera_state::{camera::Camera, CameraView},
    config::{EngineSettings, WorldConfig},
    error::{EngineError, Result},
    rendering::{DrawCommand, DrawableMesh, RenderSink},
    EngineState,
};

/// Number of ticks the headless driver spends orbiting the finished world.
pub const ORBIT_TICKS: usize = 720;

/// Statistics gathered by a headless run.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessStats {
    /// Ticks spent generating the world
    pub generation_ticks: usize,
    /// Ticks spent orbiting the finished world
    pub orbit_ticks: usize,
    /// Chunks with a cached mesh at the end of the run
    pub meshed_chunks: usize,
    /// Draw commands submitted across all orbit ticks
    pub draw_calls: usize,
    /// Triangles submitted across all orbit ticks
    pub triangles: usize,
    /// Mean wall-clock duration of an orbit tick
    pub mean_tick: Duration,
}

/// A render sink that only counts what it is given.
#[derive(Debug, Default)]
struct DrawCounter {
    draw_calls: usize,
    triangles: usize,
}

impl RenderSink for DrawCounter {
    fn submit(&mut self, command: DrawCommand<'_>) {
        self.draw_calls += 1;
        self.triangles += command.mesh.triangle_count();
    }
}

/// Generates a world from `settings`, then orbits a camera around it.
///
/// # Arguments
/// * `settings` - World configuration and materials
/// * `orbit_ticks` - Number of ticks to orbit once generation is complete
///
/// # Errors
/// Propagates configuration errors and any error raised by a tick.
pub fn run_headless(settings: EngineSettings, orbit_ticks: usize) -> Result<HeadlessStats> {
    let mut engine = EngineState::with_perlin(settings)?;
    let mut sink = DrawCounter::default();

    let mut generation_ticks = 0;
    while !engine.is_generation_complete() {
        engine.tick(None, &mut sink)?;
        generation_ticks += 1;
    }
    info!("Generated world in {} ticks", generation_ticks);

    let config = engine.config().clone();
    let half_extent = config.world_size as f32 * config.chunk_world_length() / 2.0;
    let centre = Point3::new(half_extent, 0.0, half_extent);
    let height = config.chunk_height as f32 * config.tile_size;

    let mut camera = Camera::new(centre, Rad(0.0), Rad(0.0));
    let mut elapsed = Duration::ZERO;

    for tick in 0..orbit_ticks {
        let angle = TAU * tick as f32 / orbit_ticks as f32;
        camera.position = Point3::new(
            centre.x + half_extent * angle.cos(),
            height,
            centre.z + half_extent * angle.sin(),
        );
        camera.look_at(centre);

        let start = Instant::now();
        engine.tick(Some(&camera.view()), &mut sink)?;
        elapsed += start.elapsed();
    }

    let stats = HeadlessStats {
        generation_ticks,
        orbit_ticks,
        meshed_chunks: engine.scheduler().meshed_count(),
        draw_calls: sink.draw_calls,
        triangles: sink.triangles,
        mean_tick: elapsed / orbit_ticks.max(1) as u32,
    };
    info!(
        "Meshed {} of {} chunks, {} draw calls, {} triangles, {:?} per tick",
        stats.meshed_chunks,
        config.chunk_count(),
        stats.draw_calls,
        stats.triangles,
        stats.mean_tick
    );

    Ok(stats)
}

/// Runs the headless driver.
///
/// Logging is configured through `RUST_LOG`. The optional first command line
/// argument is a JSON settings file; defaults are used without one.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading settings from {}", path);
            EngineSettings::from_json_file(&path)
        }
        None => Ok(EngineSettings::default()),
    };

    if let Err(err) = settings.and_then(|settings| run_headless(settings, ORBIT_TICKS)) {
        error!("{}", err);
        std::process::exit(1);
    }
}
