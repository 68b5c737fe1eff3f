use cgmath::{One, Point3, Quaternion, Vector3};

use voxel_world::engine_state::{
    camera_state::CameraView,
    config::{EngineSettings, WorldConfig},
    rendering::{meshing::ChunkMeshState, DrawCommand, RenderSink, SkipReason},
    voxels::{block::material::MaterialEntry, chunk::ChunkIndex},
    EngineState,
};

#[derive(Default)]
struct Recorder {
    commands: Vec<(Point3<f32>, Quaternion<f32>, String, usize)>,
    prepared: usize,
}

impl RenderSink for Recorder {
    fn submit(&mut self, command: DrawCommand<'_>) {
        self.commands.push((
            command.position,
            command.rotation,
            command.material.name.clone(),
            command.mesh.material_index,
        ));
    }

    fn prepare_mesh(&mut self, _mesh: &mut voxel_world::DrawableMesh) {
        self.prepared += 1;
    }
}

fn settings(world_size: usize, draw_distance: usize) -> EngineSettings {
    EngineSettings {
        world: WorldConfig {
            chunk_width: 4,
            chunk_height: 4,
            world_size,
            draw_distance,
            visible_back_chunks: 1.0,
            ..Default::default()
        },
        materials: vec![
            MaterialEntry::new("stone", [0.5; 3]),
            MaterialEntry::new("sand", [0.9, 0.8, 0.5]),
        ],
    }
}

/// An engine over solid terrain with every chunk already generated.
fn generated_engine(world_size: usize, draw_distance: usize) -> EngineState {
    let mut engine = EngineState::new(
        settings(world_size, draw_distance),
        Box::new(|_: f64, _: f64| -> f32 { 1.0 }),
    )
    .unwrap();

    let mut sink = Recorder::default();
    while !engine.is_generation_complete() {
        engine.tick(None, &mut sink).unwrap();
    }
    engine
}

fn origin_facing_x() -> CameraView {
    CameraView::new(Point3::new(0.0, 0.0, 0.0), Vector3::unit_x())
}

#[test]
fn no_camera_is_a_no_op() {
    let mut engine = generated_engine(2, 2);
    let report = engine.tick(None, &mut Recorder::default()).unwrap().report;

    assert_eq!(report.skipped, Some(SkipReason::NoCamera));
    assert!(engine.scheduler().queue().is_empty());
}

#[test]
fn scheduler_waits_for_generation() {
    let mut engine = EngineState::new(
        settings(2, 2),
        Box::new(|_: f64, _: f64| -> f32 { 1.0 }),
    )
    .unwrap();
    let camera = origin_facing_x();
    let mut sink = Recorder::default();

    for _ in 0..3 {
        let tick = engine.tick(Some(&camera), &mut sink).unwrap();
        assert_eq!(tick.report.skipped, Some(SkipReason::GenerationIncomplete));
        assert!(!tick.generation.is_complete());
    }

    // The fourth tick stores the last chunk and schedules in the same tick.
    let tick = engine.tick(Some(&camera), &mut sink).unwrap();
    assert!(tick.generation.is_complete());
    assert_eq!(tick.report.skipped, None);
    assert_eq!(tick.report.meshed, Some(ChunkIndex::new(0, 0)));
}

#[test]
fn camera_at_origin_queues_chunks_ahead() {
    let mut engine = generated_engine(4, 2);
    let mut sink = Recorder::default();

    let report = engine
        .tick(Some(&origin_facing_x()), &mut sink)
        .unwrap()
        .report;

    assert_eq!(report.candidates, 4);
    assert_eq!(report.enqueued, 4);
    assert_eq!(report.draw_commands, 0);
    assert_eq!(report.meshed, Some(ChunkIndex::new(0, 0)));

    let scheduler = engine.scheduler();
    assert_eq!(scheduler.state(ChunkIndex::new(1, 0)), Some(ChunkMeshState::QueuedForMesh));
    assert_eq!(scheduler.state(ChunkIndex::new(0, 0)), Some(ChunkMeshState::Meshed));
    assert_eq!(scheduler.state(ChunkIndex::new(2, 0)), Some(ChunkMeshState::Unmeshed));
    assert_eq!(scheduler.queue().len(), 3);
}

#[test]
fn repeated_ticks_do_not_requeue() {
    let mut engine = generated_engine(4, 2);
    let camera = origin_facing_x();
    let mut sink = Recorder::default();

    engine.tick(Some(&camera), &mut sink).unwrap();
    let second = engine.tick(Some(&camera), &mut sink).unwrap().report;

    assert_eq!(second.enqueued, 0);
    assert_eq!(engine.scheduler().queue().len(), 2);
}

#[test]
fn at_most_one_chunk_is_meshed_per_tick() {
    let mut engine = generated_engine(5, 8);
    let camera = CameraView::new(Point3::new(10.0, 2.0, 10.0), Vector3::new(0.0, -1.0, 0.0));
    let mut sink = Recorder::default();

    for ticks in 1..=30 {
        engine.tick(Some(&camera), &mut sink).unwrap();
        assert!(engine.scheduler().meshed_count() <= ticks);
    }
    assert_eq!(engine.scheduler().meshed_count(), 25);
    let cached_meshes: usize = (0..5)
        .flat_map(|x| (0..5).map(move |z| ChunkIndex::new(x, z)))
        .filter_map(|index| engine.scheduler().cached_mesh(index))
        .map(|chunk_mesh| chunk_mesh.meshes.len())
        .sum();
    assert_eq!(sink.prepared, cached_meshes);
}

#[test]
fn meshed_chunks_are_drawn_with_identity_rotation() {
    let mut engine = generated_engine(4, 2);
    let camera = origin_facing_x();
    let mut sink = Recorder::default();

    engine.tick(Some(&camera), &mut sink).unwrap();
    assert!(sink.commands.is_empty());

    let report = engine.tick(Some(&camera), &mut sink).unwrap().report;
    let mesh_count = engine
        .scheduler()
        .cached_mesh(ChunkIndex::new(0, 0))
        .unwrap()
        .meshes
        .len();

    // Solid terrain in four height layers: every layer of chunk (0, 0) has faces.
    assert_eq!(mesh_count, 4);
    assert_eq!(report.draw_commands, mesh_count);
    for (position, rotation, material, material_index) in &sink.commands {
        assert_eq!(*position, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(*rotation, Quaternion::one());
        assert_eq!(*material_index, 1);
        assert_eq!(material, "sand");
    }
}
