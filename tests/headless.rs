use voxel_world::{run_headless, EngineError, EngineSettings, WorldConfig};

fn small_settings() -> EngineSettings {
    EngineSettings {
        world: WorldConfig {
            chunk_width: 4,
            chunk_height: 8,
            world_size: 3,
            height_layers: 2,
            noise_seed: 7,
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn headless_run_generates_then_meshes_incrementally() {
    let stats = run_headless(small_settings(), 40).unwrap();

    assert_eq!(stats.generation_ticks, 9);
    assert_eq!(stats.orbit_ticks, 40);
    assert!(stats.meshed_chunks >= 1);
    assert!(stats.meshed_chunks <= 9);
}

#[test]
fn invalid_settings_fail_before_generation() {
    let mut settings = small_settings();
    settings.world.tile_size = -1.0;

    assert!(matches!(
        run_headless(settings, 1),
        Err(EngineError::InvalidConfig { field: "tile_size", .. })
    ));

    let mut settings = small_settings();
    settings.materials.clear();
    assert!(matches!(
        run_headless(settings, 1),
        Err(EngineError::InvalidMaterialCatalog(_))
    ));
}

#[test]
fn settings_load_from_json_file() {
    let path = std::env::temp_dir().join(format!("voxel-world-settings-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "world": { "chunk_width": 4, "chunk_height": 8, "world_size": 2 }, "materials": [{ "name": "basalt", "color": [0.2, 0.2, 0.2] }] }"#,
    )
    .unwrap();

    let settings = EngineSettings::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(settings.world.world_size, 2);
    assert_eq!(settings.materials[0].name, "basalt");
    assert_eq!(run_headless(settings, 0).unwrap().generation_ticks, 4);
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let result = EngineSettings::from_json_file("/nonexistent/voxel-world.json");
    assert!(matches!(result, Err(EngineError::Io(_))));
}
