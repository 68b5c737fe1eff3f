//! # World Configuration
//!
//! The immutable set of world and chunk dimensions plus the tuning constants the
//! generator, extractor and scheduler read. A configuration is validated once, before
//! the first chunk is generated, and never changes for the rest of the session.
//!
//! Settings can be built in code or loaded from a JSON document. Omitted fields fall
//! back to their defaults:
//!
//! ```json
//! {
//!     "world": { "chunk_width": 16, "chunk_height": 32, "world_size": 4 },
//!     "materials": [{ "name": "stone" }, { "name": "dirt" }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use super::voxels::block::material::{MaterialCatalog, MaterialEntry};

/// World and chunk dimensions together with the performance tuning constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Number of voxels along the x and z axes of a chunk.
    pub chunk_width: usize,
    /// Number of voxels along the y axis of a chunk.
    pub chunk_height: usize,
    /// Number of chunks along each horizontal axis of the world.
    pub world_size: usize,
    /// World units covered by a single voxel.
    pub tile_size: f32,
    /// Radius, in chunks, inside which chunks are drawn.
    pub draw_distance: usize,
    /// Number of vertical bands each chunk mesh is split into.
    pub height_layers: usize,
    /// How many chunk lengths behind the camera stay visible.
    pub visible_back_chunks: f32,
    /// Seed of the default coherent noise.
    pub noise_seed: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            chunk_width: 16,
            chunk_height: 64,
            world_size: 8,
            tile_size: 1.0,
            draw_distance: 4,
            height_layers: 4,
            visible_back_chunks: 1.0,
            noise_seed: 0,
        }
    }
}

impl WorldConfig {
    /// Checks every field against its valid range.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_width == 0 {
            return Err(invalid("chunk_width", "must be greater than zero"));
        }
        if self.chunk_height == 0 {
            return Err(invalid("chunk_height", "must be greater than zero"));
        }
        if self.world_size == 0 {
            return Err(invalid("world_size", "must be greater than zero"));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(invalid(
                "tile_size",
                &format!("must be a positive number, got {}", self.tile_size),
            ));
        }
        if self.height_layers == 0 {
            return Err(invalid("height_layers", "must be at least 1"));
        }
        if !(self.visible_back_chunks.is_finite() && self.visible_back_chunks >= 0.0) {
            return Err(invalid(
                "visible_back_chunks",
                &format!("must be zero or positive, got {}", self.visible_back_chunks),
            ));
        }
        if self.height_layers > self.chunk_height {
            log::warn!(
                "height_layers ({}) exceeds chunk_height ({}); some layers will stay empty",
                self.height_layers,
                self.chunk_height
            );
        }

        Ok(())
    }

    /// Length of one chunk edge in world units.
    pub fn chunk_world_length(&self) -> f32 {
        self.chunk_width as f32 * self.tile_size
    }

    /// Total number of chunks in the world.
    pub fn chunk_count(&self) -> usize {
        self.world_size * self.world_size
    }
}

fn invalid(field: &'static str, reason: &str) -> EngineError {
    EngineError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

/// Everything needed to start an engine: the world configuration and the material list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// World dimensions and tuning constants.
    pub world: WorldConfig,
    /// Ordered material entries; voxel ID `n` uses entry `n - 1`.
    pub materials: Vec<MaterialEntry>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            world: WorldConfig::default(),
            materials: vec![
                MaterialEntry::new("stone", [0.5, 0.5, 0.5]),
                MaterialEntry::new("dirt", [0.45, 0.3, 0.15]),
                MaterialEntry::new("grass", [0.3, 0.6, 0.2]),
                MaterialEntry::new("sand", [0.85, 0.8, 0.55]),
            ],
        }
    }
}

impl EngineSettings {
    /// Parses settings from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses settings from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Builds the material catalog described by these settings.
    pub fn material_catalog(&self) -> Result<MaterialCatalog> {
        MaterialCatalog::new(self.materials.clone())
    }
}
