//! # Engine Error Types
//!
//! All errors that can be raised while configuring, generating, meshing or
//! scheduling the voxel world.

use thiserror::Error;

/// Errors that can occur in the voxel engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A world configuration value is outside its valid range.
    #[error("invalid world configuration: {field} {reason}")]
    InvalidConfig {
        /// The offending configuration field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The material catalog cannot back the material noise clamp.
    #[error("invalid material catalog: {0}")]
    InvalidMaterialCatalog(String),

    /// A material index does not resolve to a catalog entry.
    #[error("material index out of range: {index} (catalog holds {len} materials)")]
    MaterialIndexOutOfRange {
        /// The index that was looked up.
        index: usize,
        /// The number of entries in the catalog.
        len: usize,
    },

    /// A chunk index lies outside `[0, world_size)` on either axis.
    #[error("chunk index ({x}, {z}) is outside a world of {world_size}x{world_size} chunks")]
    ChunkOutOfBounds {
        /// Chunk index on the x axis.
        x: i32,
        /// Chunk index on the z axis.
        z: i32,
        /// Number of chunks per axis.
        world_size: usize,
    },

    /// A chunk was read before the generator filled it.
    #[error("chunk ({x}, {z}) has not been generated yet")]
    ChunkNotGenerated {
        /// Chunk index on the x axis.
        x: usize,
        /// Chunk index on the z axis.
        z: usize,
    },

    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`EngineSettings`](super::config::EngineSettings).
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;
