//! Mesh extraction for voxel chunks.
//!
//! This module turns a populated chunk into drawable geometry in three passes:
//! 1. Face culling keeps only voxel faces that touch empty space or the world edge
//! 2. Every surviving voxel is assigned a height layer from its y coordinate
//! 3. Each exposed face becomes one quad in its `(material, layer)` bucket
//!
//! # Architecture
//! - `MeshExtractor`: Runs the passes for one chunk
//! - `MeshBucketManager`: Finds or creates the bucket for each quad
//! - `ChunkMeshStates`: Tracks where each chunk is in its meshing lifecycle
//! - `mesh/`: Face culling and quad emission
//!
//! # Output
//! A [`ChunkMesh`] holds the exposed-face list and one [`DrawableMesh`] per non-empty
//! bucket, ordered by when each `(material, layer)` pair was first seen.

use log::debug;

mod bucket_manager;
mod chunk_index_state;
mod mesh;

pub use bucket_manager::{LayerThresholds, MeshBucketManager};
pub use chunk_index_state::{ChunkMeshState, ChunkMeshStates};
pub use mesh::*;

use crate::engine_state::{
    config::WorldConfig,
    voxels::{chunk::Chunk, world::ChunkNeighbors},
};

/// The cached meshing result for one chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkMesh {
    /// Voxels with at least one exposed face
    pub clean_tiles: Vec<FaceSet>,
    /// One mesh per non-empty `(material, layer)` bucket
    pub meshes: Vec<DrawableMesh>,
}

impl ChunkMesh {
    /// Total number of exposed faces, which is also the number of quads.
    pub fn face_count(&self) -> usize {
        self.clean_tiles.iter().map(FaceSet::exposed_count).sum()
    }

    /// Total number of triangles across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(DrawableMesh::triangle_count).sum()
    }
}

/// Converts chunks into bucketed triangle meshes.
///
/// The extractor only reads chunks; the same instance meshes every chunk of a world.
#[derive(Debug, Clone)]
pub struct MeshExtractor {
    layers: LayerThresholds,
    tile_size: f32,
}

impl MeshExtractor {
    /// Creates an extractor for chunks of the configured size.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the chunk height, layer count and tile size
    pub fn new(config: &WorldConfig) -> Self {
        MeshExtractor {
            layers: LayerThresholds::new(config.chunk_height, config.height_layers),
            tile_size: config.tile_size,
        }
    }

    /// The layer boundaries used for bucketing.
    pub fn layers(&self) -> &LayerThresholds {
        &self.layers
    }

    /// Builds the mesh of a chunk.
    ///
    /// # Arguments
    ///
    /// * `chunk` - The chunk to mesh
    /// * `neighbors` - Adjacent chunks; `None` sides are the world edge
    ///
    /// # Returns
    ///
    /// The exposed faces and the drawable meshes of the chunk
    pub fn extract(&self, chunk: &Chunk, neighbors: &ChunkNeighbors<'_>) -> ChunkMesh {
        let clean_tiles = clean_tiles(chunk, neighbors);

        let mut bucket_manager = MeshBucketManager::new(self.layers.clone(), self.tile_size);
        for face_set in &clean_tiles {
            bucket_manager.add_face_set(face_set);
        }
        let meshes = bucket_manager.into_drawables();

        let mesh = ChunkMesh {
            clean_tiles,
            meshes,
        };
        debug!(
            "Meshed chunk ({}, {}): {} exposed voxels, {} faces, {} meshes",
            chunk.index.x,
            chunk.index.z,
            mesh.clean_tiles.len(),
            mesh.face_count(),
            mesh.meshes.len()
        );

        mesh
    }
}
