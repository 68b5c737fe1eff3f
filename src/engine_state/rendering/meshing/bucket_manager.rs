//! Grouping of emitted quads into `(material, height layer)` buckets.
//!
//! A chunk is split into horizontal bands so that no single mesh grows with the full
//! chunk height. Each band is further split by material, so every bucket becomes one
//! drawable mesh drawn with one material.
//!
//! # Bucket Organization
//! - Layer boundaries are `round(lerp(0, chunk_height, i / height_layers))` for
//!   `i = 1..height_layers`
//! - Buckets are created on first use and kept in creation order
//! - A bucket never mixes materials or layers

use log::trace;

use crate::engine_state::math::{lerp, round_to_int};

use super::mesh::{DrawableMesh, FaceSet, MeshBucket};

/// Lower y bounds of every height layer except the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerThresholds {
    thresholds: Vec<i32>,
}

impl LayerThresholds {
    /// Computes the layer boundaries of a chunk.
    ///
    /// # Arguments
    /// * `chunk_height` - Voxels along the chunk's y axis
    /// * `height_layers` - Number of bands; `0` is treated as `1`
    pub fn new(chunk_height: usize, height_layers: usize) -> Self {
        let layers = height_layers.max(1);
        let thresholds = (1..layers)
            .map(|i| round_to_int(lerp(0.0, chunk_height as f32, i as f32 / layers as f32)))
            .collect();

        LayerThresholds { thresholds }
    }

    /// The height layer a voxel at `y` belongs to.
    ///
    /// Counts thresholds in ascending order and stops at the first one `y` is below.
    pub fn layer_index(&self, y: usize) -> usize {
        self.thresholds
            .iter()
            .take_while(|threshold| y as i64 >= **threshold as i64)
            .count()
    }

    /// The boundaries themselves.
    pub fn thresholds(&self) -> &[i32] {
        &self.thresholds
    }
}

/// Routes quads into buckets keyed by `(material, layer)`.
pub struct MeshBucketManager {
    layers: LayerThresholds,
    tile_size: f32,
    buckets: Vec<MeshBucket>,
}

impl MeshBucketManager {
    /// Creates a manager with no buckets.
    pub fn new(layers: LayerThresholds, tile_size: f32) -> Self {
        Self {
            layers,
            tile_size,
            buckets: Vec::new(),
        }
    }

    /// Emits one quad per exposed face of `face_set` into its bucket.
    pub fn add_face_set(&mut self, face_set: &FaceSet) {
        let layer_index = self.layers.layer_index(face_set.position.y);
        let tile_size = self.tile_size;
        let bucket = self.bucket_mut(face_set.material_index, layer_index);

        for side in face_set.exposed_sides() {
            bucket.add_quad(face_set.position, side, tile_size);
        }
    }

    /// Finalizes every non-empty bucket, in creation order.
    pub fn into_drawables(self) -> Vec<DrawableMesh> {
        self.buckets
            .into_iter()
            .filter(|bucket| !bucket.is_empty())
            .map(MeshBucket::into_drawable)
            .collect()
    }

    fn bucket_mut(&mut self, material_index: usize, layer_index: usize) -> &mut MeshBucket {
        let position = self.buckets.iter().position(|bucket| {
            bucket.material_index == material_index && bucket.layer_index == layer_index
        });

        let position = match position {
            Some(position) => position,
            None => {
                trace!("New mesh bucket: material {material_index}, layer {layer_index}");
                self.buckets.push(MeshBucket::new(material_index, layer_index));
                self.buckets.len() - 1
            }
        };

        &mut self.buckets[position]
    }
}
