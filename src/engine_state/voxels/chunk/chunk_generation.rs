//! # Chunk Generation Module
//!
//! Fills a chunk from layered 2D coherent noise. Occupancy comes from the average of
//! three planar samples; occupied voxels then pick a material from a second set of
//! samples taken with the chunk offset negated.
//!
//! Every axis, the vertical one included, is scaled by `1 / chunk_width`. The vertical
//! noise frequency therefore follows the chunk width rather than the chunk height.

use noise::{NoiseFn, Perlin};

use crate::engine_state::{
    config::WorldConfig,
    math::round_to_int,
    voxels::block::{material::MaterialCatalog, VoxelId},
};

use super::{Chunk, ChunkCreationIterator, ChunkIndex};

/// Multiplier applied to the summed material samples.
pub const MATERIAL_NOISE_GAIN: f32 = 1.5;

/// A 2D coherent noise function returning values in `[0, 1]`.
///
/// Implemented for any `Fn(f64, f64) -> f32`, which is how tests inject constant or
/// hand-shaped noise.
pub trait PlaneNoise {
    /// Samples the noise at `(a, b)`.
    fn sample(&self, a: f64, b: f64) -> f32;
}

impl<F> PlaneNoise for F
where
    F: Fn(f64, f64) -> f32,
{
    fn sample(&self, a: f64, b: f64) -> f32 {
        self(a, b)
    }
}

/// Seeded Perlin noise remapped from `[-1, 1]` to `[0, 1]`.
pub struct PerlinPlaneNoise {
    perlin: Perlin,
}

impl PerlinPlaneNoise {
    /// Creates Perlin noise with the given seed.
    pub fn new(seed: u32) -> Self {
        PerlinPlaneNoise {
            perlin: Perlin::new(seed),
        }
    }
}

impl PlaneNoise for PerlinPlaneNoise {
    fn sample(&self, a: f64, b: f64) -> f32 {
        ((self.perlin.get([a, b]) + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }
}

/// Which way the chunk offset is applied to local coordinates before sampling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum OffsetSign {
    /// `local + chunk_offset`: true world coordinates, used for occupancy.
    Positive,
    /// `local - chunk_offset`: mirrored basis, used for material selection.
    Negative,
}

/// Generates the voxel grid of a chunk from its index.
///
/// Generation is pure: the same index, configuration and noise always produce the
/// same voxels.
pub struct ChunkGenerator {
    noise: Box<dyn PlaneNoise>,
    chunk_width: usize,
    chunk_height: usize,
    material_count: usize,
}

impl ChunkGenerator {
    /// Creates a generator sampling `noise`, clamping materials to `catalog`.
    pub fn new(
        noise: Box<dyn PlaneNoise>,
        config: &WorldConfig,
        catalog: &MaterialCatalog,
    ) -> Self {
        ChunkGenerator {
            noise,
            chunk_width: config.chunk_width,
            chunk_height: config.chunk_height,
            material_count: catalog.len(),
        }
    }

    /// Creates a generator backed by Perlin noise seeded from the configuration.
    pub fn perlin(config: &WorldConfig, catalog: &MaterialCatalog) -> Self {
        Self::new(
            Box::new(PerlinPlaneNoise::new(config.noise_seed)),
            config,
            catalog,
        )
    }

    /// Generates the chunk at `index`.
    pub fn generate(&self, index: ChunkIndex) -> Chunk {
        let mut cci = ChunkCreationIterator::new(index, self.chunk_width, self.chunk_height);

        while let Some(position) = cci.next_position() {
            cci.push_voxel(self.voxel_at(index, position.x, position.y, position.z));
        }

        cci.return_chunk()
    }

    /// Computes the voxel identifier for one chunk-relative position.
    pub fn voxel_at(&self, index: ChunkIndex, x: usize, y: usize, z: usize) -> VoxelId {
        let occupancy = self.sample_planes(index, x, y, z, OffsetSign::Positive);
        let occupancy = occupancy.iter().sum::<f32>() / 3.0;

        if round_to_int(occupancy) < 1 {
            return 0;
        }

        let material = self.sample_planes(index, x, y, z, OffsetSign::Negative);
        let material = (material.iter().sum::<f32>() * MATERIAL_NOISE_GAIN)
            .clamp(0.0, self.material_count as f32);

        round_to_int(material) as VoxelId
    }

    /// Samples the `(x, y)`, `(z, y)` and `(x, z)` planes at one voxel.
    fn sample_planes(
        &self,
        index: ChunkIndex,
        x: usize,
        y: usize,
        z: usize,
        sign: OffsetSign,
    ) -> [f32; 3] {
        let scale = 1.0 / self.chunk_width as f64;
        let offset_x = (index.x * self.chunk_width) as f64;
        let offset_z = (index.z * self.chunk_width) as f64;

        let (shifted_x, shifted_z) = match sign {
            OffsetSign::Positive => (x as f64 + offset_x, z as f64 + offset_z),
            OffsetSign::Negative => (x as f64 - offset_x, z as f64 - offset_z),
        };

        let sx = shifted_x * scale;
        let sz = shifted_z * scale;
        let sy = y as f64 * scale;

        [
            self.noise.sample(sx, sy),
            self.noise.sample(sz, sy),
            self.noise.sample(sx, sz),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine_state::voxels::block::material::MaterialEntry;

    fn catalog(len: usize) -> MaterialCatalog {
        MaterialCatalog::new(
            (0..len)
                .map(|i| MaterialEntry::new(format!("m{i}"), [0.0; 3]))
                .collect(),
        )
        .unwrap()
    }

    fn small_config() -> WorldConfig {
        WorldConfig {
            chunk_width: 4,
            chunk_height: 6,
            world_size: 3,
            ..Default::default()
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let config = small_config();
        let catalog = catalog(3);
        let generator = ChunkGenerator::perlin(&config, &catalog);

        for index in [ChunkIndex::new(0, 0), ChunkIndex::new(2, 1)] {
            let first = generator.generate(index);
            let second = generator.generate(index);
            assert_eq!(first.voxels(), second.voxels());
            assert_eq!(first.index, index);
        }
    }

    #[test]
    fn separate_generators_agree() {
        let config = small_config();
        let catalog = catalog(3);

        let a = ChunkGenerator::perlin(&config, &catalog).generate(ChunkIndex::new(1, 2));
        let b = ChunkGenerator::perlin(&config, &catalog).generate(ChunkIndex::new(1, 2));
        assert_eq!(a, b);
    }

    #[test]
    fn full_noise_fills_with_clamped_material() {
        let config = small_config();
        let catalog = catalog(2);
        let generator = ChunkGenerator::new(Box::new(|_: f64, _: f64| -> f32 { 1.0 }), &config, &catalog);

        let chunk = generator.generate(ChunkIndex::new(0, 0));
        // 3 samples * 1.5 = 4.5, clamped to the catalog length of 2.
        assert!(chunk.voxels().iter().all(|id| *id == 2));
    }

    #[test]
    fn zero_noise_leaves_chunk_empty() {
        let config = small_config();
        let catalog = catalog(2);
        let generator = ChunkGenerator::new(Box::new(|_: f64, _: f64| -> f32 { 0.0 }), &config, &catalog);

        assert_eq!(generator.generate(ChunkIndex::new(1, 1)).occupied_count(), 0);
    }

    #[test]
    fn exact_half_occupancy_rounds_to_empty() {
        let config = small_config();
        let catalog = catalog(2);
        let generator = ChunkGenerator::new(Box::new(|_: f64, _: f64| -> f32 { 0.5 }), &config, &catalog);

        assert_eq!(generator.voxel_at(ChunkIndex::new(0, 0), 1, 1, 1), 0);
    }

    #[test]
    fn occupied_voxel_with_zero_material_noise_stores_empty() {
        // Occupancy samples use positive x; the mirrored material samples of chunk 1
        // use negative x. Noise that is high for positive and zero for negative
        // coordinates makes an occupied voxel round its material to 0.
        let config = small_config();
        let catalog = catalog(2);
        let noise = |a: f64, _: f64| -> f32 { if a >= 0.0 { 1.0 } else { 0.0 } };
        let generator = ChunkGenerator::new(Box::new(noise), &config, &catalog);

        let index = ChunkIndex::new(1, 1);
        // x = 0: (0 - 4) and (0 - 4) are negative, so both x and z planes read 0.
        assert_eq!(generator.voxel_at(index, 0, 0, 0), 0);
    }

    #[test]
    fn chunk_offsets_shift_occupancy_samples() {
        let config = small_config();
        let catalog = catalog(4);
        // High only where the first coordinate leaves the [0, 1) span of chunk (0, 0).
        let noise = |a: f64, _: f64| -> f32 { if !(0.0..1.0).contains(&a) { 1.0 } else { 0.0 } };
        let generator = ChunkGenerator::new(Box::new(noise), &config, &catalog);

        let near = generator.generate(ChunkIndex::new(0, 0));
        let far = generator.generate(ChunkIndex::new(1, 0));
        assert!(near.occupied_count() < far.occupied_count());
    }
}
