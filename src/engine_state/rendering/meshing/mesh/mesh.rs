//! Mesh data structures and operations for voxel rendering.
//!
//! This module provides the growable per-bucket buffers quads are emitted into and
//! the drawable mesh they are finalized as.

use cgmath::{Point3, Vector2, Vector3};

use crate::engine_state::{rendering::Vertex, voxels::block::block_side::BlockSide};

/// UV coordinates of a quad's four vertices in emission order.
const QUAD_UVS: [[f32; 2]; 4] = [[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]];

/// Index pattern of a quad's two triangles, relative to its first vertex.
const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// Growable geometry for every quad sharing a material and a height layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBucket {
    /// Index into the material catalog
    pub material_index: usize,
    /// Height layer of the chunk the quads belong to
    pub layer_index: usize,
    positions: Vec<Vector3<f32>>,
    indices: Vec<u32>,
    normals: Vec<Vector3<f32>>,
    uvs: Vec<Vector2<f32>>,
}

impl MeshBucket {
    /// Creates a new, empty bucket for the given material and layer.
    pub fn new(material_index: usize, layer_index: usize) -> Self {
        MeshBucket {
            material_index,
            layer_index,
            positions: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
        }
    }

    /// Appends the quad for one face of the voxel at `position`.
    ///
    /// # Arguments
    /// * `position` - The voxel's position in chunk coordinates
    /// * `side` - The face to emit
    /// * `tile_size` - World units per voxel
    ///
    /// Adds four vertices and the two triangles `(n, n+1, n+3)`, `(n+1, n+2, n+3)`.
    pub fn add_quad(&mut self, position: Point3<usize>, side: BlockSide, tile_size: f32) {
        let base = self.positions.len() as u32;
        let centre = Vector3::new(position.x as f32, position.y as f32, position.z as f32) * tile_size;
        let normal = side.normal();

        for (corner, uv) in side.quad_corners(tile_size).into_iter().zip(QUAD_UVS) {
            self.positions.push(centre + corner);
            self.normals.push(normal);
            self.uvs.push(uv.into());
        }
        self.indices
            .extend(QUAD_INDICES.iter().map(|offset| base + offset));
    }

    /// Whether no quad has been emitted.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Finalizes the bucket into a drawable mesh.
    pub fn into_drawable(self) -> DrawableMesh {
        DrawableMesh {
            material_index: self.material_index,
            layer_index: self.layer_index,
            positions: self.positions,
            indices: self.indices,
            normals: self.normals,
            uvs: self.uvs,
        }
    }
}

/// A finished mesh for one `(material, layer)` bucket of a chunk.
///
/// Positions are chunk-local; the draw command carries the chunk's world position.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableMesh {
    /// Index into the material catalog
    pub material_index: usize,
    /// Height layer the mesh was built from
    pub layer_index: usize,
    /// Vertex positions
    pub positions: Vec<Vector3<f32>>,
    /// Triangle list indices into `positions`
    pub indices: Vec<u32>,
    /// Per-vertex normals
    pub normals: Vec<Vector3<f32>>,
    /// Per-vertex texture coordinates
    pub uvs: Vec<Vector2<f32>>,
}

impl DrawableMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Packs the separate buffers into interleaved vertices plus the index list.
    ///
    /// # Returns
    /// A tuple of vertices and indices ready for `bytemuck::cast_slice`.
    pub fn to_interleaved(&self) -> (Vec<Vertex>, Vec<u32>) {
        let vertices = self
            .positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .map(|((position, normal), uv)| Vertex::new(*position, *normal, *uv))
            .collect();

        (vertices, self.indices.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_indices_follow_vertex_base() {
        let mut bucket = MeshBucket::new(0, 0);
        bucket.add_quad(Point3::new(0, 0, 0), BlockSide::TOP, 1.0);
        bucket.add_quad(Point3::new(1, 0, 0), BlockSide::LEFT, 1.0);

        let mesh = bucket.into_drawable();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 3, 1, 2, 3, 4, 5, 7, 5, 6, 7]);
    }

    #[test]
    fn quad_is_placed_at_scaled_voxel_position() {
        let mut bucket = MeshBucket::new(0, 0);
        bucket.add_quad(Point3::new(2, 1, 0), BlockSide::TOP, 2.0);

        let mesh = bucket.into_drawable();
        // Voxel centre (4, 2, 0); top face one tile-half above it.
        assert_eq!(mesh.positions[0], Vector3::new(5.0, 3.0, 1.0));
        assert_eq!(mesh.positions[2], Vector3::new(3.0, 3.0, -1.0));
        assert!(mesh.normals.iter().all(|n| *n == Vector3::new(0.0, 1.0, 0.0)));
        assert_eq!(mesh.uvs[0], Vector2::new(1.0, 1.0));
        assert_eq!(mesh.uvs[3], Vector2::new(0.0, 1.0));
    }

    #[test]
    fn interleaving_preserves_attributes() {
        let mut bucket = MeshBucket::new(1, 2);
        bucket.add_quad(Point3::new(0, 0, 0), BlockSide::FRONT, 1.0);

        let mesh = bucket.into_drawable();
        let (vertices, indices) = mesh.to_interleaved();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices, mesh.indices);
        let expected: [f32; 3] = mesh.positions[1].into();
        assert_eq!(vertices[1].position, expected);
        assert_eq!(vertices[1].normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[1].tex_coords, [1.0, 0.0]);
    }
}
