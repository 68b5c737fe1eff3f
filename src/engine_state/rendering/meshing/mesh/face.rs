use cgmath::Point3;

use crate::engine_state::voxels::{
    block::{block_side::BlockSide, material_index},
    chunk::Chunk,
    world::ChunkNeighbors,
};

/// The exposed faces of a single occupied voxel.
///
/// Produced by [`clean_tiles`]; only voxels with at least one exposed face are kept,
/// so a `FaceSet` never has all six flags cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceSet {
    /// Position of the voxel in chunk coordinates
    pub position: Point3<usize>,
    /// Index into the material catalog (`voxel id - 1`)
    pub material_index: usize,
    /// Exposure flags indexed by `BlockSide` discriminant
    pub faces: [bool; 6],
}

impl FaceSet {
    /// Whether `side` is exposed to empty space or the world boundary.
    pub fn is_exposed(&self, side: BlockSide) -> bool {
        self.faces[side as usize]
    }

    /// Whether any face is exposed.
    pub fn any_exposed(&self) -> bool {
        self.faces.iter().any(|exposed| *exposed)
    }

    /// Exposed sides in emission order.
    pub fn exposed_sides(&self) -> impl Iterator<Item = BlockSide> + '_ {
        BlockSide::all()
            .into_iter()
            .filter(|side| self.is_exposed(*side))
    }

    /// Number of exposed faces.
    pub fn exposed_count(&self) -> usize {
        self.faces.iter().filter(|exposed| **exposed).count()
    }
}

/// Culls hidden faces and returns one [`FaceSet`] per occupied voxel with any face
/// exposed, in storage order.
///
/// # Arguments
/// * `chunk` - The chunk being meshed
/// * `neighbors` - Adjacent chunks, consulted only for voxels on a horizontal edge
///
/// # Returns
/// The exposed voxels of the chunk. Fully enclosed voxels are omitted.
pub fn clean_tiles(chunk: &Chunk, neighbors: &ChunkNeighbors<'_>) -> Vec<FaceSet> {
    chunk
        .occupied_voxels()
        .filter_map(|(position, id)| {
            let material_index = material_index(id)?;
            let mut faces = [false; 6];
            for side in BlockSide::all() {
                faces[side as usize] = is_face_exposed(chunk, neighbors, position, side);
            }

            let face_set = FaceSet {
                position,
                material_index,
                faces,
            };
            face_set.any_exposed().then_some(face_set)
        })
        .collect()
}

/// Decides whether one face of an occupied voxel is visible.
///
/// Vertical faces are exposed at the top and bottom of the chunk. Horizontal faces on
/// a chunk edge check for the world edge first, then the neighbouring chunk's
/// boundary voxel.
fn is_face_exposed(
    chunk: &Chunk,
    neighbors: &ChunkNeighbors<'_>,
    position: Point3<usize>,
    side: BlockSide,
) -> bool {
    let Point3 { x, y, z } = position;
    let last = chunk.width() - 1;

    match side {
        BlockSide::TOP => y == chunk.height() - 1 || chunk.is_empty_at(x, y + 1, z),
        BlockSide::BOTTOM => y == 0 || chunk.is_empty_at(x, y - 1, z),
        BlockSide::FRONT => {
            if z == last {
                neighbors.pos_z.is_none_or(|next| next.is_empty_at(x, y, 0))
            } else {
                chunk.is_empty_at(x, y, z + 1)
            }
        }
        BlockSide::BACK => {
            if z == 0 {
                neighbors
                    .neg_z
                    .is_none_or(|next| next.is_empty_at(x, y, next.width() - 1))
            } else {
                chunk.is_empty_at(x, y, z - 1)
            }
        }
        BlockSide::RIGHT => {
            if x == last {
                neighbors.pos_x.is_none_or(|next| next.is_empty_at(0, y, z))
            } else {
                chunk.is_empty_at(x + 1, y, z)
            }
        }
        BlockSide::LEFT => {
            if x == 0 {
                neighbors
                    .neg_x
                    .is_none_or(|next| next.is_empty_at(next.width() - 1, y, z))
            } else {
                chunk.is_empty_at(x - 1, y, z)
            }
        }
    }
}
