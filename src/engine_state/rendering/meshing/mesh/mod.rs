//! Face culling and quad emission for voxel rendering.
//!
//! # Architecture
//! - [`FaceSet`]: The exposed faces of one occupied voxel
//! - [`clean_tiles`]: Culls faces hidden by neighbouring voxels or chunks
//! - [`MeshBucket`]: Growable buffers for one `(material, layer)` pair
//! - [`DrawableMesh`]: A finished bucket, ready to submit or upload

mod face;
mod mesh;

pub use face::{clean_tiles, FaceSet};
pub use mesh::*;
