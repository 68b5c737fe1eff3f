//! # Voxel World
//!
//! This module contains the voxel data side of the engine: what a voxel is, how
//! chunks store and generate voxels, and the world-wide chunk store.
//!
//! ## Architecture
//!
//! * **Block**: voxel identifiers, face directions and the material catalog
//! * **Chunk**: dense `width × height × width` voxel grids and the noise generator
//! * **World**: the `world_size × world_size` chunk store with neighbour access
//! * **Tasks**: the staged task that generates one chunk per step
//!
//! ## Data Flow
//!
//! 1. The generation task asks the generator for the next chunk in row-major order
//! 2. The chunk is stored in the world
//! 3. After the last chunk the world reports generation as complete
//! 4. Meshing reads chunks and their neighbours without mutating them

pub mod block;
pub mod chunk;
pub mod tasks;
pub mod world;
